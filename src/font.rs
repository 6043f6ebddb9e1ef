use crate::{
    refs::ObjectReferences,
    Pt,
};
use pdf_writer::{Name, Pdf, Ref};

/// Glyph advance widths, in 1/1000 em, for WinAnsi codes 32 (space) through
/// 126 (`~`). Taken from the Adobe Core 14 AFM files.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' - '9'
    278, 278, 584, 584, 584, 556, 1015, // ':' - '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A' - 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' - 'Z'
    278, 278, 278, 469, 556, 333, // '[' - '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a' - 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n' - 'z'
    334, 260, 334, 584, // '{' - '~'
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' - '9'
    333, 333, 584, 584, 584, 611, 975, // ':' - '@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A' - 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' - 'Z'
    333, 278, 333, 584, 556, 333, // '[' - '`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a' - 'm'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n' - 'z'
    389, 280, 389, 584, // '{' - '~'
];

const FIRST_CODE: u8 = b' ';
const LAST_CODE: u8 = b'~';

/// Drawn (and measured) in place of any character the encoding can't represent
pub const REPLACEMENT_CHAR: char = '?';

/// One of the two faces a label is printed with. Both are PDF standard fonts, so
/// every conforming reader already has them and nothing is embedded in the
/// generated document; their metrics are compiled in so text can be measured
/// without any font files.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// Every face, in resource order
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    /// The PostScript name the font is known by in the PDF
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Index of the font in a page's resource dictionary, i.e. `/F0`, `/F1`
    pub fn index(&self) -> usize {
        match self {
            StandardFont::Helvetica => 0,
            StandardFont::HelveticaBold => 1,
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Map a character to its single-byte WinAnsi code. Only printable ASCII is
    /// supported; anything else maps to the code for [REPLACEMENT_CHAR].
    pub fn encode(ch: char) -> u8 {
        match u8::try_from(ch) {
            Ok(code) if (FIRST_CODE..=LAST_CODE).contains(&code) => code,
            _ => REPLACEMENT_CHAR as u8,
        }
    }

    /// Advance width of a single character in 1/1000 em
    pub fn glyph_width(&self, ch: char) -> u16 {
        let code = Self::encode(ch);
        self.widths()[(code - FIRST_CODE) as usize]
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        // sum in font units first so the result doesn't depend on summation order
        let units: u32 = text.chars().map(|ch| self.glyph_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (718.0 / 1000.0)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (-207.0 / 1000.0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let id = refs.gen();
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        id
    }
}
