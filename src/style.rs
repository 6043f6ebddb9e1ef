use crate::font::StandardFont;
use crate::units::Pt;

/// How a block of text is set: which face, at what size, and how far apart
/// consecutive baselines are as a multiple of the size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: StandardFont,
    pub size: Pt,
    pub leading: f32,
}

impl TextStyle {
    /// Small regular text for the sender, out of the way in the top-left corner
    pub const RETURN_ADDRESS: TextStyle = TextStyle {
        font: StandardFont::Helvetica,
        size: Pt(10.0),
        leading: 1.2,
    };

    /// Large bold text for the recipient, centred on the label
    pub const DESTINATION: TextStyle = TextStyle {
        font: StandardFont::HelveticaBold,
        size: Pt(14.0),
        leading: 1.2,
    };

    /// Distance between consecutive baselines
    pub fn line_height(&self) -> Pt {
        self.size * self.leading
    }
}
