//! Content stream rendering for pages.

use crate::font::StandardFont;
use crate::page::{PageContents, TextBlock};
use crate::units::Pt;
use std::io::Write;

/// Renders page contents to a PDF content stream.
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(block) => {
                render_text_block(&mut content, block)?;
            }
        }
    }

    Ok(content)
}

/// Draws the lines of a block inside one text object: the font, leading and
/// first baseline are set once, then every following line moves down with `T*`.
#[allow(clippy::write_with_newline)]
fn render_text_block(content: &mut Vec<u8>, block: &TextBlock) -> Result<(), std::io::Error> {
    if block.lines.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;
    write!(content, "0 g\n")?;
    write!(content, "BT\n")?;
    write!(content, "/F{} {} Tf\n", block.font.index(), number(block.size))?;
    write!(content, "{} TL\n", number(block.leading))?;
    write!(
        content,
        "{} {} Td\n",
        number(block.origin.0),
        number(block.origin.1)
    )?;

    for (i, line) in block.lines.iter().enumerate() {
        if i > 0 {
            write!(content, "T*\n")?;
        }
        write!(content, "<")?;
        for ch in line.chars() {
            write!(content, "{:02x}", StandardFont::encode(ch))?;
        }
        write!(content, "> Tj\n")?;
    }

    write!(content, "ET\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

/// Formats a length with at most three decimals, dropping trailing zeros, so
/// f32 noise such as `16.800001` is written as `16.8`.
fn number(value: Pt) -> String {
    let formatted = format!("{:.3}", value.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lines_with_leading() {
        let block = TextBlock {
            font: StandardFont::HelveticaBold,
            size: Pt(14.0),
            leading: Pt(16.5),
            origin: (Pt(100.0), Pt(150.5)),
            lines: vec!["Hi".to_string(), "é!".to_string()],
        };
        let rendered = render_contents(&[PageContents::Text(block)]).expect("can render");
        let rendered = String::from_utf8(rendered).expect("content is ascii");
        assert_eq!(
            rendered,
            "q\n0 g\nBT\n/F1 14 Tf\n16.5 TL\n100 150.5 Td\n<4869> Tj\nT*\n<3f21> Tj\nET\nQ\n"
        );
    }

    #[test]
    fn float_noise_is_trimmed() {
        assert_eq!(number(Pt(14.0) * 1.2), "16.8");
        assert_eq!(number(Pt(432.0)), "432");
        assert_eq!(number(Pt(152.4)), "152.4");
        assert_eq!(number(Pt(-0.0001)), "0");
        assert_eq!(number(Pt(-3.25)), "-3.25");
    }

    #[test]
    fn destination_leading_is_written_cleanly() {
        let block = TextBlock {
            font: StandardFont::HelveticaBold,
            size: Pt(14.0),
            leading: Pt(14.0) * 1.2,
            origin: (Pt(0.0), Pt(0.0)),
            lines: vec!["x".to_string()],
        };
        let rendered = render_contents(&[PageContents::Text(block)]).expect("can render");
        let rendered = String::from_utf8(rendered).expect("content is ascii");
        assert!(rendered.contains("\n16.8 TL\n"));
        assert!(rendered.contains("\n0 0 Td\n"));
    }

    #[test]
    fn empty_contents_render_nothing() {
        assert!(render_contents(&[]).expect("can render").is_empty());
    }
}
