use crate::font::StandardFont;
use crate::geometry::PageGeometry;
use crate::layout::{BlockLayout, LabelLayout};
use crate::rect::Rect;
use crate::units::*;

/// A run of lines drawn in one font. The first baseline starts at `origin` and
/// each following line sits `leading` points below the previous one.
#[derive(Clone, PartialEq, Debug)]
pub struct TextBlock {
    pub font: StandardFont,
    pub size: Pt,
    pub leading: Pt,
    pub origin: (Pt, Pt),
    pub lines: Vec<String>,
}

impl From<&BlockLayout> for TextBlock {
    fn from(block: &BlockLayout) -> Self {
        TextBlock {
            font: block.style.font,
            size: block.style.size,
            leading: block.line_height,
            origin: block.origin,
            lines: block.lines.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(TextBlock),
}

/// A page in a document
#[derive(Clone, PartialEq, Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The draw commands, in painting order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new blank page of the given size
    pub fn new(geometry: &PageGeometry) -> Page {
        Page {
            media_box: geometry.media_box(),
            contents: Vec::default(),
        }
    }

    /// A page carrying every non-empty block of a label layout
    pub fn from_layout(layout: &LabelLayout) -> Page {
        let mut page = Page::new(&layout.geometry);
        for block in layout.blocks() {
            page.add_text_block(block.into());
        }
        page
    }

    pub fn add_text_block(&mut self, block: TextBlock) {
        self.contents.push(PageContents::Text(block));
    }

    /// The fonts the page's contents refer to, without duplicates
    pub fn fonts(&self) -> Vec<StandardFont> {
        StandardFont::ALL
            .into_iter()
            .filter(|font| {
                self.contents
                    .iter()
                    .any(|content| matches!(content, PageContents::Text(block) if block.font == *font))
            })
            .collect()
    }
}
