use crate::address::AddressBlock;
use crate::error::LabelError;
use crate::geometry::PageGeometry;
use crate::metrics::TextMetrics;
use crate::rect::Rect;
use crate::style::TextStyle;
use crate::units::{In, Pt};
use log::{debug, warn};

/// Distance from the left edge of the page to the return address
pub const RETURN_ADDRESS_LEFT: In = In(0.25);
/// Distance from the top edge of the page to the first return address baseline
pub const RETURN_ADDRESS_TOP: In = In(0.5);

/// A block of lines placed on the page. Every line starts at the same x
/// coordinate; baselines step down from `origin` by `line_height`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub style: TextStyle,
    /// Where the first line's baseline starts
    pub origin: (Pt, Pt),
    pub line_height: Pt,
    pub lines: Vec<String>,
}

impl BlockLayout {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The baseline of the `index`th line
    pub fn baseline(&self, index: usize) -> Pt {
        self.origin.1 - self.line_height * index as f32
    }

    /// Each line with the coordinates its baseline starts at
    pub fn placements(&self) -> impl Iterator<Item = ((Pt, Pt), &str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| ((self.origin.0, self.baseline(i)), line.as_str()))
    }

    pub fn total_height(&self) -> Pt {
        self.line_height * self.lines.len() as f32
    }

    /// The top of the block: one line height above the first baseline
    pub fn top(&self) -> Pt {
        self.origin.1 + self.line_height
    }

    pub fn bottom(&self) -> Pt {
        self.top() - self.total_height()
    }

    pub fn vertical_midpoint(&self) -> Pt {
        self.top() - self.total_height() / 2.0
    }

    /// Width of the widest line
    pub fn width<M: TextMetrics>(&self, metrics: &M) -> Pt {
        widest_line(&self.lines, &self.style, metrics)
    }

    /// The area the inked text covers, from the ascent of the first line down to
    /// the descent of the last
    pub fn bounds<M: TextMetrics>(&self, metrics: &M) -> Rect {
        let last = self.lines.len().saturating_sub(1);
        Rect {
            x1: self.origin.0,
            y1: self.baseline(last) + self.style.font.descent(self.style.size),
            x2: self.origin.0 + self.width(metrics),
            y2: self.origin.1 + self.style.font.ascent(self.style.size),
        }
    }
}

fn widest_line<M: TextMetrics>(lines: &[String], style: &TextStyle, metrics: &M) -> Pt {
    lines
        .iter()
        .map(|line| metrics.width_of(line, style))
        .fold(Pt(0.0), Pt::max)
}

/// Place the return address at its fixed anchor in the top-left corner. No
/// measuring is involved; the anchor is the same however long the block is.
/// An empty block lays out to nothing.
pub fn return_block(block: &AddressBlock, style: &TextStyle, geometry: &PageGeometry) -> BlockLayout {
    let origin = (
        Pt::from(RETURN_ADDRESS_LEFT),
        geometry.height() - Pt::from(RETURN_ADDRESS_TOP),
    );
    BlockLayout {
        style: *style,
        origin,
        line_height: style.line_height(),
        lines: block.lines().to_vec(),
    }
}

/// Centre the destination address on the page as a single block.
///
/// The block is centred vertically on the page's midline, and horizontally by
/// its widest line; all lines share that left edge so the address reads as one
/// left-aligned paragraph. Lines wider than the page are not wrapped or shrunk.
pub fn destination_block<M: TextMetrics>(
    block: &AddressBlock,
    style: &TextStyle,
    geometry: &PageGeometry,
    metrics: &M,
) -> Result<BlockLayout, LabelError> {
    if block.is_empty() {
        return Err(LabelError::invalid_input(
            "destination address has no printable lines",
        ));
    }

    let line_height = style.line_height();
    let total_height = line_height * block.len() as f32;
    let widest = widest_line(block.lines(), style, metrics);
    if widest > geometry.width() {
        warn!(
            "destination line is {} pt wide, wider than the {} pt page; it will overflow",
            widest,
            geometry.width()
        );
    }

    let start_x = (geometry.width() - widest) / 2.0;
    let start_y = geometry.height() / 2.0 + total_height / 2.0 - line_height;
    debug!(
        "destination block: {} lines, {} pt wide, first baseline at ({}, {})",
        block.len(),
        widest,
        start_x,
        start_y
    );

    Ok(BlockLayout {
        style: *style,
        origin: (start_x, start_y),
        line_height,
        lines: block.lines().to_vec(),
    })
}
