//! Placement arithmetic for the two text blocks on a label.
//!
//! Nothing in here touches a PDF: the functions turn address blocks, styles
//! and the page geometry into baseline coordinates, so the centring maths can
//! be checked with any [`TextMetrics`](crate::TextMetrics) implementation.
//!
//! # Example
//!
//! ```
//! use shipping_label::{AddressBlock, PageGeometry, StandardMetrics, TextStyle, Pt};
//! use shipping_label::layout::destination_block;
//!
//! let address = AddressBlock::from_lines(["Jane Doe", "123 Main St", "Springfield, IL 62701"]);
//! let block = destination_block(
//!     &address,
//!     &TextStyle::DESTINATION,
//!     &PageGeometry::LABEL_6X4,
//!     &StandardMetrics,
//! )
//! .expect("address has lines");
//!
//! assert!(block.vertical_midpoint().abs_diff(Pt(144.0)) < Pt(1e-3));
//! ```

mod block;

pub use block::*;

use crate::address::AddressBlock;
use crate::error::LabelError;
use crate::geometry::PageGeometry;
use crate::metrics::TextMetrics;
use crate::style::TextStyle;

/// Where everything on a label goes
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub geometry: PageGeometry,
    pub return_block: BlockLayout,
    pub destination_block: BlockLayout,
}

impl LabelLayout {
    /// Lay out a label with the standard return address and destination styles
    pub fn compute<M: TextMetrics>(
        return_address: &AddressBlock,
        destination_address: &AddressBlock,
        geometry: &PageGeometry,
        metrics: &M,
    ) -> Result<LabelLayout, LabelError> {
        let destination_block = destination_block(
            destination_address,
            &TextStyle::DESTINATION,
            geometry,
            metrics,
        )?;
        let return_block = return_block(return_address, &TextStyle::RETURN_ADDRESS, geometry);

        Ok(LabelLayout {
            geometry: *geometry,
            return_block,
            destination_block,
        })
    }

    /// The non-empty blocks, return address first
    pub fn blocks(&self) -> impl Iterator<Item = &BlockLayout> {
        [&self.return_block, &self.destination_block]
            .into_iter()
            .filter(|block| !block.is_empty())
    }
}
