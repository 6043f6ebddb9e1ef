//! Lays out and renders 6x4 inch shipping labels.
//!
//! A label carries two blocks of text: the sender's return address, small and
//! anchored in the top-left corner, and the destination address, large, bold
//! and centred on the page as one block. [LabelDocumentBuilder] does the
//! layout and hands back a single-page PDF.

mod address;
pub use address::*;

mod builder;
pub use builder::*;

mod config;
pub use config::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod geometry;
pub use geometry::*;

mod info;
pub use info::*;

/// Placement arithmetic for the blocks on a label
pub mod layout;

mod metrics;
pub use metrics::*;

mod page;
pub use page::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod shipment;
pub use shipment::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
