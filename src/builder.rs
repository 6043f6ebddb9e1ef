use crate::address::AddressBlock;
use crate::config::LabelConfig;
use crate::document::{DocumentEmitter, PdfEmitter};
use crate::error::LabelError;
use crate::geometry::PageGeometry;
use crate::info::Info;
use crate::layout::LabelLayout;
use crate::metrics::{StandardMetrics, TextMetrics};
use crate::page::Page;
use log::info;
use std::io::Write;
use std::path::Path;

/// A finished label: where everything was placed, and the document bytes
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLabel {
    pub layout: LabelLayout,
    bytes: Vec<u8>,
}

impl RenderedLabel {
    pub fn geometry(&self) -> PageGeometry {
        self.layout.geometry
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the document to any writer
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), LabelError> {
        w.write_all(&self.bytes).map_err(LabelError::RenderingFailure)
    }

    /// Write the document to a file, replacing it if it already exists. Picking a
    /// path no other caller is writing to is up to the caller.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LabelError> {
        std::fs::write(path, &self.bytes).map_err(LabelError::RenderingFailure)
    }
}

/// Builds shipping labels: lays out the return and destination addresses on a
/// 6x4 inch page and emits the result as a document.
///
/// The builder holds only its configuration and capabilities; every call
/// starts from scratch, so one builder can be shared between threads.
///
/// # Example
///
/// ```
/// use shipping_label::{AddressBlock, LabelConfig, LabelDocumentBuilder};
///
/// let builder = LabelDocumentBuilder::new(LabelConfig::default());
/// let destination = AddressBlock::parse("Jane Doe\n123 Main St\nSpringfield, IL 62701");
/// let label = builder.build(&destination).expect("can build label");
///
/// assert!(label.as_bytes().starts_with(b"%PDF"));
/// ```
#[derive(Debug, Clone)]
pub struct LabelDocumentBuilder<M = StandardMetrics, E = PdfEmitter> {
    config: LabelConfig,
    metrics: M,
    emitter: E,
}

impl LabelDocumentBuilder {
    /// A builder using the standard font metrics and the PDF emitter, set up from
    /// `config`
    pub fn new(config: LabelConfig) -> Self {
        let mut emitter = PdfEmitter::default().with_compression(config.compress);
        if let Some(title) = &config.title {
            let mut info = Info::new();
            info.title(title);
            emitter = emitter.with_info(info);
        }
        LabelDocumentBuilder {
            config,
            metrics: StandardMetrics,
            emitter,
        }
    }
}

impl Default for LabelDocumentBuilder {
    fn default() -> Self {
        LabelDocumentBuilder::new(LabelConfig::default())
    }
}

impl<M: TextMetrics, E: DocumentEmitter> LabelDocumentBuilder<M, E> {
    /// A builder with custom measuring and emitting capabilities
    pub fn with_capabilities(config: LabelConfig, metrics: M, emitter: E) -> Self {
        LabelDocumentBuilder {
            config,
            metrics,
            emitter,
        }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Work out where everything goes without producing a document
    pub fn layout(
        &self,
        return_address: &AddressBlock,
        destination_address: &AddressBlock,
        geometry: &PageGeometry,
    ) -> Result<LabelLayout, LabelError> {
        LabelLayout::compute(return_address, destination_address, geometry, &self.metrics)
    }

    /// Lay out and emit a label. The return address is drawn at its fixed
    /// anchor (an empty one draws nothing); the destination is centred as a
    /// block and must have at least one line.
    pub fn build_label(
        &self,
        return_address: &AddressBlock,
        destination_address: &AddressBlock,
        geometry: &PageGeometry,
    ) -> Result<RenderedLabel, LabelError> {
        let layout = self.layout(return_address, destination_address, geometry)?;
        let page = Page::from_layout(&layout);
        let bytes = self.emitter.emit(&page)?;
        info!(
            "built label: {} destination line(s), {} return line(s), {} bytes",
            layout.destination_block.lines.len(),
            layout.return_block.lines.len(),
            bytes.len()
        );
        Ok(RenderedLabel { layout, bytes })
    }

    /// Build a standard 6x4 label using the configured return address
    pub fn build(&self, destination_address: &AddressBlock) -> Result<RenderedLabel, LabelError> {
        self.build_label(
            &self.config.return_block(),
            destination_address,
            &PageGeometry::LABEL_6X4,
        )
    }
}
