use crate::{
    content::render_contents,
    error::LabelError,
    info::Info,
    page::Page,
    refs::ObjectReferences,
};
use log::debug;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// Turns a composed page into a finished document.
///
/// The whole document is produced in memory; nothing is handed back until it
/// is complete, so a failure never leaves a half-written file behind.
pub trait DocumentEmitter {
    fn emit(&self, page: &Page) -> Result<Vec<u8>, LabelError>;
}

/// Emits single-page PDF documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfEmitter {
    /// Written as the document information dictionary when present
    pub info: Option<Info>,
    /// Flate-compress the page content stream
    pub compress: bool,
}

impl Default for PdfEmitter {
    fn default() -> Self {
        PdfEmitter {
            info: None,
            compress: true,
        }
    }
}

impl PdfEmitter {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn with_info(mut self, info: Info) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

impl DocumentEmitter for PdfEmitter {
    fn emit(&self, page: &Page) -> Result<Vec<u8>, LabelError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen();
        let page_tree_id = refs.gen();
        let page_id = refs.gen();
        let content_id = refs.gen();

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        writer.pages(page_tree_id).count(1).kids([page_id]);

        let fonts = page.fonts();
        let font_refs: Vec<_> = fonts
            .iter()
            .map(|font| (*font, font.write(&mut refs, &mut writer)))
            .collect();

        let mut pdf_page = writer.page(page_id);
        pdf_page.media_box(page.media_box.into());
        pdf_page.parent(page_tree_id);
        pdf_page.contents(content_id);

        let mut resources = pdf_page.resources();
        let mut resource_fonts = resources.fonts();
        for (font, id) in font_refs.iter() {
            resource_fonts.pair(Name(format!("F{}", font.index()).as_bytes()), *id);
        }
        resource_fonts.finish();
        resources.finish();
        pdf_page.finish();

        let rendered = render_contents(&page.contents)?;
        if self.compress {
            let compressed =
                compress_to_vec_zlib(&rendered, CompressionLevel::DefaultCompression as u8);
            writer
                .stream(content_id, compressed.as_slice())
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, rendered.as_slice());
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        let bytes = writer.finish();
        debug!(
            "emitted {} byte pdf with {} font(s), content stream {} bytes",
            bytes.len(),
            fonts.len(),
            rendered.len()
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PageGeometry;
    use crate::page::TextBlock;
    use crate::{StandardFont, Pt};
    use miniz_oxide::inflate::decompress_to_vec_zlib;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    fn page() -> Page {
        let mut page = Page::new(&PageGeometry::LABEL_6X4);
        page.add_text_block(TextBlock {
            font: StandardFont::HelveticaBold,
            size: Pt(14.0),
            leading: Pt(16.8),
            origin: (Pt(150.0), Pt(152.4)),
            lines: vec!["Jane Doe".to_string()],
        });
        page
    }

    #[test]
    fn emits_a_pdf_with_standard_fonts() {
        let bytes = PdfEmitter::default()
            .with_compression(false)
            .emit(&page())
            .expect("can emit");
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, "/Helvetica-Bold"));
        assert!(contains(&bytes, "/WinAnsiEncoding"));
        assert!(!contains(&bytes, "/FontFile"));
        assert!(contains(&bytes, "<4a616e6520446f65> Tj"));
        assert!(contains(&bytes, "/MediaBox"));
    }

    /// The raw bytes of the first stream object in a document
    fn first_stream(bytes: &[u8]) -> &[u8] {
        let start = bytes
            .windows(b"stream\n".len())
            .position(|w| w == b"stream\n")
            .expect("document has a stream")
            + b"stream\n".len();
        let len = bytes[start..]
            .windows(b"\nendstream".len())
            .position(|w| w == b"\nendstream")
            .expect("stream is terminated");
        &bytes[start..start + len]
    }

    #[test]
    fn compressed_content_inflates_to_the_operators() {
        let bytes = PdfEmitter::default().emit(&page()).expect("can emit");
        assert!(contains(&bytes, "/FlateDecode"));

        let inflated =
            decompress_to_vec_zlib(first_stream(&bytes)).expect("content is valid zlib");
        let inflated = String::from_utf8(inflated).expect("content is ascii");
        assert!(inflated.contains("/F1 14 Tf\n"));
        assert!(inflated.contains("<4a616e6520446f65> Tj\n"));
    }

    #[test]
    fn media_box_is_six_by_four_inches() {
        let bytes = PdfEmitter::default()
            .with_compression(false)
            .emit(&page())
            .expect("can emit");
        assert!(contains(&bytes, "/MediaBox [0 0 432 288]"));
    }

    #[test]
    fn info_is_optional() {
        let bare = PdfEmitter::default().emit(&page()).expect("can emit");
        assert!(!contains(&bare, "/Creator"));

        let mut info = Info::new();
        info.title("Shipping Label");
        let with_info = PdfEmitter::default()
            .with_info(info)
            .emit(&page())
            .expect("can emit");
        assert!(contains(&with_info, "/Creator"));
        assert!(contains(&with_info, "/Title"));
    }

    #[test]
    fn identical_pages_emit_identical_bytes_without_info() {
        let emitter = PdfEmitter::default();
        assert_eq!(
            emitter.emit(&page()).expect("can emit"),
            emitter.emit(&page()).expect("can emit")
        );
    }
}
