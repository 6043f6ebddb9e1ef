use crate::style::TextStyle;
use crate::units::Pt;

/// Measures how wide a run of text is once set in a given style.
///
/// Layout only ever asks for widths, so anything that can answer this
/// deterministically can stand in for real font metrics (tests use a fixed
/// advance per character).
pub trait TextMetrics {
    /// Width of `text` set in `style`, in points
    fn width_of(&self, text: &str, style: &TextStyle) -> Pt;
}

/// Metrics for the built-in standard fonts
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardMetrics;

impl TextMetrics for StandardMetrics {
    fn width_of(&self, text: &str, style: &TextStyle) -> Pt {
        style.font.width_of_text(text, style.size)
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn width_of(&self, text: &str, style: &TextStyle) -> Pt {
        (**self).width_of(text, style)
    }
}
