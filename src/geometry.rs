//! The physical page a label is printed on.
//!
//! Labels are always 6 inches wide and 4 inches tall (a landscape 4x6
//! thermal label). All placement arithmetic is done in points, so the page is
//! 432 by 288 points.

use crate::rect::Rect;
use crate::units::*;

/// The fixed size of a label page. There is exactly one geometry in this
/// version of the crate, [`PageGeometry::LABEL_6X4`]; it cannot be adjusted
/// at call time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    width: Pt,
    height: Pt,
}

impl PageGeometry {
    /// 6 x 4 inches, landscape
    pub const LABEL_6X4: PageGeometry = PageGeometry {
        width: Pt(6.0 * 72.0),
        height: Pt(4.0 * 72.0),
    };

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn height(&self) -> Pt {
        self.height
    }

    /// The centre point of the page
    pub fn center(&self) -> (Pt, Pt) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// The `MediaBox` of the page
    pub fn media_box(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::LABEL_6X4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_six_by_four_inches() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.width(), Pt::from(In(6.0)));
        assert_eq!(geometry.height(), Pt::from(In(4.0)));
        assert_eq!(geometry.center(), (Pt(216.0), Pt(144.0)));
        assert_eq!(geometry.media_box().width(), Pt(432.0));
    }
}
