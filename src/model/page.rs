//! Page geometry types.

use serde::{Deserialize, Serialize};

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// A physical length, stored in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(f32);

impl Unit {
    /// Create a unit from points.
    pub fn from_point(points: f32) -> Self {
        Self(points)
    }

    /// Create a unit from millimeters.
    pub fn from_mm(mm: f32) -> Self {
        Self(mm * POINTS_PER_INCH / MM_PER_INCH)
    }

    /// Create a unit from centimeters.
    pub fn from_cm(cm: f32) -> Self {
        Self::from_mm(cm * 10.0)
    }

    /// Value in points.
    pub fn points(self) -> f32 {
        self.0
    }

    /// Value in millimeters.
    pub fn mm(self) -> f32 {
        self.0 * MM_PER_INCH / POINTS_PER_INCH
    }

    /// Check if the unit is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page size, orientation and the distances framing the content area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width
    pub page_width: Unit,

    /// Page height
    pub page_height: Unit,

    /// Page orientation
    pub orientation: Orientation,

    /// Distance from the top edge to the header
    pub header_distance: Unit,

    /// Distance from the bottom edge to the footer
    pub footer_distance: Unit,

    pub top_margin: Unit,
    pub bottom_margin: Unit,
    pub left_margin: Unit,
    pub right_margin: Unit,
}

impl PageSetup {
    /// A4 portrait (210 x 297 mm) with the document model's default margins.
    pub fn a4() -> Self {
        Self {
            page_width: Unit::from_mm(210.0),
            page_height: Unit::from_mm(297.0),
            orientation: Orientation::Portrait,
            header_distance: Unit::from_cm(1.25),
            footer_distance: Unit::from_cm(1.25),
            top_margin: Unit::from_cm(2.5),
            bottom_margin: Unit::from_cm(2.0),
            left_margin: Unit::from_cm(2.5),
            right_margin: Unit::from_cm(2.5),
        }
    }

    /// Width available to content between the left and right margins.
    pub fn content_width(&self) -> Unit {
        Unit::from_point(
            self.page_width.points() - self.left_margin.points() - self.right_margin.points(),
        )
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}
