use serde::{Deserialize, Serialize};

/// A location in map-image pixel space. X grows east (columns), Y grows
/// south (rows), matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by two opposite corners in image-pixel
/// space. The corners may be supplied in either order; all queries
/// normalize min/max per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub a: Point,
    pub b: Point,
}

impl Rect {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Build a rectangle from two (row, col) corner pairs, the layout the
    /// calibration log produces.
    pub fn from_row_col(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            a: Point::new(a.1, a.0),
            b: Point::new(b.1, b.0),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.a.x.min(self.b.x)
    }

    pub fn max_x(&self) -> f64 {
        self.a.x.max(self.b.x)
    }

    pub fn min_y(&self) -> f64 {
        self.a.y.min(self.b.y)
    }

    pub fn max_y(&self) -> f64 {
        self.a.y.max(self.b.y)
    }

    /// Closed-interval containment on both axes: boundary points count as
    /// inside. No tolerance is applied.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}

/// Display styling for a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Neutral,
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub severity: Severity,
}

impl HistoryEntry {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// One catalog record. `bounds` is `None` until the building has been
/// calibrated; an uncalibrated building can be prompted but not scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub name: String,
    pub code: String,
    pub grid_label: String,
    pub bounds: Option<Rect>,
}
