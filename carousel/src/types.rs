use kurbo::{Point, Rect, Size};

use crate::RenderTransform;

/// The axis a pager scrolls along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl ScrollDirection {
    /// Extent of `size` along the scroll axis.
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across the scroll axis.
    pub fn cross(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Coordinate of `point` along the scroll axis.
    pub fn main_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Coordinate of `point` across the scroll axis.
    pub fn cross_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.y,
            Self::Vertical => point.x,
        }
    }

    /// Builds a point from main/cross axis coordinates.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Builds a size from main/cross axis extents.
    pub fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }
}

/// Page cell sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSize {
    /// Fill the viewport.
    #[default]
    Automatic,
    /// An explicit size.
    Fixed(Size),
}

impl ItemSize {
    pub(crate) fn resolve(self, viewport: Size) -> Size {
        match self {
            Self::Automatic => viewport,
            Self::Fixed(size) => size,
        }
    }

    /// The configured width, `0` when automatic.
    ///
    /// Spacing proposals are computed from the configured size, not the
    /// resolved one, so automatic sizing contributes zero here.
    pub(crate) fn configured_width(self) -> f64 {
        match self {
            Self::Automatic => 0.0,
            Self::Fixed(size) => size.width,
        }
    }
}

/// How far a fling is allowed to travel before settling on a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecelerationDistance {
    /// Velocity-biased nearest-grid snapping.
    #[default]
    Automatic,
    /// A strong fling overshoots `n - 1` extra pages past the next one.
    Pages(u32),
}

/// Render attributes for one visible cell.
///
/// Created fresh for every visible-attributes query and discarded after
/// rendering; identity is the `(section, item)` pair, where `item` is the
/// real data-source index and `section` the virtual replica.
#[derive(Clone, Debug, PartialEq)]
pub struct CellAttributes {
    pub section: usize,
    pub item: usize,
    pub center: Point,
    pub size: Size,
    /// Signed distance from the viewport centerline in units of one
    /// item spacing. `0` is perfectly centered, `±1` one full page away.
    pub position: f64,
    pub transform: RenderTransform,
    pub alpha: f64,
    pub z_index: i32,
}

impl CellAttributes {
    /// The untransformed frame of the cell.
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}
