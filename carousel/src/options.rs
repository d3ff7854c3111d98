use crate::{DecelerationDistance, ItemSize, ScrollDirection, Transformer};

/// Configuration for a [`PagerLayout`](crate::PagerLayout).
///
/// Construct with [`PagerOptions::new`] and refine with the `with_*`
/// builders; every field may also be changed later through the layout's
/// `set_*` methods.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerOptions {
    /// Number of real items in the data source.
    pub count: usize,
    pub scroll_direction: ScrollDirection,
    pub item_size: ItemSize,
    /// Configured gap between neighbouring cells. Effects may replace this
    /// with their own proposal; see
    /// [`Transformer::proposed_interitem_spacing`].
    pub interitem_spacing: f64,
    /// Replicates the item range into virtual sections so scrolling wraps.
    pub is_infinite: bool,
    /// With one item an infinite pager degenerates into identical copies
    /// of the same cell; set this to collapse it back to a single section.
    pub removes_infinite_loop_for_single_item: bool,
    pub deceleration_distance: DecelerationDistance,
    /// Page transition effect, `None` for plain paging.
    pub transformer: Option<Transformer>,
}

impl PagerOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            scroll_direction: ScrollDirection::default(),
            item_size: ItemSize::default(),
            interitem_spacing: 0.0,
            is_infinite: false,
            removes_infinite_loop_for_single_item: false,
            deceleration_distance: DecelerationDistance::default(),
            transformer: None,
        }
    }

    pub fn with_scroll_direction(mut self, scroll_direction: ScrollDirection) -> Self {
        self.scroll_direction = scroll_direction;
        self
    }

    pub fn with_item_size(mut self, item_size: ItemSize) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_interitem_spacing(mut self, interitem_spacing: f64) -> Self {
        self.interitem_spacing = interitem_spacing;
        self
    }

    pub fn with_infinite(mut self, is_infinite: bool) -> Self {
        self.is_infinite = is_infinite;
        self
    }

    pub fn with_removes_infinite_loop_for_single_item(mut self, removes: bool) -> Self {
        self.removes_infinite_loop_for_single_item = removes;
        self
    }

    pub fn with_deceleration_distance(mut self, distance: DecelerationDistance) -> Self {
        self.deceleration_distance = distance;
        self
    }

    pub fn with_transformer(mut self, transformer: Transformer) -> Self {
        self.transformer = Some(transformer);
        self
    }
}
