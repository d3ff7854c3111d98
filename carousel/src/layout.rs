//! The paging layout engine.
//!
//! [`PagerLayout`] owns the pager's configuration, viewport, and scroll
//! offset, and answers geometry queries: which cells are visible in a
//! rectangle, where a fling should settle, what offset centers a given
//! item. Infinite scrolling works by replicating the item range into many
//! virtual *sections* laid out back to back; the host periodically calls
//! [`PagerLayout::recenter_if_needed`] to teleport the offset back toward
//! the middle section so the runway never runs out.
//!
//! Geometry is computed lazily: mutating setters mark it stale, and
//! [`PagerLayout::prepare`] rebuilds it for a viewport. Queries on a stale
//! layout degrade to harmless defaults instead of panicking.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::{
    CellAttributes, DecelerationDistance, EffectContext, ItemSize, PagerOptions, RenderTransform,
    ScrollDirection, Transformer,
};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Upper bound on `item_count * section_count`.
///
/// Replication is capped well below any integer limit so virtual indices
/// never overflow, while still giving hundreds of thousands of pages of
/// runway between re-centerings.
pub const MAX_VIRTUAL_ITEMS: usize = 1 << 20;

/// Velocity magnitude (pages per tick) above which a pan counts as a fling.
const FLING_VELOCITY: f64 = 0.3;

/// Fling snap bias in page units, applied in the direction of travel.
///
/// Deliberately 0.35, not a half page: a cell only 15% over the
/// centerline still advances on a decisive fling.
const FLING_BIAS: f64 = 0.35;

/// Resolved geometry for one (options, viewport) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_count: usize,
    /// Virtual replicas of the item range; `1` for finite pagers.
    pub section_count: usize,
    pub actual_item_size: Size,
    /// Configured spacing, or the active effect's proposal.
    pub actual_interitem_spacing: f64,
    /// Gap before the first cell that centers it in the viewport.
    pub leading_spacing: f64,
    /// Distance between consecutive cell origins (item extent plus actual
    /// spacing). This is the unit of `position` and of page snapping.
    pub item_spacing: f64,
    pub content_extent: Size,
}

/// Lazily computed geometry: stale after any mutating setter, fresh after
/// [`PagerLayout::prepare`].
#[derive(Clone, Copy, Debug, PartialEq)]
enum GeometryState {
    Stale,
    Fresh(Geometry),
}

/// A headless paging carousel layout.
#[derive(Clone, Debug)]
pub struct PagerLayout {
    options: PagerOptions,
    viewport: Size,
    scroll_offset: Point,
    geometry: GeometryState,
}

impl PagerLayout {
    pub fn new(options: PagerOptions) -> Self {
        Self {
            options,
            viewport: Size::ZERO,
            scroll_offset: Point::ZERO,
            geometry: GeometryState::Stale,
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Whether geometry is fresh for the current configuration.
    pub fn is_prepared(&self) -> bool {
        matches!(self.geometry, GeometryState::Fresh(_))
    }

    /// The current geometry snapshot, `None` while stale.
    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.geometry {
            GeometryState::Fresh(g) => Some(g),
            GeometryState::Stale => None,
        }
    }

    /// Marks geometry stale; the next [`prepare`](Self::prepare) rebuilds it.
    pub fn invalidate(&mut self) {
        self.geometry = GeometryState::Stale;
    }

    /// Rebuilds geometry for `viewport` if anything changed.
    ///
    /// A no-op when geometry is already fresh for the same viewport, so the
    /// scroll offset is left untouched on redundant calls. When geometry is
    /// rebuilt the offset is re-anchored so the previously centered item
    /// stays centered (infinite pagers re-anchor into the middle section).
    pub fn prepare(&mut self, viewport: Size) {
        if let GeometryState::Fresh(_) = self.geometry {
            if viewport == self.viewport {
                return;
            }
        }
        let count = self.options.count;
        let anchor = self.current_index().min(count.saturating_sub(1));

        let direction = self.options.scroll_direction;
        let section_count = if self.options.is_infinite
            && count > 0
            && (count > 1 || !self.options.removes_infinite_loop_for_single_item)
        {
            (MAX_VIRTUAL_ITEMS / count).max(1)
        } else {
            1
        };
        let actual_item_size = self.options.item_size.resolve(viewport);
        let actual_interitem_spacing = match &self.options.transformer {
            Some(t) => t.proposed_interitem_spacing(
                direction,
                self.options.item_size,
                self.options.interitem_spacing,
            ),
            None => self.options.interitem_spacing,
        };
        let item_extent = direction.main(actual_item_size);
        let leading_spacing = (direction.main(viewport) - item_extent) / 2.0;
        let item_spacing = item_extent + actual_interitem_spacing;
        let total = count * section_count;
        let content_extent = if total == 0 {
            Size::ZERO
        } else {
            let main = leading_spacing * 2.0
                + (total - 1) as f64 * actual_interitem_spacing
                + total as f64 * item_extent;
            direction.size(main, direction.cross(viewport))
        };

        self.viewport = viewport;
        self.geometry = GeometryState::Fresh(Geometry {
            item_count: count,
            section_count,
            actual_item_size,
            actual_interitem_spacing,
            leading_spacing,
            item_spacing,
            content_extent,
        });
        cdebug!(
            width = viewport.width,
            height = viewport.height,
            count,
            section_count,
            item_spacing,
            "prepared geometry"
        );
        if count > 0 {
            let section = if section_count > 1 { section_count / 2 } else { 0 };
            self.scroll_offset = self.content_offset(anchor, section);
        }
    }

    /// The item index closest to the viewport centerline.
    ///
    /// `0` for an empty or unprepared layout.
    pub fn current_index(&self) -> usize {
        let GeometryState::Fresh(g) = &self.geometry else {
            return 0;
        };
        if g.item_count == 0 || g.item_spacing <= 0.0 {
            return 0;
        }
        let main = self.options.scroll_direction.main_of(self.scroll_offset);
        let index = (main / g.item_spacing).round().max(0.0) as usize;
        index % g.item_count
    }

    /// Continuous scroll position in item units, wrapped to
    /// `[0, item_count)`. `2.5` means halfway between items 2 and 3.
    pub fn scroll_progress(&self) -> f64 {
        let GeometryState::Fresh(g) = &self.geometry else {
            return 0.0;
        };
        if g.item_count == 0 || g.item_spacing <= 0.0 {
            return 0.0;
        }
        let raw = self.options.scroll_direction.main_of(self.scroll_offset) / g.item_spacing;
        let count = g.item_count as f64;
        raw - (raw / count).floor() * count
    }

    /// Total scrollable extent; `Size::ZERO` when stale or empty.
    pub fn content_extent(&self) -> Size {
        match &self.geometry {
            GeometryState::Fresh(g) => g.content_extent,
            GeometryState::Stale => Size::ZERO,
        }
    }

    /// Moves the scroll offset without re-snapping.
    pub fn set_scroll_offset(&mut self, offset: Point) {
        self.scroll_offset = offset;
    }

    /// The untransformed frame of `item` in virtual `section`.
    ///
    /// # Panics
    ///
    /// Panics if the prepared layout is empty or `item` is out of range.
    pub fn frame_for(&self, item: usize, section: usize) -> Rect {
        let GeometryState::Fresh(g) = &self.geometry else {
            return Rect::ZERO;
        };
        assert!(g.item_count > 0, "frame_for on an empty pager");
        assert!(item < g.item_count, "item index out of range");
        let direction = self.options.scroll_direction;
        let virtual_index = section * g.item_count + item;
        let origin_main = g.leading_spacing + virtual_index as f64 * g.item_spacing;
        let origin_cross =
            (direction.cross(self.viewport) - direction.cross(g.actual_item_size)) / 2.0;
        Rect::from_origin_size(direction.point(origin_main, origin_cross), g.actual_item_size)
    }

    /// The scroll offset that centers `item` in virtual `section`.
    ///
    /// # Panics
    ///
    /// Panics if the prepared layout is empty or `item` is out of range.
    pub fn content_offset(&self, item: usize, section: usize) -> Point {
        let frame = self.frame_for(item, section);
        let GeometryState::Fresh(g) = &self.geometry else {
            return self.scroll_offset;
        };
        let direction = self.options.scroll_direction;
        let main = direction.main_of(frame.origin())
            - (direction.main(self.viewport) / 2.0 - direction.main(g.actual_item_size) / 2.0);
        direction.point(main, 0.0)
    }

    /// The scroll offset that centers `item` via the shortest travel.
    ///
    /// Picks the virtual section whose copy of `item` is nearest the
    /// current offset, so an infinite pager animates forward or backward
    /// over at most half the item range, never across a whole section.
    ///
    /// # Panics
    ///
    /// Panics if the prepared layout is empty or `item` is out of range.
    pub fn offset_for_item(&self, item: usize) -> Point {
        let GeometryState::Fresh(g) = &self.geometry else {
            return self.scroll_offset;
        };
        assert!(g.item_count > 0, "offset_for_item on an empty pager");
        assert!(item < g.item_count, "item index out of range");
        let count = g.item_count as i64;
        let main = self.options.scroll_direction.main_of(self.scroll_offset);
        let current_virtual = if g.item_spacing > 0.0 {
            (main / g.item_spacing).round().max(0.0) as i64
        } else {
            0
        };
        let current_item = current_virtual % count;
        let current_section = current_virtual / count;
        let target = item as i64;
        let section = if (current_item - target).abs() <= count / 2 {
            current_section
        } else if target - current_item >= 0 {
            current_section - 1
        } else {
            current_section + 1
        };
        let section = section.clamp(0, g.section_count as i64 - 1) as usize;
        self.content_offset(item, section)
    }

    /// The offset one page forward of the centermost page, wrapping from
    /// the last item to the first.
    pub fn next_page_offset(&self) -> Point {
        let GeometryState::Fresh(g) = &self.geometry else {
            return self.scroll_offset;
        };
        if g.item_count == 0 || g.item_spacing <= 0.0 {
            return self.scroll_offset;
        }
        let main = self.options.scroll_direction.main_of(self.scroll_offset);
        let centermost = (main / g.item_spacing).round().max(0.0) as usize;
        let count = g.item_count;
        let item = (centermost % count + 1) % count;
        let section = if g.section_count > 1 {
            (centermost / count + (centermost % count + 1) / count).min(g.section_count - 1)
        } else {
            0
        };
        self.content_offset(item, section)
    }

    /// Teleports the offset back toward the middle section when it drifts
    /// within two viewports of either end of the virtual runway.
    ///
    /// Returns the new offset when a jump happened. The centered item is
    /// preserved, so a host that repositions its scroll view by the
    /// returned offset produces no visible change.
    pub fn recenter_if_needed(&mut self) -> Option<Point> {
        if !self.options.is_infinite {
            return None;
        }
        let GeometryState::Fresh(g) = self.geometry else {
            return None;
        };
        if g.item_count == 0 || g.section_count <= 1 || g.item_spacing <= 0.0 {
            return None;
        }
        let direction = self.options.scroll_direction;
        let main = direction.main_of(self.scroll_offset);
        let threshold = 2.0 * direction.main(self.viewport);
        let content_main = direction.main(g.content_extent);
        if main >= threshold && main <= content_main - threshold {
            return None;
        }
        let item = self.current_index();
        let target = self.content_offset(item, g.section_count / 2);
        ctrace!(
            from = main,
            to = direction.main_of(target),
            item,
            "re-centered virtual offset"
        );
        self.scroll_offset = target;
        Some(target)
    }

    /// Where a pan ending at `proposed` with `velocity` (pages per tick,
    /// signed along the scroll axis) should settle.
    ///
    /// `current` is the offset at release time; the page-count deceleration
    /// mode measures overshoot from it rather than from the proposal. The
    /// result is aligned to the page grid and clamped to the scrollable
    /// range. Stale layouts pass `proposed` through unchanged.
    pub fn target_offset(&self, proposed: Point, velocity: f64, current: Point) -> Point {
        let GeometryState::Fresh(g) = &self.geometry else {
            return proposed;
        };
        if g.item_count == 0 || g.item_spacing <= 0.0 {
            return proposed;
        }
        let direction = self.options.scroll_direction;
        let spacing = g.item_spacing;
        let proposed_main = direction.main_of(proposed);
        let main = match self.options.deceleration_distance {
            DecelerationDistance::Automatic => {
                if velocity.abs() >= FLING_VELOCITY {
                    (proposed_main / spacing + FLING_BIAS * velocity.signum()).round() * spacing
                } else {
                    (proposed_main / spacing).round() * spacing
                }
            }
            DecelerationDistance::Pages(pages) => {
                let extra = pages.saturating_sub(1) as f64;
                let current_main = direction.main_of(current);
                if velocity >= FLING_VELOCITY {
                    (current_main / spacing + extra).ceil() * spacing
                } else if velocity <= -FLING_VELOCITY {
                    (current_main / spacing - extra).floor() * spacing
                } else {
                    (proposed_main / spacing).round() * spacing
                }
            }
        };
        let bounded = (direction.main(g.content_extent) - spacing).max(0.0);
        let main = main.max(0.0).min(bounded);
        direction.point(main, direction.cross_of(proposed))
    }

    /// Calls `f` with the attributes of every cell intersecting `rect`.
    ///
    /// `rect` is in content coordinates; the usual query is the viewport
    /// rectangle at the current scroll offset. Cells arrive in virtual
    /// index order. Stale or empty layouts produce nothing.
    pub fn for_each_visible<F>(&self, rect: Rect, mut f: F)
    where
        F: FnMut(CellAttributes),
    {
        let GeometryState::Fresh(g) = &self.geometry else {
            return;
        };
        if g.item_count == 0 || g.item_spacing <= 0.0 {
            return;
        }
        let direction = self.options.scroll_direction;
        // Intersect the query with the content rect on both axes.
        let content_main = direction.main(g.content_extent);
        let rect_min = direction.main_of(rect.origin()).max(0.0);
        let rect_max = (direction.main_of(rect.origin()) + direction.main(rect.size()))
            .min(content_main);
        if rect_max <= rect_min {
            return;
        }
        let content_cross = direction.cross(g.content_extent);
        let rect_cross_min = direction.cross_of(rect.origin()).max(0.0);
        let rect_cross_max = (direction.cross_of(rect.origin()) + direction.cross(rect.size()))
            .min(content_cross);
        if rect_cross_max <= rect_cross_min {
            return;
        }
        let item_extent = direction.main(g.actual_item_size);
        let items_before = ((rect_min - g.leading_spacing) / g.item_spacing)
            .floor()
            .max(0.0) as usize;
        let max_origin = rect_max.min(content_main - item_extent - g.leading_spacing);
        let total = g.item_count * g.section_count;
        let cross_extent = direction.cross(g.actual_item_size);
        let cross_origin = (direction.cross(self.viewport) - cross_extent) / 2.0;
        let ruler = direction.main_of(self.scroll_offset) + direction.main(self.viewport) / 2.0;
        let ctx = EffectContext {
            direction,
            item_extent,
            cross_extent,
            item_spacing: g.item_spacing,
        };
        let mut virtual_index = items_before;
        let mut origin = g.leading_spacing + items_before as f64 * g.item_spacing;
        // Tolerant comparison so a cell whose origin lands on the boundary
        // within float error is still emitted.
        while virtual_index < total
            && origin - max_origin
                <= (100.0 * f64::EPSILON * (origin + max_origin).abs()).max(f64::MIN_POSITIVE)
        {
            let center = direction.point(origin + item_extent / 2.0, cross_origin + cross_extent / 2.0);
            let position = (direction.main_of(center) - ruler) / g.item_spacing;
            let mut attributes = CellAttributes {
                section: virtual_index / g.item_count,
                item: virtual_index % g.item_count,
                center,
                size: g.actual_item_size,
                position,
                transform: RenderTransform::Identity,
                alpha: 1.0,
                z_index: g.item_count as i32 - position as i32,
            };
            if let Some(transformer) = &self.options.transformer {
                let state = transformer.apply(position, &ctx);
                attributes.transform = state.transform;
                attributes.alpha = state.alpha.clamp(0.0, 1.0);
                if let Some(z) = state.z_index {
                    attributes.z_index = z;
                }
                attributes.center += state.center_offset;
            }
            f(attributes);
            virtual_index += 1;
            origin += g.item_spacing;
        }
    }

    /// Collects [`for_each_visible`](Self::for_each_visible) into a `Vec`.
    pub fn visible_attributes(&self, rect: Rect) -> Vec<CellAttributes> {
        let mut out = Vec::new();
        self.for_each_visible(rect, |attributes| out.push(attributes));
        out
    }

    /// The viewport rectangle at the current scroll offset, for passing to
    /// [`visible_attributes`](Self::visible_attributes).
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll_offset, self.viewport)
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count != count {
            self.options.count = count;
            self.invalidate();
        }
    }

    pub fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        if self.options.scroll_direction != direction {
            self.options.scroll_direction = direction;
            self.invalidate();
        }
    }

    pub fn set_item_size(&mut self, item_size: ItemSize) {
        if self.options.item_size != item_size {
            self.options.item_size = item_size;
            self.invalidate();
        }
    }

    pub fn set_interitem_spacing(&mut self, spacing: f64) {
        if self.options.interitem_spacing != spacing {
            self.options.interitem_spacing = spacing;
            self.invalidate();
        }
    }

    pub fn set_is_infinite(&mut self, is_infinite: bool) {
        if self.options.is_infinite != is_infinite {
            self.options.is_infinite = is_infinite;
            self.invalidate();
        }
    }

    pub fn set_removes_infinite_loop_for_single_item(&mut self, removes: bool) {
        if self.options.removes_infinite_loop_for_single_item != removes {
            self.options.removes_infinite_loop_for_single_item = removes;
            self.invalidate();
        }
    }

    pub fn set_transformer(&mut self, transformer: Option<Transformer>) {
        if self.options.transformer != transformer {
            self.options.transformer = transformer;
            self.invalidate();
        }
    }

    /// No geometry impact; takes effect on the next fling.
    pub fn set_deceleration_distance(&mut self, distance: DecelerationDistance) {
        self.options.deceleration_distance = distance;
    }
}
