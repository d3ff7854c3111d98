use carousel::{PagerLayout, PagerOptions};
use kurbo::{Point, Size};

use crate::{Easing, Tween};

/// Default duration for snap and auto-advance animations.
pub const DEFAULT_SLIDE_DURATION_MS: u64 = 300;

/// A framework-neutral controller that wraps a [`carousel::PagerLayout`]
/// and provides the common adapter workflows: drag lifecycle, fling
/// snapping, tween-driven scrolling, and timed auto-advance.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `prepare` / `on_scroll` when UI events occur
/// - `begin_dragging` / `end_dragging` around user pans
/// - `tick(now_ms)` each frame/timer tick
///
/// The offset returned from `tick()` is what the host should apply to its
/// real scroll position; the layout state is kept in sync internally.
#[derive(Clone, Debug)]
pub struct Controller {
    layout: PagerLayout,
    tween: Option<Tween>,
    /// Milliseconds between automatic page flips, `None` when disabled.
    auto_interval_ms: Option<u64>,
    /// Absolute time of the next scheduled flip.
    next_flip_ms: Option<u64>,
    dragging: bool,
}

impl Controller {
    pub fn new(options: PagerOptions) -> Self {
        Self::from_layout(PagerLayout::new(options))
    }

    pub fn from_layout(layout: PagerLayout) -> Self {
        Self {
            layout,
            tween: None,
            auto_interval_ms: None,
            next_flip_ms: None,
            dragging: false,
        }
    }

    pub fn layout(&self) -> &PagerLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut PagerLayout {
        &mut self.layout
    }

    pub fn into_layout(self) -> PagerLayout {
        self.layout
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn prepare(&mut self, viewport: Size) {
        self.layout.prepare(viewport);
    }

    /// Enables timed auto-advance, or disables it with `None`.
    ///
    /// The first flip fires one interval after this call; flips pause
    /// while the user is dragging and resume on release.
    pub fn set_automatic_sliding_interval_ms(&mut self, interval_ms: Option<u64>, now_ms: u64) {
        self.auto_interval_ms = interval_ms;
        self.next_flip_ms = interval_ms.map(|i| now_ms + i);
    }

    /// Call when the UI reports a scroll offset change from a user pan.
    pub fn on_scroll(&mut self, offset: Point) {
        self.layout.set_scroll_offset(offset);
    }

    /// Starts a user pan: cancels any animation and pauses auto-advance.
    pub fn begin_dragging(&mut self) {
        self.cancel_animation();
        self.dragging = true;
        self.next_flip_ms = None;
    }

    /// Ends a user pan and snaps to the page grid.
    ///
    /// `proposed` is where the host's deceleration would land and
    /// `velocity` the release velocity in pages per tick along the scroll
    /// axis. Returns the resolved target offset, which the snap tween then
    /// animates to. Auto-advance resumes one interval from `now_ms`.
    pub fn end_dragging(&mut self, proposed: Point, velocity: f64, now_ms: u64) -> Point {
        self.dragging = false;
        let current = self.layout.scroll_offset();
        let target = self.layout.target_offset(proposed, velocity, current);
        self.tween = Some(Tween::new(
            current,
            target,
            now_ms,
            DEFAULT_SLIDE_DURATION_MS,
            Easing::EaseInOutCubic,
        ));
        self.next_flip_ms = self.auto_interval_ms.map(|i| now_ms + i);
        target
    }

    /// Advances the controller.
    ///
    /// Samples the active tween into the layout and returns the new offset;
    /// when the tween finishes the infinite runway is re-centered. With no
    /// tween active, fires a due auto-advance flip. Returns `None` when
    /// nothing moved.
    pub fn tick(&mut self, now_ms: u64) -> Option<Point> {
        if let Some(tween) = self.tween {
            self.layout.set_scroll_offset(tween.sample(now_ms));
            if tween.is_done(now_ms) {
                self.tween = None;
                self.layout.recenter_if_needed();
            }
            return Some(self.layout.scroll_offset());
        }
        if self.dragging {
            return None;
        }
        let (Some(interval), Some(due)) = (self.auto_interval_ms, self.next_flip_ms) else {
            return None;
        };
        if now_ms < due {
            return None;
        }
        let from = self.layout.scroll_offset();
        let to = self.layout.next_page_offset();
        self.tween = Some(Tween::new(
            from,
            to,
            now_ms,
            DEFAULT_SLIDE_DURATION_MS,
            Easing::EaseInOutCubic,
        ));
        self.next_flip_ms = Some(now_ms + interval);
        Some(from)
    }

    /// Scrolls so `item` is centered, travelling the shortest way around.
    ///
    /// Returns the target offset. Animated scrolls run through `tick`;
    /// immediate ones apply at once and re-center the runway.
    pub fn scroll_to_item(&mut self, item: usize, animated: bool, now_ms: u64) -> Point {
        let to = self.layout.offset_for_item(item);
        if animated {
            let from = self.layout.scroll_offset();
            self.tween = Some(Tween::new(
                from,
                to,
                now_ms,
                DEFAULT_SLIDE_DURATION_MS,
                Easing::EaseInOutCubic,
            ));
        } else {
            self.cancel_animation();
            self.layout.set_scroll_offset(to);
            self.layout.recenter_if_needed();
        }
        to
    }
}
