//! The transform pipeline: pure per-effect functions from a cell's
//! `position` to a render transform, opacity, and stacking order.
//!
//! Every effect is a closed-form piecewise function of `position` (the
//! signed distance from the viewport centerline in item-spacing units).
//! Effects never see the pager itself: everything they need arrives in an
//! [`EffectContext`], and they return a [`RenderState`] for the layout to
//! fold into the cell attributes.

use core::f64::consts::PI;

use kurbo::{Affine, Vec2};

use crate::{ItemSize, ScrollDirection, Transform3d};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Perspective element shared by the 3-D effects (Core Animation's `m34`).
const PERSPECTIVE: f64 = -0.002;

/// Slots in the ferris-wheel model; cells ride a 14-seat wheel.
const FERRIS_WHEEL_COUNT: f64 = 14.0;

/// The available page transition styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    CrossFade,
    ZoomOut,
    Depth,
    Overlap,
    Linear,
    CoverFlow,
    FerrisWheel,
    InvertedFerrisWheel,
    Cubic,
}

/// A cell's render transform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderTransform {
    Identity,
    /// A 2-D affine transform.
    Affine(Affine),
    /// A 4×4 transform with perspective.
    Transform3d(Transform3d),
}

impl RenderTransform {
    pub fn is_identity(&self) -> bool {
        match self {
            Self::Identity => true,
            Self::Affine(a) => *a == Affine::IDENTITY,
            Self::Transform3d(t) => *t == Transform3d::IDENTITY,
        }
    }
}

/// What an effect produces for one cell.
///
/// `alpha` always carries a value; `z_index` is `None` when the effect
/// leaves the layout's default stacking order in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub transform: RenderTransform,
    pub alpha: f64,
    pub z_index: Option<i32>,
    /// Shift applied to the cell's center before the transform (the cubic
    /// effect moves its rotation hinge this way).
    pub center_offset: Vec2,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            transform: RenderTransform::Identity,
            alpha: 1.0,
            z_index: None,
            center_offset: Vec2::ZERO,
        }
    }
}

/// Geometry an effect needs; passed explicitly instead of a pager
/// back-reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectContext {
    pub direction: ScrollDirection,
    /// Resolved cell extent along the scroll axis.
    pub item_extent: f64,
    /// Resolved cell extent across the scroll axis.
    pub cross_extent: f64,
    /// One page's extent plus the (possibly negative) interitem spacing.
    pub item_spacing: f64,
}

/// An immutable effect selection plus its two tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformer {
    kind: EffectKind,
    pub minimum_scale: f64,
    pub minimum_alpha: f64,
}

impl Transformer {
    /// Creates a transformer with kind-dependent tunable defaults.
    pub fn new(kind: EffectKind) -> Self {
        let minimum_scale = match kind {
            EffectKind::ZoomOut => 0.85,
            EffectKind::Depth => 0.5,
            _ => 0.65,
        };
        Self {
            kind,
            minimum_scale,
            minimum_alpha: 0.6,
        }
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn with_minimum_scale(mut self, minimum_scale: f64) -> Self {
        self.minimum_scale = minimum_scale;
        self
    }

    pub fn with_minimum_alpha(mut self, minimum_alpha: f64) -> Self {
        self.minimum_alpha = minimum_alpha;
        self
    }

    /// The interitem spacing this effect wants the layout to use.
    ///
    /// Overlapping effects propose negative spacing so neighbouring pages
    /// stack; non-overlapping effects pass the configured spacing through
    /// (cubic pins it to zero). Proposals are computed from the *configured*
    /// item size, so automatic sizing contributes a zero width.
    pub fn proposed_interitem_spacing(
        &self,
        direction: ScrollDirection,
        item_size: ItemSize,
        configured_spacing: f64,
    ) -> f64 {
        let horizontal = direction == ScrollDirection::Horizontal;
        let width = item_size.configured_width();
        match self.kind {
            EffectKind::Overlap if horizontal => width * -self.minimum_scale * 0.6,
            EffectKind::Linear if horizontal => width * -self.minimum_scale * 0.2,
            EffectKind::CoverFlow if horizontal => -width * (PI * 0.25 * 0.25 * 3.0).sin(),
            EffectKind::FerrisWheel | EffectKind::InvertedFerrisWheel if horizontal => {
                -width * 0.15
            }
            EffectKind::Overlap
            | EffectKind::Linear
            | EffectKind::CoverFlow
            | EffectKind::FerrisWheel
            | EffectKind::InvertedFerrisWheel
            | EffectKind::Cubic => 0.0,
            EffectKind::CrossFade | EffectKind::ZoomOut | EffectKind::Depth => configured_spacing,
        }
    }

    /// Evaluates the effect at `position`.
    ///
    /// Pure: the same `(position, ctx)` always yields the same state.
    /// Effects that only support horizontal scrolling return the default
    /// state (identity, alpha 1) for vertical pagers instead of failing.
    pub fn apply(&self, position: f64, ctx: &EffectContext) -> RenderState {
        match self.kind {
            EffectKind::CrossFade => self.cross_fade(position, ctx),
            EffectKind::ZoomOut => self.zoom_out(position, ctx),
            EffectKind::Depth => self.depth(position, ctx),
            EffectKind::Overlap | EffectKind::Linear => self.overlap(position, ctx),
            EffectKind::CoverFlow => self.cover_flow(position, ctx),
            EffectKind::FerrisWheel | EffectKind::InvertedFerrisWheel => {
                self.ferris_wheel(position, ctx)
            }
            EffectKind::Cubic => self.cubic(position, ctx),
        }
    }

    /// Slides the cell back under the centerline and fades it linearly.
    fn cross_fade(&self, position: f64, ctx: &EffectContext) -> RenderState {
        let t = -ctx.item_spacing * position;
        let (tx, ty) = match ctx.direction {
            ScrollDirection::Horizontal => (t, 0.0),
            ScrollDirection::Vertical => (0.0, t),
        };
        let (alpha, z_index) = if position.abs() < 1.0 {
            (1.0 - position.abs(), 1)
        } else {
            (0.0, i32::MIN)
        };
        RenderState {
            transform: RenderTransform::Affine(Affine::translate(Vec2::new(tx, ty))),
            alpha,
            z_index: Some(z_index),
            center_offset: Vec2::ZERO,
        }
    }

    fn zoom_out(&self, position: f64, ctx: &EffectContext) -> RenderState {
        if !(-1.0..=1.0).contains(&position) {
            return RenderState {
                alpha: 0.0,
                ..RenderState::default()
            };
        }
        let scale = self.minimum_scale.max(1.0 - position.abs());
        // The shrunk cell drifts toward the centerline; the cross-axis
        // margin pulls it back so edges stay aligned.
        let main_margin = ctx.item_spacing * (1.0 - scale) / 2.0;
        let cross_margin = ctx.cross_extent * (1.0 - scale) / 2.0;
        let t = if position < 0.0 {
            main_margin - cross_margin * 2.0
        } else {
            -main_margin + cross_margin * 2.0
        };
        let (tx, ty) = match ctx.direction {
            ScrollDirection::Horizontal => (t, 0.0),
            ScrollDirection::Vertical => (0.0, t),
        };
        let alpha = self.minimum_alpha
            + (scale - self.minimum_scale) / (1.0 - self.minimum_scale) * (1.0 - self.minimum_alpha);
        RenderState {
            transform: RenderTransform::Affine(Affine::new([scale, 0.0, 0.0, scale, tx, ty])),
            alpha,
            z_index: None,
            center_offset: Vec2::ZERO,
        }
    }

    /// Asymmetric by design: the trailing neighbour slides under the
    /// centered page unscaled, the leading one shrinks and fades.
    fn depth(&self, position: f64, ctx: &EffectContext) -> RenderState {
        if position < -1.0 {
            RenderState {
                alpha: 0.0,
                z_index: Some(0),
                ..RenderState::default()
            }
        } else if position <= 0.0 {
            RenderState {
                transform: RenderTransform::Affine(Affine::IDENTITY),
                alpha: 1.0,
                z_index: Some(1),
                center_offset: Vec2::ZERO,
            }
        } else if position < 1.0 {
            // Counteract the natural slide so the page appears pinned while
            // it shrinks away.
            let t = ctx.item_spacing * -position;
            let (tx, ty) = match ctx.direction {
                ScrollDirection::Horizontal => (t, 0.0),
                ScrollDirection::Vertical => (0.0, t),
            };
            let scale =
                self.minimum_scale + (1.0 - self.minimum_scale) * (1.0 - position.abs());
            RenderState {
                transform: RenderTransform::Affine(Affine::new([scale, 0.0, 0.0, scale, tx, ty])),
                alpha: 1.0 - position,
                z_index: Some(0),
                center_offset: Vec2::ZERO,
            }
        } else {
            // Covers `position >= 1` and NaN alike.
            RenderState {
                alpha: 0.0,
                z_index: Some(0),
                ..RenderState::default()
            }
        }
    }

    /// Shared by overlap and linear; only the proposed spacing differs.
    fn overlap(&self, position: f64, ctx: &EffectContext) -> RenderState {
        if ctx.direction != ScrollDirection::Horizontal {
            return RenderState::default();
        }
        let scale = (1.0 - (1.0 - self.minimum_scale) * position.abs()).max(self.minimum_scale);
        let alpha = self.minimum_alpha + (1.0 - position.abs()) * (1.0 - self.minimum_alpha);
        let z_index = ((1.0 - position.abs()) * 10.0) as i32;
        RenderState {
            transform: RenderTransform::Affine(Affine::scale(scale)),
            alpha,
            z_index: Some(z_index),
            center_offset: Vec2::ZERO,
        }
    }

    fn cover_flow(&self, position: f64, ctx: &EffectContext) -> RenderState {
        if ctx.direction != ScrollDirection::Horizontal {
            return RenderState::default();
        }
        let position = (-position).max(-1.0).min(1.0);
        let rotation = (position * PI * 0.5).sin() * PI * 0.25 * 1.5;
        let translation_z = -ctx.item_spacing * 0.5 * position.abs();
        let transform = Transform3d::perspective(PERSPECTIVE)
            * Transform3d::from_rotation_y(rotation)
            * Transform3d::from_translation(0.0, 0.0, translation_z);
        RenderState {
            transform: RenderTransform::Transform3d(transform),
            alpha: 1.0,
            z_index: Some(100 - position.abs() as i32),
            center_offset: Vec2::ZERO,
        }
    }

    /// Rides cells along a 14-seat wheel centered one radius above (or
    /// below, for the inverted variant) the viewport centerline.
    fn ferris_wheel(&self, position: f64, ctx: &EffectContext) -> RenderState {
        if ctx.direction != ScrollDirection::Horizontal {
            return RenderState::default();
        }
        let alpha = if position.abs() < 0.5 {
            1.0
        } else {
            self.minimum_alpha
        };
        if !(-5.0..=5.0).contains(&position) {
            return RenderState {
                alpha,
                z_index: Some(0),
                ..RenderState::default()
            };
        }
        let circle = PI * 2.0;
        let radius = ctx.item_spacing * FERRIS_WHEEL_COUNT / circle;
        let flip = if self.kind == EffectKind::FerrisWheel {
            1.0
        } else {
            -1.0
        };
        let ty = radius * flip;
        let rotation = position * (circle / FERRIS_WHEEL_COUNT) * flip;
        let transform = Affine::translate(Vec2::new(-position * ctx.item_spacing, ty))
            * Affine::rotate(rotation)
            * Affine::translate(Vec2::new(0.0, -ty));
        RenderState {
            transform: RenderTransform::Affine(transform),
            alpha,
            z_index: Some((4.0 - position.abs() * 10.0) as i32),
            center_offset: Vec2::ZERO,
        }
    }

    /// 3-D page turn: shift the hinge to the trailing edge, rotate a
    /// quarter turn across the page width, shift back.
    fn cubic(&self, position: f64, ctx: &EffectContext) -> RenderState {
        // The lower boundary is inclusive and the upper exclusive on
        // purpose: a cell at exactly -1 is hidden while one just below +1
        // is still visible.
        if position <= -1.0 {
            RenderState {
                alpha: 0.0,
                ..RenderState::default()
            }
        } else if position < 1.0 {
            let direction = if position < 0.0 { 1.0 } else { -1.0 };
            let radius = ctx.item_extent;
            let (rotation, center_offset, back) = match ctx.direction {
                ScrollDirection::Horizontal => (
                    Transform3d::from_rotation_y(position * PI * 0.5),
                    Vec2::new(direction * radius * 0.5, 0.0),
                    Transform3d::from_translation(-direction * radius * 0.5, 0.0, 0.0),
                ),
                ScrollDirection::Vertical => (
                    Transform3d::from_rotation_x(position * PI * 0.5 * -1.0),
                    Vec2::new(0.0, direction * radius * 0.5),
                    Transform3d::from_translation(0.0, -direction * radius * 0.5, 0.0),
                ),
            };
            let transform = Transform3d::perspective(PERSPECTIVE) * rotation * back;
            RenderState {
                transform: RenderTransform::Transform3d(transform),
                alpha: 1.0,
                z_index: Some(((1.0 - position) * 10.0) as i32),
                center_offset,
            }
        } else if position >= 1.0 {
            RenderState {
                alpha: 0.0,
                ..RenderState::default()
            }
        } else {
            RenderState {
                alpha: 0.0,
                z_index: Some(0),
                ..RenderState::default()
            }
        }
    }
}
