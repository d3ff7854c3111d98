use crate::*;

use kurbo::{Affine, Point, Rect, Size, Vec2};

fn assert_close(a: f64, b: f64) {
    assert!(
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs())),
        "expected {a} ~= {b}"
    );
}

fn affine_of(state: &RenderState) -> Affine {
    match state.transform {
        RenderTransform::Affine(a) => a,
        ref other => panic!("expected affine transform, got {other:?}"),
    }
}

fn transform3d_of(state: &RenderState) -> Transform3d {
    match state.transform {
        RenderTransform::Transform3d(t) => t,
        ref other => panic!("expected 3d transform, got {other:?}"),
    }
}

/// count 6, fixed 100x100 cells, zero spacing, 300x100 viewport, infinite.
fn infinite_pager() -> PagerLayout {
    let options = PagerOptions::new(6)
        .with_item_size(ItemSize::Fixed(Size::new(100.0, 100.0)))
        .with_infinite(true);
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(300.0, 100.0));
    layout
}

fn finite_pager(count: usize) -> PagerLayout {
    let options =
        PagerOptions::new(count).with_item_size(ItemSize::Fixed(Size::new(100.0, 100.0)));
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(300.0, 100.0));
    layout
}

fn effect_ctx() -> EffectContext {
    EffectContext {
        direction: ScrollDirection::Horizontal,
        item_extent: 200.0,
        cross_extent: 200.0,
        item_spacing: 240.0,
    }
}

#[test]
fn prepare_anchors_middle_section_and_sizes_content() {
    let layout = infinite_pager();
    let sections = MAX_VIRTUAL_ITEMS / 6;
    let total = (sections * 6) as f64;
    assert_close(layout.content_extent().width, 200.0 + total * 100.0);
    assert_close(layout.content_extent().height, 100.0);
    assert_eq!(layout.current_index(), 0);
    // Anchored to item 0 of the middle section.
    let expected = (sections / 2 * 6) as f64 * 100.0;
    assert_close(layout.scroll_offset().x, expected);
}

#[test]
fn prepare_is_a_no_op_for_same_viewport() {
    let mut layout = infinite_pager();
    let moved = layout.offset_for_item(1);
    layout.set_scroll_offset(moved);
    layout.prepare(Size::new(300.0, 100.0));
    assert_eq!(layout.scroll_offset(), moved);
}

#[test]
fn prepare_preserves_current_index_across_viewport_change() {
    let mut layout = infinite_pager();
    layout.set_scroll_offset(layout.offset_for_item(2));
    assert_eq!(layout.current_index(), 2);
    layout.prepare(Size::new(400.0, 100.0));
    assert_eq!(layout.current_index(), 2);
}

#[test]
fn visible_items_wrap_across_section_boundary() {
    let layout = infinite_pager();
    let cells = layout.visible_attributes(layout.visible_rect());
    assert!(cells.len() >= 3);
    // The anchored item 0 has a wrapped predecessor, item 5 of the
    // previous section.
    assert_eq!(cells[0].item, 5);
    assert_eq!(cells[1].item, 0);
    assert_eq!(cells[2].item, 1);
    for window in cells.windows(2) {
        assert_eq!(window[1].section * 6 + window[1].item, window[0].section * 6 + window[0].item + 1);
    }
}

#[test]
fn positions_are_centerline_distances_in_page_units() {
    let layout = infinite_pager();
    let cells = layout.visible_attributes(layout.visible_rect());
    assert_close(cells[0].position, -1.0);
    assert_close(cells[1].position, 0.0);
    assert_close(cells[2].position, 1.0);
    for window in cells.windows(2) {
        assert_close(window[1].position - window[0].position, 1.0);
    }
}

#[test]
fn visible_cells_are_centered_on_the_cross_axis() {
    let options = PagerOptions::new(3).with_item_size(ItemSize::Fixed(Size::new(100.0, 80.0)));
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(300.0, 200.0));
    let cells = layout.visible_attributes(layout.visible_rect());
    assert!(!cells.is_empty());
    for cell in &cells {
        assert_close(cell.center.y, 100.0);
        assert_close(cell.frame().height(), 80.0);
    }
}

#[test]
fn empty_pager_degrades_quietly() {
    let mut layout = PagerLayout::new(PagerOptions::new(0));
    layout.prepare(Size::new(300.0, 100.0));
    assert_eq!(layout.content_extent(), Size::ZERO);
    assert!(layout.visible_attributes(layout.visible_rect()).is_empty());
    assert_eq!(layout.current_index(), 0);
    let proposed = Point::new(123.0, 0.0);
    assert_eq!(layout.target_offset(proposed, 1.0, Point::ZERO), proposed);
}

#[test]
#[should_panic(expected = "empty pager")]
fn frame_for_panics_on_empty_pager() {
    let mut layout = PagerLayout::new(PagerOptions::new(0));
    layout.prepare(Size::new(300.0, 100.0));
    let _ = layout.frame_for(0, 0);
}

#[test]
fn single_item_opts_out_of_replication() {
    let options = PagerOptions::new(1)
        .with_item_size(ItemSize::Fixed(Size::new(100.0, 100.0)))
        .with_infinite(true)
        .with_removes_infinite_loop_for_single_item(true);
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(300.0, 100.0));
    assert_close(layout.content_extent().width, 300.0);
    let cells = layout.visible_attributes(layout.visible_rect());
    assert_eq!(cells.len(), 1);

    let mut looping = PagerLayout::new(
        PagerOptions::new(1)
            .with_item_size(ItemSize::Fixed(Size::new(100.0, 100.0)))
            .with_infinite(true),
    );
    looping.prepare(Size::new(300.0, 100.0));
    assert!(looping.content_extent().width > 300.0);
}

#[test]
fn vertical_layout_swaps_axes() {
    let options = PagerOptions::new(3)
        .with_item_size(ItemSize::Fixed(Size::new(100.0, 100.0)))
        .with_scroll_direction(ScrollDirection::Vertical);
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(100.0, 300.0));
    assert_close(layout.content_extent().height, 200.0 + 300.0);
    assert_close(layout.content_extent().width, 100.0);
    let frame = layout.frame_for(0, 0);
    assert_close(frame.origin().y, 100.0);
    assert_close(frame.origin().x, 0.0);
    assert_close(layout.offset_for_item(1).y, 100.0);
    assert_close(layout.offset_for_item(1).x, 0.0);
}

#[test]
fn automatic_item_size_fills_viewport() {
    let mut layout = PagerLayout::new(PagerOptions::new(4));
    layout.prepare(Size::new(320.0, 240.0));
    let frame = layout.frame_for(0, 0);
    assert_close(frame.width(), 320.0);
    assert_close(frame.height(), 240.0);
    assert_close(frame.origin().x, 0.0);
}

#[test]
fn scroll_progress_wraps_to_item_range() {
    let mut layout = infinite_pager();
    let base = layout.scroll_offset();
    layout.set_scroll_offset(Point::new(base.x + 50.0, 0.0));
    assert_close(layout.scroll_progress(), 0.5);
    layout.set_scroll_offset(Point::new(base.x + 550.0, 0.0));
    assert_close(layout.scroll_progress(), 5.5);
    layout.set_scroll_offset(Point::new(base.x + 650.0, 0.0));
    assert_close(layout.scroll_progress(), 0.5);
}

#[test]
fn offset_for_item_travels_the_short_way_around() {
    let layout = infinite_pager();
    let here = layout.scroll_offset().x;
    // Item 5 is one page back through the wrap, not five forward.
    assert_close(layout.offset_for_item(5).x, here - 100.0);
    assert_close(layout.offset_for_item(1).x, here + 100.0);
    assert_close(layout.offset_for_item(3).x, here + 300.0);
}

#[test]
fn next_page_offset_advances_and_wraps() {
    let mut layout = infinite_pager();
    let here = layout.scroll_offset().x;
    assert_close(layout.next_page_offset().x, here + 100.0);
    layout.set_scroll_offset(layout.offset_for_item(5));
    // Wrapping from the last item keeps moving forward into the next
    // section instead of jumping back.
    assert_close(layout.next_page_offset().x, layout.scroll_offset().x + 100.0);
}

#[test]
fn recenter_teleports_near_runway_edges() {
    let mut layout = infinite_pager();
    assert_eq!(layout.recenter_if_needed(), None);
    layout.set_scroll_offset(layout.content_offset(2, 0));
    let jumped = layout.recenter_if_needed().expect("offset near edge");
    assert_eq!(layout.current_index(), 2);
    assert_eq!(layout.scroll_offset(), jumped);
    // Back in the middle, another call is a no-op.
    assert_eq!(layout.recenter_if_needed(), None);
}

#[test]
fn recenter_ignores_finite_pagers() {
    let mut layout = finite_pager(6);
    layout.set_scroll_offset(Point::ZERO);
    assert_eq!(layout.recenter_if_needed(), None);
}

#[test]
fn target_offset_rounds_to_grid_without_velocity() {
    let layout = infinite_pager();
    let base = layout.scroll_offset();
    let proposed = Point::new(base.x + 20.0, 0.0);
    let target = layout.target_offset(proposed, 0.0, base);
    assert_close(target.x, base.x);
    let proposed = Point::new(base.x + 70.0, 0.0);
    let target = layout.target_offset(proposed, 0.0, base);
    assert_close(target.x, base.x + 100.0);
}

#[test]
fn target_offset_is_idempotent() {
    let layout = infinite_pager();
    let base = layout.scroll_offset();
    for velocity in [0.0, 0.2, 0.5, -0.5, 2.0] {
        let proposed = Point::new(base.x + 37.0, 0.0);
        let settled = layout.target_offset(proposed, velocity, base);
        assert_eq!(layout.target_offset(settled, 0.0, settled), settled);
    }
}

#[test]
fn fling_bias_advances_a_barely_started_page() {
    let layout = infinite_pager();
    let base = layout.scroll_offset();
    // 20% over the line with a forward fling advances; the same proposal
    // with a backward fling snaps back.
    let proposed = Point::new(base.x + 20.0, 0.0);
    assert_close(layout.target_offset(proposed, 0.5, base).x, base.x + 100.0);
    assert_close(layout.target_offset(proposed, -0.5, base).x, base.x);
    // Below the velocity threshold the bias does not apply.
    assert_close(layout.target_offset(proposed, 0.2, base).x, base.x);
}

#[test]
fn page_count_deceleration_measures_from_release_offset() {
    let mut layout = infinite_pager();
    layout.set_deceleration_distance(DecelerationDistance::Pages(3));
    let base = layout.scroll_offset();
    let proposed = Point::new(base.x + 450.0, 0.0);
    // Ceil of the fractional release page plus two extra pages.
    let release = Point::new(base.x + 10.0, 0.0);
    assert_close(layout.target_offset(proposed, 0.5, release).x, base.x + 300.0);
    let release = Point::new(base.x - 10.0, 0.0);
    assert_close(layout.target_offset(proposed, -0.5, release).x, base.x - 300.0);
    // Slow release falls back to nearest-grid on the proposal.
    assert_close(layout.target_offset(proposed, 0.0, base).x, base.x + 500.0);
}

#[test]
fn target_offset_clamps_to_scrollable_range() {
    let layout = finite_pager(3);
    let target = layout.target_offset(Point::new(-50.0, 0.0), 0.0, Point::ZERO);
    assert_close(target.x, 0.0);
    let far = Point::new(10_000.0, 0.0);
    let target = layout.target_offset(far, 0.9, far);
    assert!(target.x <= layout.content_extent().width - 100.0);
}

#[test]
fn setters_invalidate_and_prepare_rebuilds() {
    let mut layout = finite_pager(3);
    assert!(layout.is_prepared());
    layout.set_count(5);
    assert!(!layout.is_prepared());
    layout.prepare(Size::new(300.0, 100.0));
    assert_close(layout.content_extent().width, 200.0 + 500.0);
    // Unchanged value does not invalidate.
    layout.set_count(5);
    assert!(layout.is_prepared());
}

#[test]
fn cross_fade_pins_cells_and_fades_linearly() {
    let t = Transformer::new(EffectKind::CrossFade);
    let ctx = effect_ctx();
    let centered = t.apply(0.0, &ctx);
    assert_eq!(affine_of(&centered), Affine::IDENTITY);
    assert_close(centered.alpha, 1.0);
    assert_eq!(centered.z_index, Some(1));

    let half = t.apply(0.5, &ctx);
    assert_close(affine_of(&half).as_coeffs()[4], -120.0);
    assert_close(half.alpha, 0.5);

    let gone = t.apply(2.0, &ctx);
    assert_close(gone.alpha, 0.0);
    assert_eq!(gone.z_index, Some(i32::MIN));
}

#[test]
fn zoom_out_scales_between_full_and_minimum() {
    let t = Transformer::new(EffectKind::ZoomOut);
    let ctx = effect_ctx();
    let centered = t.apply(0.0, &ctx);
    let coeffs = affine_of(&centered).as_coeffs();
    assert_close(coeffs[0], 1.0);
    assert_close(centered.alpha, 1.0);
    assert_eq!(centered.z_index, None);

    let edge = t.apply(1.0, &ctx);
    assert_close(affine_of(&edge).as_coeffs()[0], 0.85);
    assert_close(edge.alpha, 0.6);

    let outside = t.apply(1.5, &ctx);
    assert_eq!(outside.transform, RenderTransform::Identity);
    assert_close(outside.alpha, 0.0);
}

#[test]
fn depth_is_asymmetric_around_the_centerline() {
    let t = Transformer::new(EffectKind::Depth);
    let ctx = effect_ctx();
    // Trailing neighbour slides under the centered page untouched.
    let behind = t.apply(-0.5, &ctx);
    assert_eq!(affine_of(&behind), Affine::IDENTITY);
    assert_close(behind.alpha, 1.0);
    assert_eq!(behind.z_index, Some(1));
    // Leading neighbour shrinks, fades, and is pinned in place.
    let ahead = t.apply(0.5, &ctx);
    let coeffs = affine_of(&ahead).as_coeffs();
    assert_close(coeffs[0], 0.75);
    assert_close(coeffs[4], -120.0);
    assert_close(ahead.alpha, 0.5);
    assert_eq!(ahead.z_index, Some(0));
}

#[test]
fn overlap_and_linear_propose_negative_spacing() {
    let size = ItemSize::Fixed(Size::new(200.0, 200.0));
    let overlap = Transformer::new(EffectKind::Overlap);
    assert_close(
        overlap.proposed_interitem_spacing(ScrollDirection::Horizontal, size, 8.0),
        200.0 * -0.65 * 0.6,
    );
    let linear = Transformer::new(EffectKind::Linear);
    assert_close(
        linear.proposed_interitem_spacing(ScrollDirection::Horizontal, size, 8.0),
        200.0 * -0.65 * 0.2,
    );
    // Automatic sizing has no configured width to overlap by.
    assert_close(
        overlap.proposed_interitem_spacing(ScrollDirection::Horizontal, ItemSize::Automatic, 8.0),
        0.0,
    );
    // Non-overlapping effects keep the configured spacing.
    let fade = Transformer::new(EffectKind::CrossFade);
    assert_close(
        fade.proposed_interitem_spacing(ScrollDirection::Horizontal, size, 8.0),
        8.0,
    );
}

#[test]
fn cover_flow_ferris_and_cubic_spacing_proposals() {
    use core::f64::consts::PI;
    let size = ItemSize::Fixed(Size::new(200.0, 200.0));
    let cover = Transformer::new(EffectKind::CoverFlow);
    assert_close(
        cover.proposed_interitem_spacing(ScrollDirection::Horizontal, size, 8.0),
        -200.0 * (PI * 0.25 * 0.25 * 3.0).sin(),
    );
    for kind in [EffectKind::FerrisWheel, EffectKind::InvertedFerrisWheel] {
        let wheel = Transformer::new(kind);
        assert_close(
            wheel.proposed_interitem_spacing(ScrollDirection::Horizontal, size, 8.0),
            -30.0,
        );
    }
    // Cubic pins the spacing to zero regardless of configuration.
    let cubic = Transformer::new(EffectKind::Cubic);
    assert_close(
        cubic.proposed_interitem_spacing(ScrollDirection::Horizontal, size, 8.0),
        0.0,
    );
}

#[test]
fn vertical_pagers_zero_out_overlap_spacing_proposals() {
    let size = ItemSize::Fixed(Size::new(200.0, 200.0));
    // Horizontal-only effects propose no overlap on a vertical pager.
    for kind in [
        EffectKind::Overlap,
        EffectKind::Linear,
        EffectKind::CoverFlow,
        EffectKind::FerrisWheel,
        EffectKind::InvertedFerrisWheel,
    ] {
        let t = Transformer::new(kind);
        assert_close(
            t.proposed_interitem_spacing(ScrollDirection::Vertical, size, 8.0),
            0.0,
        );
    }
    // Direction-agnostic effects still pass the configured spacing through.
    let fade = Transformer::new(EffectKind::CrossFade);
    assert_close(
        fade.proposed_interitem_spacing(ScrollDirection::Vertical, size, 8.0),
        8.0,
    );
}

#[test]
fn overlap_scales_and_stacks_by_distance() {
    let t = Transformer::new(EffectKind::Overlap);
    let ctx = effect_ctx();
    let centered = t.apply(0.0, &ctx);
    assert_close(affine_of(&centered).as_coeffs()[0], 1.0);
    assert_eq!(centered.z_index, Some(10));
    let away = t.apply(2.0, &ctx);
    assert_close(affine_of(&away).as_coeffs()[0], 0.65);
    assert_close(away.alpha, 0.6 + (1.0 - 2.0) * 0.4);
    assert_eq!(away.z_index, Some(-10));
}

#[test]
fn cover_flow_rotates_toward_the_centerline() {
    let t = Transformer::new(EffectKind::CoverFlow);
    let ctx = effect_ctx();
    let centered = t.apply(0.0, &ctx);
    assert_eq!(transform3d_of(&centered), Transform3d::perspective(-0.002));
    assert_eq!(centered.z_index, Some(100));
    // Cells on opposite sides rotate opposite ways.
    let left = transform3d_of(&t.apply(-1.0, &ctx));
    let right = transform3d_of(&t.apply(1.0, &ctx));
    assert_close(left.cols[0][0], right.cols[0][0]);
    assert_close(left.cols[0][2], -right.cols[0][2]);
}

#[test]
fn ferris_wheel_is_identity_at_the_centerline() {
    let t = Transformer::new(EffectKind::FerrisWheel);
    let ctx = effect_ctx();
    let centered = t.apply(0.0, &ctx);
    let coeffs = affine_of(&centered).as_coeffs();
    for (got, want) in coeffs.iter().zip(Affine::IDENTITY.as_coeffs()) {
        assert_close(*got, want);
    }
    assert_close(centered.alpha, 1.0);
    assert_eq!(centered.z_index, Some(4));

    let off = t.apply(0.6, &ctx);
    assert_close(off.alpha, 0.6);

    let far = t.apply(6.0, &ctx);
    assert_eq!(far.transform, RenderTransform::Identity);
    assert_eq!(far.z_index, Some(0));
}

#[test]
fn inverted_ferris_wheel_mirrors_rotation() {
    let ctx = effect_ctx();
    let wheel = Transformer::new(EffectKind::FerrisWheel);
    let inverted = Transformer::new(EffectKind::InvertedFerrisWheel);
    let a = affine_of(&wheel.apply(0.5, &ctx)).as_coeffs();
    let b = affine_of(&inverted.apply(0.5, &ctx)).as_coeffs();
    // Same rotation magnitude, opposite sense.
    assert_close(a[0], b[0]);
    assert_close(a[1], -b[1]);
}

#[test]
fn cubic_hides_the_trailing_boundary_but_not_the_leading_one() {
    let t = Transformer::new(EffectKind::Cubic);
    let ctx = effect_ctx();
    let trailing = t.apply(-1.0, &ctx);
    assert_close(trailing.alpha, 0.0);
    assert_eq!(trailing.z_index, None);
    let leading = t.apply(0.999, &ctx);
    assert_close(leading.alpha, 1.0);
    assert_eq!(leading.z_index, Some(0));
}

#[test]
fn cubic_hinges_on_the_page_edge() {
    let t = Transformer::new(EffectKind::Cubic);
    let ctx = effect_ctx();
    let state = t.apply(-0.25, &ctx);
    // Hinge shifts half a page toward the incoming edge.
    assert_eq!(state.center_offset, Vec2::new(100.0, 0.0));
    let m = transform3d_of(&state);
    // The transform pulls the turning edge to the local origin, so once
    // the center shift is applied that edge stays fixed in content space.
    let hinged = m.apply([100.0, 0.0, 0.0]);
    assert_close(hinged[0], 0.0);
    assert_close(hinged[1], 0.0);
    assert_close(hinged[2], 0.0);
}

#[test]
fn horizontal_only_effects_pass_through_vertical_pagers() {
    let ctx = EffectContext {
        direction: ScrollDirection::Vertical,
        ..effect_ctx()
    };
    for kind in [
        EffectKind::Overlap,
        EffectKind::Linear,
        EffectKind::CoverFlow,
        EffectKind::FerrisWheel,
        EffectKind::InvertedFerrisWheel,
    ] {
        let state = Transformer::new(kind).apply(0.5, &ctx);
        assert_eq!(state, RenderState::default());
    }
}

#[test]
fn transformer_tunables_override_defaults() {
    let t = Transformer::new(EffectKind::ZoomOut)
        .with_minimum_scale(0.5)
        .with_minimum_alpha(0.1);
    let edge = t.apply(1.0, &effect_ctx());
    assert_close(affine_of(&edge).as_coeffs()[0], 0.5);
    assert_close(edge.alpha, 0.1);
}

#[test]
fn effect_spacing_feeds_back_into_layout_geometry() {
    let options = PagerOptions::new(4)
        .with_item_size(ItemSize::Fixed(Size::new(100.0, 100.0)))
        .with_transformer(Transformer::new(EffectKind::Overlap));
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(300.0, 100.0));
    // Pages are 100 - 39 = 61 apart under the overlap proposal.
    let spacing = 100.0 + 100.0 * -0.65 * 0.6;
    assert_close(layout.offset_for_item(1).x - layout.offset_for_item(0).x, spacing);
}

#[test]
fn layout_applies_effect_output_to_attributes() {
    let options = PagerOptions::new(6)
        .with_item_size(ItemSize::Fixed(Size::new(100.0, 100.0)))
        .with_infinite(true)
        .with_transformer(Transformer::new(EffectKind::CrossFade));
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(300.0, 100.0));
    let cells = layout.visible_attributes(layout.visible_rect());
    let centered = cells.iter().find(|c| c.position.abs() < 1e-9).unwrap();
    assert_close(centered.alpha, 1.0);
    assert_eq!(centered.z_index, 1);
    let neighbour = cells.iter().find(|c| (c.position - 1.0).abs() < 1e-9).unwrap();
    // Cross-fade pins every cell under the centerline.
    assert_close(neighbour.center.x - centered.center.x, 100.0);
    match neighbour.transform {
        RenderTransform::Affine(a) => assert_close(a.as_coeffs()[4], -100.0),
        ref other => panic!("expected affine transform, got {other:?}"),
    }
    assert_close(neighbour.alpha, 0.0);
}

#[test]
fn for_each_visible_matches_collected_attributes() {
    let layout = infinite_pager();
    let rect = layout.visible_rect();
    let collected = layout.visible_attributes(rect);
    let mut streamed = alloc::vec::Vec::new();
    layout.for_each_visible(rect, |cell| streamed.push(cell));
    assert_eq!(collected, streamed);
}

#[test]
fn visible_query_outside_content_is_empty() {
    let layout = finite_pager(3);
    let rect = Rect::from_origin_size(Point::new(-500.0, 0.0), Size::new(100.0, 100.0));
    assert!(layout.visible_attributes(rect).is_empty());
    let rect = Rect::from_origin_size(Point::new(10_000.0, 0.0), Size::new(100.0, 100.0));
    assert!(layout.visible_attributes(rect).is_empty());
}

#[test]
fn visible_query_off_the_cross_axis_is_empty() {
    let layout = finite_pager(3);
    // In range on the scroll axis but entirely below the content.
    let rect = Rect::from_origin_size(Point::new(0.0, 500.0), Size::new(300.0, 100.0));
    assert!(layout.visible_attributes(rect).is_empty());
    // And entirely above it.
    let rect = Rect::from_origin_size(Point::new(0.0, -200.0), Size::new(300.0, 100.0));
    assert!(layout.visible_attributes(rect).is_empty());
}

#[test]
fn transform3d_rotation_and_perspective_compose() {
    let quarter = Transform3d::from_rotation_y(core::f64::consts::FRAC_PI_2);
    let p = quarter.apply([1.0, 0.0, 0.0]);
    assert_close(p[0], 0.0);
    assert_close(p[2], -1.0);

    let persp = Transform3d::perspective(-0.002);
    let p = persp.apply([0.0, 0.0, 100.0]);
    assert_close(p[2], 100.0 / 0.8);

    let t = Transform3d::from_translation(10.0, 0.0, 0.0);
    let composed = (t * quarter).apply([1.0, 2.0, 3.0]);
    let stepwise = t.apply(quarter.apply([1.0, 2.0, 3.0]));
    for i in 0..3 {
        assert_close(composed[i], stepwise[i]);
    }
}
