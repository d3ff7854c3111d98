// Example: minimal usage with an infinite cover-flow pager.
use carousel::{EffectKind, ItemSize, PagerLayout, PagerOptions, Transformer};
use kurbo::Size;

fn main() {
    let options = PagerOptions::new(8)
        .with_item_size(ItemSize::Fixed(Size::new(240.0, 160.0)))
        .with_infinite(true)
        .with_transformer(Transformer::new(EffectKind::CoverFlow));
    let mut layout = PagerLayout::new(options);
    layout.prepare(Size::new(390.0, 200.0));

    println!("content_extent={:?}", layout.content_extent());
    println!("current_index={}", layout.current_index());

    for cell in layout.visible_attributes(layout.visible_rect()) {
        println!(
            "item={} position={:+.2} alpha={:.2} z={} frame={:?}",
            cell.item,
            cell.position,
            cell.alpha,
            cell.z_index,
            cell.frame()
        );
    }

    let off = layout.offset_for_item(5);
    layout.set_scroll_offset(off);
    println!("after scroll_to_item(5): index={}", layout.current_index());
}
