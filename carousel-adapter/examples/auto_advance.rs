use carousel::{ItemSize, PagerOptions};
use carousel_adapter::Controller;
use kurbo::Size;

fn main() {
    // Example: banner-style controller driving a pager without holding any
    // UI objects.
    //
    // An adapter would:
    // - call prepare() when the viewport is known or changes
    // - call begin_dragging()/end_dragging() around user pans
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container (if any)
    // - render using visible_attributes()
    let options = PagerOptions::new(5)
        .with_item_size(ItemSize::Fixed(Size::new(320.0, 120.0)))
        .with_infinite(true);
    let mut c = Controller::new(options);
    c.prepare(Size::new(320.0, 120.0));
    c.set_automatic_sliding_interval_ms(Some(1_000), 0);

    let mut now_ms = 0u64;
    while now_ms < 3_500 {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms.is_multiple_of(160) {
                println!(
                    "t={now_ms} off={:.1} index={}",
                    off.x,
                    c.layout().current_index()
                );
            }
        }
    }

    println!(
        "done: index={} progress={:.2}",
        c.layout().current_index(),
        c.layout().scroll_progress()
    );
}
