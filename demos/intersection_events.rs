// Example: event-driven reveals fed by a native intersection primitive,
// with an injected tooltip capability.
use revealer::{
    ElementRect, IntersectionEntry, IntersectionEvents, ObservationSource, TooltipProvider,
    TrackerOptions, attach,
};

struct DemoTooltips;

impl TooltipProvider for DemoTooltips {
    fn init(&self) {
        println!("tooltips initialized");
    }
}

fn main() {
    let elements = (0..4u64).map(|i| {
        let top = i as i64 * 500;
        (i, ElementRect::new(top, top + 400))
    });
    let mut tracker = attach(elements, TrackerOptions::new(), Some(&DemoTooltips));

    let mut events = IntersectionEvents::new();
    events.push_many([
        IntersectionEntry {
            key: 0,
            is_intersecting: true,
        },
        IntersectionEntry {
            key: 1,
            is_intersecting: true,
        },
        IntersectionEntry {
            key: 3,
            is_intersecting: false,
        },
    ]);

    let revealed = events.deliver(&mut tracker);
    println!(
        "revealed {revealed}, pending {}",
        tracker.pending_count()
    );
}
