// Example: scroll-poll driven reveals over a fake document.
use revealer::{
    ElementRect, ObservationSource, RevealTracker, ScrollPoll, TrackerOptions, Viewport,
};

fn main() {
    let opts = TrackerOptions::new()
        .with_initial_viewport(Some(Viewport::new(0, 600)))
        .with_on_reveal(Some(|t: &RevealTracker<u64>, key: &u64| {
            println!("reveal #{key} ({}/{})", t.revealed_count(), t.len());
        }));
    let mut tracker = RevealTracker::new(opts);

    // Cards laid out every 400 units down the page.
    for i in 0..10u64 {
        let top = i as i64 * 400;
        tracker.observe(i, ElementRect::new(top, top + 300));
    }

    let mut poll = ScrollPoll::new();
    for top in (0i64..4000).step_by(250) {
        tracker.set_scroll_top(top);
        poll.deliver(&mut tracker);
        if tracker.all_revealed() {
            break;
        }
    }
    println!(
        "done: revealed {}/{}",
        tracker.revealed_count(),
        tracker.len()
    );
}
