// Example: a ring of 11 text rows over a million items, driven by wheel-sized deltas.
use ringview::{BindingContext, BoundView, RepeatOptions, Repeater};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug)]
struct TextRow {
    text: String,
    hidden: bool,
}

impl BoundView<u64> for TextRow {
    fn rebind(&mut self, context: &BindingContext<u64>) {
        self.text = match context.item {
            Some(item) => format!("#{} -> {item}", context.index),
            None => String::new(),
        };
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn extent(&self) -> f64 {
        40.0
    }
}

fn main() -> Result<(), ringview::RepeatError> {
    // Events are only emitted with `--features tracing`.
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ringview=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let items: Vec<u64> = (0..1_000_000).map(|i| i * i).collect();
    let mut r = Repeater::attach(RepeatOptions::default(), &items, (), 400.0, |ctx| {
        let mut row = TextRow {
            text: String::new(),
            hidden: false,
        };
        row.rebind(ctx);
        row
    })?;
    println!("slots={} extent={}", r.slots(), r.scroll_extent());

    for _ in 0..4 {
        r.scroll_by(-100.0);
    }

    let mut frames = 0;
    while !r.scroll().is_settled() || frames == 0 {
        frames += 1;
        if let Some(patch) = r.tick(&items) {
            if patch.shift.is_some() {
                println!(
                    "frame={frames} translate={} leading={:?} move={:?}",
                    patch.translate, patch.leading_offset, patch.node_move
                );
            }
        }
    }
    // The window may still trail the offset by a few rows.
    while r.tick(&items).is_some() {}

    println!("first={} bound={:?}", r.first(), r.bound_indices());
    for view in r.views().take(3) {
        println!("  {}", view.view().text);
    }
    Ok(())
}
