use ringview::{BindingContext, BoundView, RepeatOptions, Repeater};
use ringview_adapter::{
    Capabilities, Controller, EventTarget, InputNormalizer, InputOptions, InputSource, Key,
    Momentum, MomentumOptions, RawInput,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// Stands in for a DOM element or a native scroll view.
#[derive(Default)]
struct Surface {
    listening: Vec<InputSource>,
}

impl EventTarget for Surface {
    fn add_source(&mut self, source: InputSource) {
        self.listening.push(source);
    }

    fn remove_source(&mut self, source: InputSource) {
        self.listening.retain(|s| *s != source);
    }
}

struct Row(usize);

impl BoundView<u32> for Row {
    fn rebind(&mut self, context: &BindingContext<u32>) {
        self.0 = context.index;
    }

    fn set_hidden(&mut self, _hidden: bool) {}

    fn extent(&self) -> f64 {
        32.0
    }
}

fn main() -> Result<(), ringview::RepeatError> {
    // Example: a frame loop feeding a touch fling and a key press through the controller.
    //
    // Run with `--features tracing` to see the window shifts and momentum phases.
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ringview=debug,ringview_adapter=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let items: Vec<u32> = (0..50_000).collect();
    let mut surface = Surface::default();

    let repeater = Repeater::attach(RepeatOptions::default(), &items, (), 480.0, |ctx| {
        Row(ctx.index)
    })?;
    let mut normalizer = InputNormalizer::new(
        Capabilities::all().with_mouse_wheel(false),
        InputOptions::default().with_key_step(96.0),
    );
    normalizer.add_listener(|event| {
        println!(
            "delta {:+.1} (y={:.1}) from {:?}",
            event.delta_y, event.y, event.source
        );
    });
    let mut c = Controller::attach(
        repeater,
        normalizer,
        Momentum::new(MomentumOptions::default()),
        &mut surface,
    );
    println!("listening on {:?}", surface.listening);

    // A quick upward swipe.
    let mut now_ms = 0u64;
    c.handle_input(RawInput::TouchStart { x: 0.0, y: 600.0 }, now_ms);
    for y in [560.0, 500.0, 420.0, 330.0] {
        now_ms += 30;
        c.handle_input(RawInput::TouchMove { x: 0.0, y }, now_ms);
        c.tick(now_ms, &items);
    }
    now_ms += 10;
    c.tick(now_ms, &items);
    c.handle_input(RawInput::TouchEnd, now_ms);
    println!("released: velocity={:.1}", c.momentum().velocity());

    let mut frames = 0;
    while c.momentum().is_decaying() || !c.repeater().scroll().is_settled() {
        now_ms += 16;
        frames += 1;
        if let Some(patch) = c.tick(now_ms, &items) {
            if frames % 10 == 0 {
                println!(
                    "t={now_ms} translate={} first={}",
                    patch.translate,
                    c.repeater().first()
                );
            }
        }
    }
    println!(
        "settled at first={} after {frames} frames",
        c.repeater().first()
    );

    c.handle_input(RawInput::KeyDown(Key::ArrowUp), now_ms);
    for _ in 0..120 {
        now_ms += 16;
        c.tick(now_ms, &items);
    }
    println!("after ArrowUp: first={}", c.repeater().first());

    let views = c.detach(&mut surface);
    println!(
        "released {} views, still listening on {:?}",
        views.len(),
        surface.listening
    );
    Ok(())
}
