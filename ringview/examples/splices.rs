// Example: mutate an `ObservedVec` and reproject the live window from its splice records.
use ringview::{BindingContext, BoundView, ObservedVec, RepeatOptions, Repeater};

struct Label(Option<&'static str>);

impl BoundView<&'static str> for Label {
    fn rebind(&mut self, context: &BindingContext<&'static str>) {
        self.0 = context.item;
    }

    fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.0 = None;
        }
    }

    fn extent(&self) -> f64 {
        20.0
    }
}

fn main() -> Result<(), ringview::RepeatError> {
    let mut items = ObservedVec::from(vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
    let mut r = Repeater::attach(
        RepeatOptions::default(),
        &items,
        (),
        100.0,
        |ctx: &BindingContext<&'static str>| Label(ctx.item),
    )?;
    let show = |r: &Repeater<Label, &'static str>| {
        r.views().map(|v| v.view().0.unwrap_or("-")).collect::<Vec<_>>()
    };
    println!("initial: {:?}", show(&r));

    items.insert(0, "new");
    items.remove(4);
    let splices = items.take_splices();
    let report = r.handle_splices(&items, &splices);
    println!("after insert/remove: {:?} {report:?}", show(&r));

    items.truncate(2);
    let splices = items.take_splices();
    let report = r.handle_splices(&items, &splices);
    println!("after truncate: {:?} {report:?}", show(&r));
    Ok(())
}
