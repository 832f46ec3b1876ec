use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_delta(&mut self) -> f64 {
        self.gen_range_u64(0, 2001) as f64 - 1000.0
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: usize,
    item: Option<u32>,
    index: usize,
    hidden: bool,
    rebinds: usize,
    height: f64,
}

impl BoundView<u32> for Row {
    fn rebind(&mut self, context: &BindingContext<u32>) {
        self.item = context.item;
        self.index = context.index;
        self.rebinds += 1;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn extent(&self) -> f64 {
        self.height
    }
}

fn row_factory(height: f64, created: &Cell<usize>) -> impl FnMut(&BindingContext<u32>) -> Row + '_ {
    move |context| {
        let id = created.get();
        created.set(id + 1);
        Row {
            id,
            item: context.item,
            index: context.index,
            hidden: false,
            rebinds: 0,
            height,
        }
    }
}

fn items(len: usize) -> Vec<u32> {
    (0..len as u32).collect()
}

fn attach(items: &[u32], height: f64, viewport: f64) -> Repeater<Row, u32> {
    let created = Cell::new(0);
    Repeater::attach(
        RepeatOptions::default(),
        items,
        (),
        viewport,
        row_factory(height, &created),
    )
    .unwrap()
}

/// Ticks until the offset reached its target and the window caught up.
fn settle(r: &mut Repeater<Row, u32>, items: &[u32]) -> usize {
    for ticks in 0..10_000 {
        let idle = r.tick(items).is_none();
        if idle && r.scroll().is_settled() {
            return ticks;
        }
    }
    panic!("repeater did not settle");
}

fn assert_contiguous(r: &Repeater<Row, u32>, len: usize) {
    let first = r.first();
    let expected: Vec<usize> = (first..first + r.slots()).filter(|&i| i < len).collect();
    assert_eq!(r.bound_indices(), expected, "window must be contiguous");

    for (slot, view) in r.views().enumerate() {
        let index = first + slot;
        assert_eq!(view.context().index, index);
        assert_eq!(view.view().index, index);
        assert_eq!(view.is_hidden(), index >= len);
        assert_eq!(view.view().hidden, index >= len);
    }
}

#[test]
fn attach_sizes_pool_to_viewport_plus_spare_row() {
    let data = items(1000);
    let r = attach(&data, 40.0, 400.0);

    assert_eq!(r.slots(), 11);
    assert_eq!(r.pool_size(), 11);
    assert_eq!(r.item_height(), 40.0);
    assert_eq!(r.first(), 0);
    assert_eq!(r.scroll_extent(), 1000.0 * 40.0 - 400.0);
    assert_eq!(r.bound_indices(), (0..11).collect::<Vec<_>>());
    assert_contiguous(&r, data.len());
}

#[test]
fn attach_uses_configured_item_height_over_measurement() {
    let data = items(100);
    let created = Cell::new(0);
    let r = Repeater::attach(
        RepeatOptions::default().with_item_height(20.0),
        &data,
        (),
        100.0,
        row_factory(0.0, &created),
    )
    .unwrap();
    assert_eq!(r.item_height(), 20.0);
    assert_eq!(r.slots(), 6);
    assert_eq!(created.get(), 6);
}

#[test]
fn attach_rejects_unmeasured_rows() {
    let data = items(10);
    for height in [0.0, -4.0, f64::NAN, f64::INFINITY] {
        let created = Cell::new(0);
        let err = Repeater::attach(
            RepeatOptions::default(),
            &data,
            (),
            400.0,
            row_factory(height, &created),
        )
        .unwrap_err();
        assert!(matches!(err, RepeatError::InvalidItemHeight { .. }));
    }
}

#[test]
fn attach_rejects_invalid_viewport() {
    let data = items(10);
    let created = Cell::new(0);
    let err = Repeater::attach(
        RepeatOptions::default(),
        &data,
        (),
        f64::NAN,
        row_factory(40.0, &created),
    )
    .unwrap_err();
    assert!(matches!(err, RepeatError::InvalidViewport { .. }));
    assert_eq!(created.get(), 0);
}

#[test]
fn attach_to_empty_collection_hides_every_view() {
    let data: Vec<u32> = Vec::new();
    let r = attach(&data, 40.0, 400.0);
    assert_eq!(r.slots(), 11);
    assert!(r.bound_indices().is_empty());
    assert!(r.views().all(|v| v.is_hidden() && v.context().item.is_none()));
    assert_eq!(r.scroll_extent(), 0.0);
}

#[test]
fn forward_scroll_settles_on_row_ten() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);

    for _ in 0..4 {
        r.scroll_by(-100.0);
    }
    assert_eq!(r.scroll().target_offset, -400.0);

    settle(&mut r, &data);
    assert_eq!(r.scroll().current_offset, -400.0);
    assert_eq!(r.first(), 10);
    assert_eq!(r.bound_indices(), (10..=20).collect::<Vec<_>>());
    assert_contiguous(&r, data.len());
}

#[test]
fn scrolling_never_creates_views() {
    let data = items(1000);
    let created = Cell::new(0);
    let mut r = Repeater::attach(
        RepeatOptions::default(),
        &data,
        (),
        400.0,
        row_factory(40.0, &created),
    )
    .unwrap();
    let ids: Vec<usize> = {
        let mut ids: Vec<usize> = r.views().map(|v| v.view().id).collect();
        ids.sort_unstable();
        ids
    };

    r.scroll_by(-5_000.0);
    settle(&mut r, &data);
    r.scroll_by(2_000.0);
    settle(&mut r, &data);

    assert_eq!(created.get(), 11);
    let mut after: Vec<usize> = r.views().map(|v| v.view().id).collect();
    after.sort_unstable();
    assert_eq!(ids, after);
}

#[test]
fn forward_shift_recycles_top_view_to_bottom() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);
    let top_id = r.view_at(0).unwrap().view().id;

    r.scroll_to(-40.0);
    let mut patch = None;
    for _ in 0..100 {
        if let Some(p) = r.tick(&data) {
            if p.shift.is_some() {
                patch = Some(p);
                break;
            }
        }
    }
    let patch = patch.unwrap();

    assert_eq!(patch.shift, Some(ScrollDirection::Forward));
    assert_eq!(patch.node_move, Some(NodeMove { from: 0, to: 10 }));
    assert_eq!(patch.leading_offset, Some(40.0));
    assert_eq!(r.first(), 1);

    let bottom = r.view_at(10).unwrap();
    assert_eq!(bottom.view().id, top_id);
    assert_eq!(bottom.context().index, 11);
    assert_eq!(bottom.context().item, Some(11));
    assert_eq!(bottom.view().item, Some(11));
    assert_eq!(bottom.view().rebinds, 1);
}

#[test]
fn backward_shift_recycles_bottom_view_to_top() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);
    r.scroll_to(-400.0);
    settle(&mut r, &data);
    let bottom_id = r.view_at(10).unwrap().view().id;

    r.scroll_to(-360.0);
    let mut patch = None;
    for _ in 0..100 {
        if let Some(p) = r.tick(&data) {
            if p.shift.is_some() {
                patch = Some(p);
                break;
            }
        }
    }
    let patch = patch.unwrap();

    assert_eq!(patch.shift, Some(ScrollDirection::Backward));
    assert_eq!(patch.node_move, Some(NodeMove { from: 10, to: 0 }));
    assert_eq!(patch.leading_offset, Some(9.0 * 40.0));
    assert_eq!(r.first(), 9);
    let top = r.view_at(0).unwrap();
    assert_eq!(top.view().id, bottom_id);
    assert_eq!(top.context().index, 9);
}

#[test]
fn tick_is_a_noop_once_settled() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);
    assert_eq!(r.tick(&data), None);

    r.scroll_by(-120.0);
    assert!(r.tick(&data).is_some());
    settle(&mut r, &data);
    assert_eq!(r.tick(&data), None);
    assert_eq!(r.tick(&data), None);
}

#[test]
fn translate_follows_rounded_current_offset() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);
    r.scroll_by(-100.0);
    let patch = r.tick(&data).unwrap();
    assert_eq!(patch.translate, -10.0);
    let patch = r.tick(&data).unwrap();
    assert_eq!(patch.translate, -19.0);
}

#[test]
fn window_catches_up_one_row_per_tick_after_a_jump() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);
    let opts = RepeatOptions::default().with_ease(1.0);
    let created = Cell::new(0);
    let mut fast =
        Repeater::attach(opts, &data, (), 400.0, row_factory(40.0, &created)).unwrap();

    fast.scroll_to(-4_000.0);
    let mut ticks = 0;
    while fast.first() < 100 {
        let before = fast.first();
        fast.tick(&data);
        assert!(fast.first() - before <= 1);
        ticks += 1;
        assert!(ticks <= 100);
    }
    assert_eq!(ticks, 100);
    assert_contiguous(&fast, data.len());

    // The default ease gets there too.
    r.scroll_to(-4_000.0);
    settle(&mut r, &data);
    assert_eq!(r.first(), 100);
}

#[test]
fn tail_never_binds_past_the_end() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);

    r.scroll_by(-1.0e9);
    assert_eq!(r.scroll().target_offset, -(1000.0 * 40.0 - 400.0));
    settle(&mut r, &data);

    assert_eq!(r.first(), 989);
    assert_eq!(r.bound_indices(), (989..1000).collect::<Vec<_>>());
    assert!(r.views().all(|v| !v.is_hidden()));
    assert_eq!(r.top_row(), 990);
}

#[test]
fn target_offset_is_clamped() {
    let data = items(1000);
    let mut r = attach(&data, 40.0, 400.0);

    assert_eq!(r.scroll_by(500.0), 0.0);
    assert_eq!(r.scroll_by(-120.0), -120.0);
    assert_eq!(r.scroll_by(f64::NAN), -120.0);
    assert_eq!(r.scroll_to(f64::NEG_INFINITY), -39_600.0);
    assert_eq!(r.scroll_to_index(5), -200.0);
    assert_eq!(r.scroll_to_index(100_000), -39_600.0);
}

#[test]
fn random_scrolling_keeps_window_invariants() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..8 {
        let len = rng.gen_range_usize(0, 400);
        let data = items(len);
        let mut r = attach(&data, 40.0, 400.0);
        let extent = r.scroll_extent();

        for _ in 0..300 {
            if rng.gen_bool() {
                let target = r.scroll_by(rng.gen_delta());
                assert!(target <= 0.0 && target >= -extent);
            }
            let before = r.first();
            r.tick(&data);
            let after = r.first();
            assert!(before.abs_diff(after) <= 1, "single-step shift");
            assert!(r.window().previous_first.abs_diff(after) <= 1);
            assert_contiguous(&r, len);
        }
    }
}

#[test]
fn shrinking_below_window_hides_surplus_views() {
    let mut data = ObservedVec::from(items(1000));
    let mut r = attach(&data, 40.0, 400.0);
    r.scroll_to(-400.0);
    settle(&mut r, &data);

    data.truncate(5);
    let splices = data.take_splices();
    assert_eq!(splices, vec![Splice::remove(5, 995)]);

    let report = r.handle_splices(&data, &splices);
    assert_eq!(report.bound, 5);
    assert_eq!(report.hidden, 6);
    assert_eq!(report.rejected, 0);
    assert_eq!(report.scroll_extent, 0.0);
    assert_eq!(report.leading_offset, 0.0);
    assert_eq!(r.scroll_extent(), 0.0);
    assert_eq!(r.pool_size(), 11);
    assert_eq!(r.first(), 0);
    assert_eq!(r.bound_indices(), vec![0, 1, 2, 3, 4]);

    // Both offsets were re-clamped to the new extent.
    assert_eq!(r.scroll().target_offset, 0.0);
    assert_eq!(r.scroll().current_offset, 0.0);
    settle(&mut r, &data);
    assert_contiguous(&r, 5);

    // Growing back past the window brings the parked views back.
    data.extend(5..50);
    let splices = data.take_splices();
    let report = r.handle_splices(&data, &splices);
    assert_eq!(report.rejected, 0);
    assert_eq!(report.bound, 11);
    assert_eq!(report.hidden, 0);
    assert_eq!(r.bound_indices(), (0..11).collect::<Vec<_>>());
    assert!(r.views().all(|v| !v.view().hidden));
    assert_eq!(r.scroll_extent(), 50.0 * 40.0 - 400.0);
    assert_contiguous(&r, data.len());
}

#[test]
fn insertion_reprojects_window_from_current_first() {
    let mut data = ObservedVec::from(items(100));
    let mut r = attach(&data, 40.0, 400.0);
    r.scroll_to(-80.0);
    settle(&mut r, &data);
    assert_eq!(r.first(), 2);

    data.insert(0, 1_000);
    data.insert(0, 1_001);
    let splices = data.take_splices();
    let report = r.handle_splices(&data, &splices);

    assert_eq!(report.bound, 11);
    assert_eq!(r.first(), 2);
    let bound: Vec<Option<u32>> = r.contexts().map(|c| c.item).collect();
    let expected: Vec<Option<u32>> = (0..11).map(|i| Some(i as u32)).collect();
    assert_eq!(bound, expected);
    assert_eq!(r.scroll_extent(), 102.0 * 40.0 - 400.0);
}

#[test]
fn reprojection_is_idempotent() {
    let mut data = ObservedVec::from(items(300));
    let mut r = attach(&data, 40.0, 400.0);
    r.scroll_to(-2_000.0);
    settle(&mut r, &data);

    data.splice(40..60, [7, 8, 9]);
    let splices = data.take_splices();
    let first = r.handle_splices(&data, &splices);
    let contexts: Vec<BindingContext<u32>> = r.contexts().cloned().collect();

    let second = r.reproject(&data);
    let again: Vec<BindingContext<u32>> = r.contexts().cloned().collect();

    assert_eq!(contexts, again);
    assert_eq!(first.bound, second.bound);
    assert_eq!(first.hidden, second.hidden);
    assert_eq!(first.scroll_extent, second.scroll_extent);
}

#[test]
fn out_of_range_splices_are_rejected_but_window_still_reprojects() {
    let data = items(20);
    let mut r = attach(&data, 40.0, 400.0);
    let splices = [Splice::remove(15, 10)];

    let report = r.handle_splices(&data, &splices);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.bound, 11);
    assert_contiguous(&r, data.len());

    let splices = [
        Splice::insert(21, 1),
        Splice::insert(usize::MAX, 2),
        Splice::new(usize::MAX, usize::MAX, 0),
    ];
    let report = r.handle_splices(&data, &splices);
    assert_eq!(report.rejected, 3);
    assert_contiguous(&r, data.len());
}

#[test]
fn splice_batches_are_replayed_in_order() {
    let mut data = ObservedVec::from(items(20));
    let mut r = attach(&data, 40.0, 400.0);

    // Grow, then shrink to nothing: the first record only fits the intermediate length.
    data.extend(20..25);
    data.clear();
    let splices = data.take_splices();
    assert_eq!(splices, vec![Splice::insert(20, 5), Splice::remove(0, 25)]);

    let report = r.handle_splices(&data, &splices);
    assert_eq!(report.rejected, 0);
    assert_eq!(report.bound, 0);
    assert_eq!(report.hidden, 11);
    assert_eq!(report.scroll_extent, 0.0);

    // Insert in the middle, then remove an item that only exists after the insert.
    data.extend(0..10);
    data.insert(5, 99);
    data.remove(10);
    let splices = data.take_splices();
    let report = r.handle_splices(&data, &splices);
    assert_eq!(report.rejected, 0);
    assert_eq!(report.bound, 10);
    let bound: Vec<Option<u32>> = r.contexts().map(|c| c.item).take(10).collect();
    let expected: Vec<Option<u32>> = data.iter().copied().map(Some).collect();
    assert_eq!(bound, expected);
}

#[test]
fn tick_reprojects_when_collection_changed_silently() {
    let data = items(100);
    let mut r = attach(&data, 40.0, 400.0);
    let shorter = items(3);

    r.tick(&shorter);
    assert_eq!(r.len(), 3);
    assert_eq!(r.bound_indices(), vec![0, 1, 2]);
    assert_eq!(r.scroll_extent(), 0.0);
}

#[test]
fn resize_grows_pool_and_parks_surplus_views() {
    let data = items(1000);
    let created = Cell::new(0);
    let mut r = Repeater::attach(
        RepeatOptions::default(),
        &data,
        (),
        400.0,
        row_factory(40.0, &created),
    )
    .unwrap();
    r.scroll_to(-400.0);
    settle(&mut r, &data);

    r.resize(800.0, &data, row_factory(40.0, &created)).unwrap();
    assert_eq!(r.slots(), 21);
    assert_eq!(r.pool_size(), 21);
    assert_eq!(created.get(), 21);
    assert_eq!(r.scroll_extent(), 40_000.0 - 800.0);
    assert_contiguous(&r, data.len());

    r.resize(200.0, &data, row_factory(40.0, &created)).unwrap();
    assert_eq!(r.slots(), 6);
    assert_eq!(r.pool_size(), 21);
    assert_eq!(created.get(), 21);
    assert_eq!(r.bound_indices(), (10..16).collect::<Vec<_>>());
    assert_contiguous(&r, data.len());

    // Growing again reuses parked views before creating new ones.
    r.resize(400.0, &data, row_factory(40.0, &created)).unwrap();
    assert_eq!(r.slots(), 11);
    assert_eq!(created.get(), 21);
    assert_contiguous(&r, data.len());

    r.scroll_by(-2_000.0);
    settle(&mut r, &data);
    assert_contiguous(&r, data.len());
}

#[test]
fn resize_rejects_invalid_viewport() {
    let data = items(10);
    let created = Cell::new(0);
    let mut r = attach(&data, 40.0, 400.0);
    let err = r
        .resize(-1.0, &data, row_factory(40.0, &created))
        .unwrap_err();
    assert_eq!(err, RepeatError::InvalidViewport { extent: -1.0 });
    assert_eq!(r.slots(), 11);
}

#[test]
fn detach_returns_every_view() {
    let data = items(1000);
    let created = Cell::new(0);
    let mut r = Repeater::attach(
        RepeatOptions::default(),
        &data,
        (),
        400.0,
        row_factory(40.0, &created),
    )
    .unwrap();
    r.resize(200.0, &data, row_factory(40.0, &created)).unwrap();
    let views = r.detach();
    assert_eq!(views.len(), 11);
}

#[test]
fn context_flags_follow_index_and_length() {
    let c = BindingContext::new(Some('a'), 0, 3, ());
    assert!(c.first && !c.last && !c.middle && c.even && !c.odd);

    let c = BindingContext::new(Some('b'), 1, 3, ());
    assert!(!c.first && !c.last && c.middle && !c.even && c.odd);

    let c = BindingContext::new(Some('c'), 2, 3, ());
    assert!(!c.first && c.last && !c.middle && c.even);

    let single = BindingContext::new(Some('x'), 0, 1, ());
    assert!(single.first && single.last && !single.middle);

    let parked = BindingContext::<char>::new(None, 5, 3, ());
    assert!(!parked.is_bound() && !parked.last && parked.middle);
}

#[test]
fn context_resolves_template_names() {
    let c = BindingContext::new(Some(42u32), 3, 10, "outer");

    assert_eq!(c.resolve("row", "row"), Some(ContextValue::Item(&42)));
    assert_eq!(c.resolve("item", "row"), None);
    assert_eq!(c.resolve("$index", "row"), Some(ContextValue::Index(3)));
    assert_eq!(c.resolve("$odd", "row"), Some(ContextValue::Flag(true)));
    assert_eq!(c.resolve("$middle", "row"), Some(ContextValue::Flag(true)));
    assert_eq!(c.resolve("$parent", "row"), Some(ContextValue::Parent(&"outer")));

    let parked = BindingContext::<u32, &str>::new(None, 12, 10, "outer");
    assert_eq!(parked.resolve("row", "row"), None);
}

#[test]
fn set_parent_reaches_every_context() {
    let data = items(50);
    let created = Cell::new(0);
    let mut factory = {
        let created = &created;
        move |context: &BindingContext<u32, u8>| {
            created.set(created.get() + 1);
            ParentRow {
                parent: context.parent,
            }
        }
    };
    let mut r = Repeater::attach(
        RepeatOptions::default().with_item_height(10.0),
        &data,
        1u8,
        50.0,
        &mut factory,
    )
    .unwrap();
    r.set_parent(7, &data);
    assert_eq!(*r.parent(), 7);
    assert!(r.contexts().all(|c| c.parent == 7));
    assert!(r.views().all(|v| v.view().parent == 7));
}

#[derive(Debug)]
struct ParentRow {
    parent: u8,
}

impl BoundView<u32, u8> for ParentRow {
    fn rebind(&mut self, context: &BindingContext<u32, u8>) {
        self.parent = context.parent;
    }

    fn set_hidden(&mut self, _hidden: bool) {}

    fn extent(&self) -> f64 {
        10.0
    }
}

#[test]
fn observed_vec_records_splices() {
    let mut v = ObservedVec::new();
    v.push(1);
    v.extend([2, 3, 4]);
    v.insert(1, 9);
    assert_eq!(v.remove(0), Some(1));
    assert_eq!(v.remove(100), None);
    let removed = v.splice(1..3, [5]);
    assert_eq!(removed, vec![2, 3]);
    v.pop();
    v.extend(core::iter::empty());

    assert_eq!(v.as_slice(), &[9, 5]);
    assert_eq!(
        v.take_splices(),
        vec![
            Splice::insert(0, 1),
            Splice::insert(1, 3),
            Splice::insert(1, 1),
            Splice::remove(0, 1),
            Splice::new(1, 2, 1),
            Splice::remove(2, 1),
        ]
    );
    assert!(!v.has_pending());

    v.clear();
    assert_eq!(v.take_splices(), vec![Splice::remove(0, 2)]);
    v.clear();
    assert!(!v.has_pending());
}

#[test]
fn splice_validation_checks_removed_range() {
    assert_eq!(Splice::insert(5, 2).validate(5), Ok(7));
    assert_eq!(Splice::remove(3, 2).validate(5), Ok(3));
    assert_eq!(Splice::new(1, 3, 1).validate(5), Ok(3));
    assert_eq!(
        Splice::insert(6, 2).validate(5),
        Err(SpliceError::OutOfRange {
            index: 6,
            removed: 0,
            len: 5
        })
    );
    assert_eq!(
        Splice::remove(4, 2).validate(5),
        Err(SpliceError::OutOfRange {
            index: 4,
            removed: 2,
            len: 5
        })
    );
    assert!(Splice::new(usize::MAX, 1, 0).validate(5).is_err());
    assert_eq!(Splice::new(2, 3, 1).delta(), -2);
}

#[test]
fn window_math() {
    let w = WindowState::new(11, 40.0);
    assert_eq!(WindowState::slots_for(400.0, 40.0, 1), 11);
    assert_eq!(WindowState::slots_for(410.0, 40.0, 1), 12);
    assert_eq!(WindowState::slots_for(0.0, 40.0, 1), 1);
    assert_eq!(w.first_for_offset(0.0, 1000), 0);
    assert_eq!(w.first_for_offset(-39.0, 1000), 0);
    assert_eq!(w.first_for_offset(-40.0, 1000), 1);
    assert_eq!(w.first_for_offset(-1.0e9, 1000), 989);
    assert_eq!(w.first_for_offset(-1.0e9, 5), 0);
    assert_eq!(w.scroll_extent(5, 400.0), 0.0);
}
