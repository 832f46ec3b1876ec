use crate::{BoundView, Repeater, Reprojection, Splice};

impl<V, T, P> Repeater<V, T, P>
where
    V: BoundView<T, P>,
    T: Clone,
    P: Clone,
{
    /// Re-synchronizes the window after the collection mutated.
    ///
    /// `items` is the collection *after* the mutation and `splices` the ordered records
    /// describing it. Call it before the next [`Repeater::tick`], which would otherwise pick up
    /// the new length on its own. Every live view is rebound from the current `first` (a full
    /// reprojection of the window, not a per-splice diff), views past the end are hidden and the
    /// scroll extent is recomputed.
    ///
    /// The batch is replayed from the previous length. Records that start or remove past the
    /// collection at their point in the batch are skipped and counted in
    /// [`Reprojection::rejected`]; the reprojection itself always runs.
    pub fn handle_splices(&mut self, items: &[T], splices: &[Splice]) -> Reprojection {
        let len = items.len();
        let mut replayed = self.len();
        let mut rejected = 0usize;
        for splice in splices {
            match splice.validate(replayed) {
                Ok(next) => replayed = next,
                Err(_) => {
                    rwarn!(
                        index = splice.index,
                        removed = splice.removed,
                        added = splice.added,
                        len = replayed,
                        "rejecting out-of-range splice record"
                    );
                    rejected += 1;
                }
            }
        }
        if replayed != len {
            rwarn!(
                replayed,
                actual = len,
                "splice records do not add up to the collection length"
            );
        }

        rdebug!(
            splices = splices.len(),
            rejected,
            old_len = self.len(),
            new_len = len,
            "handle_splices"
        );
        let mut report = self.reproject(items);
        report.rejected = rejected;
        report
    }
}
