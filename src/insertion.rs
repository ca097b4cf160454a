//! Insertion sort over an inclusive range.
//!
//! *O*(*n*) on sorted input, *O*(*n*²) worst-case. Introsort only ever hands it ranges that are
//! already nearly sorted.

use crate::seq::{Lockstep, Sequence};

sort_entry_points!(sort_lockstep);

/// Sorts `seq[lo..=hi]`. For every `i` the elements before it that are greater than `seq[i]`
/// are shifted one slot to the right and `seq[i]` is dropped into the gap. The companion
/// replays the same shift.
pub(crate) fn sort_lockstep<S, C, F>(
    seq: &mut Lockstep<'_, S, C>,
    lo: usize,
    hi: usize,
    is_less: &mut F,
) where
    S: Sequence + ?Sized,
    C: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if lo >= hi {
        return;
    }
    debug_assert!(hi < seq.len(), "range end {hi} out of bounds");

    for i in (lo + 1)..=hi {
        // `seq[i]` stays in place while the insertion slot is searched, so it can be compared
        // by reference.
        let mut dst = i;
        while dst > lo && is_less(seq.get(i), seq.get(dst - 1)) {
            dst -= 1;
        }

        if dst != i {
            seq.shift_right(dst, i);
        }
    }
}
