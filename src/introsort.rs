//! Introspective sort: quicksort with a depth budget, heapsort once the budget is spent and a
//! single insertion sort pass at the end.
//!
//! This is the primary entry point of the crate. *O*(*n* \* log(*n*)) worst-case, in-place,
//! and the only memory used beyond the input is *O*(log(*n*)) recursion frames.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::seq::{Lockstep, Sequence};
use crate::{heapsort, insertion};

/// Partitions spanning at most this many positions beyond their first one are left alone by
/// the quicksort loop and only handled by the final insertion sort pass.
pub const INSERTION_THRESHOLD: usize = 10;

sort_entry_points!(sort_lockstep);

/// What a single introsort call did, see [`sort_by_with_report`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// `2 * floor(log2(len))`, computed once from the full range.
    pub depth_budget: u32,
    /// Largest number of nested partitioning steps taken on any path, counted independently
    /// of the budget. Never exceeds `depth_budget`, and reaches it on every path that ended in
    /// a heapsort fallback.
    pub max_depth_used: u32,
    /// Number of partitions handed to heapsort because the budget ran out.
    pub heapsort_fallbacks: u32,
}

/// Like [`sort_by`] but reports how the depth budget was spent.
pub fn sort_by_with_report<S, F>(v: &mut S, mut compare: F, lo: usize, hi: usize) -> Report
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut seq = Lockstep::alone(v);
    sort_lockstep(&mut seq, lo, hi, &mut |a: &S::Item, b: &S::Item| {
        compare(a, b) == Ordering::Less
    })
}

pub(crate) fn sort_lockstep<S, C, F>(
    seq: &mut Lockstep<'_, S, C>,
    lo: usize,
    hi: usize,
    is_less: &mut F,
) -> Report
where
    S: Sequence + ?Sized,
    C: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut report = Report::default();

    if lo >= hi {
        return report;
    }
    debug_assert!(hi < seq.len(), "range end {hi} out of bounds");

    // Limit the number of nested partitions to `2 * floor(log2(len))`. The budget is computed
    // once and every recursive call carries what is left of it on its own path.
    let len = hi - lo + 1;
    report.depth_budget = 2 * len.ilog2();
    trace!(lo, hi, depth_budget = report.depth_budget, "introsort");

    quicksort(seq, lo, hi, report.depth_budget, 0, is_less, &mut report);

    // Every partition the loop left unsorted spans at most `INSERTION_THRESHOLD + 1` elements
    // and is in its final place relative to everything else, so a single pass is cheap.
    insertion::sort_lockstep(seq, lo, hi, is_less);

    report
}

/// Sorts `seq[l..=r]` down to partitions of at most `INSERTION_THRESHOLD + 1` elements.
///
/// `limit` is the number of partitioning steps still allowed on this path. If it reaches zero
/// the remaining range goes to heapsort. `depth` is the number of partitioning steps already
/// taken on this path and only feeds the report.
fn quicksort<S, C, F>(
    seq: &mut Lockstep<'_, S, C>,
    mut l: usize,
    r: usize,
    mut limit: u32,
    mut depth: u32,
    is_less: &mut F,
    report: &mut Report,
) where
    S: Sequence + ?Sized,
    C: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while r - l > INSERTION_THRESHOLD {
        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            debug!(l, r, len = r - l + 1, "depth budget exhausted, falling back to heapsort");
            report.heapsort_fallbacks += 1;
            heapsort::sort_lockstep(seq, l, r, is_less);
            return;
        }

        limit -= 1;
        depth += 1;
        report.max_depth_used = report.max_depth_used.max(depth);

        let (i, j) = partition(seq, l, r, is_less);

        // Recurse into the left side, continue with the right side.
        if l < j {
            quicksort(seq, l, j, limit, depth, is_less, report);
        }

        if i >= r {
            break;
        }

        l = i;
    }
}

/// Hoare partition of `seq[l..=r]` around the median of `seq[l]`, `seq[mid]` and `seq[r]`.
///
/// Returns the crossed cursors `(i, j)`: `seq[l..=j]` are not greater than the pivot and
/// `seq[i..=r]` are not less than it.
fn partition<S, C, F>(
    seq: &mut Lockstep<'_, S, C>,
    l: usize,
    r: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    S: Sequence + ?Sized,
    C: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mid = l + (r - l) / 2;

    // Order the three samples so that `seq[l] <= seq[mid] <= seq[r]`. The outer two then act
    // as sentinels for the scans below.
    if is_less(seq.get(mid), seq.get(l)) {
        seq.swap(l, mid);
    }
    if is_less(seq.get(r), seq.get(l)) {
        seq.swap(l, r);
    }
    if is_less(seq.get(r), seq.get(mid)) {
        seq.swap(mid, r);
    }

    // The pivot is the value sampled at `mid`. Its position is tracked across swaps so it keeps
    // referring to that same value, which spares a `Clone` bound.
    let mut pivot = mid;
    let mut i = l + 1;
    let mut j = r - 1;

    loop {
        while is_less(seq.get(i), seq.get(pivot)) {
            i += 1;
        }
        while is_less(seq.get(pivot), seq.get(j)) {
            j -= 1;
        }

        if i <= j {
            seq.swap(i, j);

            if pivot == i {
                pivot = j;
            } else if pivot == j {
                pivot = i;
            }

            i += 1;
            j -= 1;
        }

        if i > j {
            break;
        }
    }

    (i, j)
}
