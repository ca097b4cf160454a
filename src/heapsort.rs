//! Classic binary max-heap sort, *O*(*n* \* log(*n*)) worst-case.
//!
//! This is the fallback introsort switches to once its depth budget runs out. It is also
//! usable standalone.

use crate::seq::{Lockstep, Sequence};

sort_entry_points!(sort_lockstep);

/// Sorts `seq[lo..=hi]` using heapsort.
///
/// The heap is rooted at `lo`, the children of `node` are at `lo + 2 * (node - lo) + 1` and
/// the slot after it.
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

    // Build the heap in linear time, starting with the parent of `hi`.
    let last_parent = lo + (hi - lo - 1) / 2;
    for node in (lo..=last_parent).rev() {
        sift_down(seq, lo, hi, node, is_less);
    }

    // Pop maximal elements from the heap.
    for end in ((lo + 1)..=hi).rev() {
        seq.swap(lo, end);
        sift_down(seq, lo, end - 1, lo, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`, over the heap `seq[lo..=hi]`.
fn sift_down<S, C, F>(
    seq: &mut Lockstep<'_, S, C>,
    lo: usize,
    hi: usize,
    mut node: usize,
    is_less: &mut F,
) where
    S: Sequence + ?Sized,
    C: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        // Children of `node`.
        let mut child = lo + 2 * (node - lo) + 1;
        if child > hi {
            break;
        }

        // Choose the greater child.
        if child < hi && is_less(seq.get(child), seq.get(child + 1)) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(seq.get(node), seq.get(child)) {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        seq.swap(node, child);
        node = child;
    }
}
