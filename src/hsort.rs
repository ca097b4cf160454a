//! Heapsort with Floyd's bottom-up sift-down and lazy verification.
//!
//! Externally this behaves exactly like [`heapsort`](crate::heapsort), but it spends
//! noticeably fewer comparisons, which matters when the comparison is not a plain integer
//! compare, e.g. [`NodeId`](crate::NodeId) keys.
//!
//! # Sift-down
//!
//! The classic sift-down compares the floating value against both children on every level,
//! two comparisons per level. Most floating values however end up close to the bottom of the
//! heap: during the sort-down phase the floating value is the former last leaf. So instead:
//!
//! 1. Descend along the path of greater children without looking at the floating value at all,
//!    promoting every child one level up. One comparison per level.
//! 2. Every now and then peek: if the element just promoted is not greater than the floating
//!    value, the floating value belongs above it and the descent has gone too far. Stop.
//!    Peeks are scheduled by halving the distance to the expected leaf level (`drop`), so a
//!    value that does sink to the bottom costs only *O*(log log *n*) extra comparisons.
//! 3. Bubble the floating value up from wherever the descent stopped. This is at most a short
//!    corrective pass, bounded by the distance to the previous peek.
//!
//! Elements are only ever exchanged, never held aside, so the floating value is carried down
//! by a swap per level and a failed peek costs one swap back. This saves comparisons, not
//! writes: hsort usually does more swaps than [`heapsort`](crate::heapsort). Two-element ranges
//! skip the heap entirely and cost at most one comparison and one swap.

use crate::seq::{Lockstep, Sequence};

sort_entry_points!(sort_lockstep);

/// Sorts `seq[lo..=hi]`.
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

    let len = hi - lo + 1;
    if len == 2 {
        if is_less(seq.get(hi), seq.get(lo)) {
            seq.swap(lo, hi);
        }
        return;
    }

    let mut heap = Heap {
        seq,
        base: lo,
        is_less,
    };

    // Build phase. The candidate roots run downward from the parent of the last element, which
    // is `(hi + lo - 1) / 2` in absolute terms. `drop` is the number of levels below the
    // current root; it grows by one every time the root moves up a level.
    let mut root = (len - 2) / 2;
    let mut drop = len.ilog2() - (root + 1).ilog2();
    let mut level_start = (1 << (root + 1).ilog2()) - 1;

    loop {
        heap.sift_down(len, root, drop);

        if root == 0 {
            break;
        }

        if root == level_start {
            drop += 1;
            level_start = (level_start - 1) / 2;
        }

        root -= 1;
    }

    // Sort-down phase. The former last leaf becomes the floating value at the root.
    for end in (1..len).rev() {
        heap.swap(0, end);

        if end >= 2 {
            heap.sift_down(end, 0, end.ilog2());
        }
    }
}

// View of `seq[base..]` as a 0-based heap, the children of `k` are `2k + 1` and `2k + 2`.
struct Heap<'s, 'a, S: ?Sized, C: ?Sized, F> {
    seq: &'s mut Lockstep<'a, S, C>,
    base: usize,
    is_less: &'s mut F,
}

impl<S, C, F> Heap<'_, '_, S, C, F>
where
    S: Sequence + ?Sized,
    C: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    #[inline]
    fn less(&mut self, a: usize, b: usize) -> bool {
        (self.is_less)(self.seq.get(self.base + a), self.seq.get(self.base + b))
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.seq.swap(self.base + a, self.base + b);
    }

    /// Re-establishes the heap property for the subtree at `vacant` in a heap of `len`
    /// elements, where everything below `vacant` already is a heap and the element at
    /// `vacant` is the floating value. `drop` is the number of levels below `vacant`.
    ///
    /// The floating value is carried down by swapping it with the promoted child, so it always
    /// sits at `vacant`.
    fn sift_down(&mut self, len: usize, vacant: usize, drop: u32) {
        let root = vacant;
        let mut vacant = vacant;
        let mut count = 0;
        let mut next_peek = (drop + 1) / 2;

        loop {
            let mut child = 2 * vacant + 1;
            if child >= len {
                break;
            }

            if child + 1 < len && self.less(child, child + 1) {
                child += 1;
            }

            self.swap(vacant, child);
            vacant = child;
            count += 1;

            if count >= next_peek {
                let parent = (vacant - 1) / 2;

                if !self.less(vacant, parent) {
                    // The promoted element is not greater than the floating value. Undo the
                    // last step, its children are not greater than it either.
                    self.swap(parent, vacant);
                    vacant = parent;
                    break;
                }

                next_peek = count + (drop.saturating_sub(count) + 1) / 2;
            }
        }

        while vacant > root {
            let parent = (vacant - 1) / 2;
            if !self.less(parent, vacant) {
                break;
            }

            self.swap(parent, vacant);
            vacant = parent;
        }
    }
}
