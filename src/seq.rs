//! Element access shared by every sort routine.
//!
//! The algorithms never touch a container directly. They read through [`Sequence::get`] and
//! permute through [`Lockstep`], which mirrors every permutation onto an optional companion
//! sequence at identical indices.

use std::collections::VecDeque;

/// Index addressable storage that can be permuted in place.
///
/// Indices are not validated beyond what the underlying container does on its own. Passing an
/// out-of-range index panics the same way indexing the container would.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, i: usize) -> &Self::Item;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Moves the element at `src` down to `dst` and shifts `dst..src` one slot to the right.
    ///
    /// Requires `dst <= src`.
    fn shift_right(&mut self, dst: usize, src: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self[i]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }

    #[inline]
    fn shift_right(&mut self, dst: usize, src: usize) {
        self[dst..=src].rotate_right(1);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self[i]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    #[inline]
    fn shift_right(&mut self, dst: usize, src: usize) {
        self[dst..=src].rotate_right(1);
    }
}

// Lists. The ring buffer is not contiguous in general, so shifting walks the gap down one
// slot at a time.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self[i]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }

    fn shift_right(&mut self, dst: usize, src: usize) {
        debug_assert!(dst <= src);

        for k in (dst..src).rev() {
            VecDeque::swap(self, k, k + 1);
        }
    }
}

/// A primary sequence together with an optional companion that is permuted in lockstep.
///
/// Every [`swap`](Lockstep::swap) and [`shift_right`](Lockstep::shift_right) applied to the
/// primary is applied to the companion with the same indices, so the value paired with an
/// element travels with it no matter how far the element moves.
pub(crate) struct Lockstep<'a, S: ?Sized, C: ?Sized> {
    primary: &'a mut S,
    companion: Option<&'a mut C>,
}

impl<'a, S> Lockstep<'a, S, [()]>
where
    S: Sequence + ?Sized,
{
    #[inline]
    pub(crate) fn alone(primary: &'a mut S) -> Self {
        Self {
            primary,
            companion: None,
        }
    }
}

impl<'a, S, C> Lockstep<'a, S, C>
where
    S: Sequence + ?Sized,
    C: Sequence + ?Sized,
{
    /// The companion must be exactly as long as the primary. That is only checked in debug
    /// builds, a shorter companion otherwise panics on the first out-of-range swap.
    #[inline]
    pub(crate) fn new(primary: &'a mut S, companion: Option<&'a mut C>) -> Self {
        if let Some(companion) = companion.as_deref() {
            debug_assert_eq!(
                companion.len(),
                primary.len(),
                "companion length must match the primary sequence"
            );
        }

        Self { primary, companion }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.primary.len()
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> &S::Item {
        self.primary.get(i)
    }

    #[inline]
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.primary.swap(i, j);
        if let Some(companion) = self.companion.as_deref_mut() {
            companion.swap(i, j);
        }
    }

    #[inline]
    pub(crate) fn shift_right(&mut self, dst: usize, src: usize) {
        self.primary.shift_right(dst, src);
        if let Some(companion) = self.companion.as_deref_mut() {
            companion.shift_right(dst, src);
        }
    }
}
