//! In-place sort routines used on the hot paths of the database: ordering query result
//! sequences, ordering node references into document order and preparing key/pointer batches
//! before an index flush.
//!
//! Every algorithm module exposes the same entry points, all working on the inclusive range
//! `lo..=hi` of a [`Sequence`]:
//!
//! - `sort` natural order
//! - `sort_with_companion` natural order, permuting a companion sequence identically
//! - `sort_by` comparator order
//! - `sort_by_with_companion` comparator order with a companion
//! - `sort_by_structural_key` document order of the embedded [`NodeId`]
//! - `sort_all` natural order over the whole sequence
//!
//! [`introsort`] is the one to use. [`heapsort`], [`hsort`] and [`insertion`] are the building
//! blocks and remain usable on their own.
//!
//! None of the routines are stable. None of them validate their input: a range outside the
//! sequence panics like indexing it would, and a comparator that is not a total order leaves the
//! range in an unspecified order (but still a permutation of the input).

macro_rules! sort_entry_points {
    ($sort_lockstep:path) => {
        /// Sorts `v[lo..=hi]` in natural order.
        #[inline]
        pub fn sort<S>(v: &mut S, lo: usize, hi: usize)
        where
            S: $crate::Sequence + ?Sized,
            S::Item: Ord,
        {
            let mut seq = $crate::seq::Lockstep::alone(v);
            $sort_lockstep(&mut seq, lo, hi, &mut |a: &S::Item, b: &S::Item| a.lt(b));
        }

        /// Sorts `v[lo..=hi]` in natural order and applies every permutation to `companion` as
        /// well. `companion` must be as long as `v`.
        #[inline]
        pub fn sort_with_companion<S, C>(v: &mut S, lo: usize, hi: usize, companion: &mut C)
        where
            S: $crate::Sequence + ?Sized,
            S::Item: Ord,
            C: $crate::Sequence + ?Sized,
        {
            let mut seq = $crate::seq::Lockstep::new(v, Some(companion));
            $sort_lockstep(&mut seq, lo, hi, &mut |a: &S::Item, b: &S::Item| a.lt(b));
        }

        /// Sorts `v[lo..=hi]` with a comparator that must implement a total order.
        #[inline]
        pub fn sort_by<S, F>(v: &mut S, mut compare: F, lo: usize, hi: usize)
        where
            S: $crate::Sequence + ?Sized,
            F: FnMut(&S::Item, &S::Item) -> std::cmp::Ordering,
        {
            let mut seq = $crate::seq::Lockstep::alone(v);
            $sort_lockstep(&mut seq, lo, hi, &mut |a: &S::Item, b: &S::Item| {
                compare(a, b) == std::cmp::Ordering::Less
            });
        }

        /// Sorts `v[lo..=hi]` with a comparator and applies every permutation to `companion`.
        #[inline]
        pub fn sort_by_with_companion<S, C, F>(
            v: &mut S,
            mut compare: F,
            lo: usize,
            hi: usize,
            companion: &mut C,
        ) where
            S: $crate::Sequence + ?Sized,
            C: $crate::Sequence + ?Sized,
            F: FnMut(&S::Item, &S::Item) -> std::cmp::Ordering,
        {
            let mut seq = $crate::seq::Lockstep::new(v, Some(companion));
            $sort_lockstep(&mut seq, lo, hi, &mut |a: &S::Item, b: &S::Item| {
                compare(a, b) == std::cmp::Ordering::Less
            });
        }

        /// Sorts `v[lo..=hi]` into document order of the elements' [`NodeId`](crate::NodeId),
        /// ignoring whatever natural order the elements have.
        #[inline]
        pub fn sort_by_structural_key<S>(v: &mut S, lo: usize, hi: usize)
        where
            S: $crate::Sequence + ?Sized,
            S::Item: $crate::StructuralKey,
        {
            use $crate::StructuralKey;

            let mut seq = $crate::seq::Lockstep::alone(v);
            $sort_lockstep(&mut seq, lo, hi, &mut |a: &S::Item, b: &S::Item| {
                a.node_id() < b.node_id()
            });
        }

        /// Sorts all of `v` in natural order.
        #[inline]
        pub fn sort_all<S>(v: &mut S)
        where
            S: $crate::Sequence + ?Sized,
            S::Item: Ord,
        {
            let len = v.len();
            if len >= 2 {
                sort(v, 0, len - 1);
            }
        }
    };
}

mod seq;

pub mod heapsort;
pub mod hsort;
pub mod insertion;
pub mod introsort;
pub mod node_id;

pub use node_id::{DocumentId, NodeId, NodeRef, ParseNodeIdError, StructuralKey};
pub use seq::Sequence;
