use std::cmp::Ordering;

/// One sort implementation as seen by the shared test battery.
///
/// `sort` and `sort_by` cover the whole slice. The battery additionally checks range sorts and
/// companion sequences, because every routine in the engine supports both.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts the inclusive range `v[lo..=hi]` and leaves everything else alone.
    fn sort_range<T>(v: &mut [T], lo: usize, hi: usize)
    where
        T: Ord;

    /// Sorts `v` and applies the same permutation to `companion`.
    fn sort_with_companion<T, C>(v: &mut [T], companion: &mut [C])
    where
        T: Ord;

    /// Largest input the battery feeds this implementation. Quadratic sorts override it.
    fn max_len() -> usize {
        usize::MAX
    }
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
