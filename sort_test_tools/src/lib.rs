pub trait Sort {
    /// Display name of the implementation. By convention it ends in
    /// `_stable` or `_unstable`; the stability tests skip `_unstable` impls.
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
