// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The middle of an ordered multiset.
///
/// An odd number of elements has a single middle element; an even number has
/// two, the lower and the upper median. Keeping both lets callers decide how
/// to combine them instead of forcing a numeric average onto every `T`.
///
/// # Examples
///
/// ```
/// use patternkit_core::Median;
///
/// let median = Median::Pair(3, 4);
/// assert_eq!(median.value(), 3.5);
/// assert_eq!(Median::Single(7).value(), 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Median<T> {
    /// Odd element count
    Single(T),
    /// Even element count: `(lower, upper)`
    Pair(T, T),
}

impl<T> Median<T> {
    /// Returns `true` if this is a `Single`.
    pub const fn is_single(&self) -> bool {
        matches!(self, Median::Single(_))
    }

    /// Returns `true` if this is a `Pair`.
    pub const fn is_pair(&self) -> bool {
        matches!(self, Median::Pair(_, _))
    }

    /// The lower median. Equal to [`upper`](Self::upper) for `Single`.
    pub const fn lower(&self) -> &T {
        match self {
            Median::Single(v) | Median::Pair(v, _) => v,
        }
    }

    /// The upper median. Equal to [`lower`](Self::lower) for `Single`.
    pub const fn upper(&self) -> &T {
        match self {
            Median::Single(v) | Median::Pair(_, v) => v,
        }
    }

    /// Converts from `&Median<T>` to `Median<&T>`.
    pub const fn as_ref(&self) -> Median<&T> {
        match self {
            Median::Single(v) => Median::Single(v),
            Median::Pair(lo, hi) => Median::Pair(lo, hi),
        }
    }

    /// Maps a `Median<T>` to `Median<U>` by applying a function to every contained value.
    pub fn map<U, F>(self, mut f: F) -> Median<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Median::Single(v) => Median::Single(f(v)),
            Median::Pair(lo, hi) => Median::Pair(f(lo), f(hi)),
        }
    }
}

impl<T: Clone> Median<&T> {
    /// Maps a `Median<&T>` to a `Median<T>` by cloning the contents.
    #[must_use]
    pub fn cloned(self) -> Median<T> {
        self.map(T::clone)
    }
}

impl<T> Median<T>
where
    T: Copy + Into<f64>,
{
    /// Numeric median: the single value, or the mean of lower and upper.
    ///
    /// Each half is divided before adding so that the sum cannot overflow.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Median::Single(v) => v.into(),
            Median::Pair(lo, hi) => lo.into() / 2.0 + hi.into() / 2.0,
        }
    }
}
