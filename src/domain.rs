//! Integer domains.
//!
//! A [`Domain`] is a set of integers stored as sorted, disjoint, non-adjacent
//! closed intervals. The intervals are exposed as flat *breakpoints*
//! `[lo0, hi0, lo1, hi1, ...]`, so the first breakpoint is the minimum and
//! the last one is the maximum.

use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Domain {
    intervals: Vec<(i64, i64)>,
}

impl Domain {
    /// Creates the interval domain `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "Empty domain [{}, {}]", min, max);
        Self {
            intervals: vec![(min, max)],
        }
    }

    /// Creates the singleton domain `{value}`.
    pub fn constant(value: i64) -> Self {
        Self::new(value, value)
    }

    /// Creates the empty domain.
    pub fn empty() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates the domain containing exactly the given values.
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        Self::from_intervals(values.into_iter().map(|v| (v, v)))
    }

    /// Creates the union of the given closed intervals.
    ///
    /// Intervals with `lo > hi` are ignored.
    pub fn from_intervals(intervals: impl IntoIterator<Item = (i64, i64)>) -> Self {
        let mut intervals: Vec<(i64, i64)> = intervals
            .into_iter()
            .filter(|(lo, hi)| lo <= hi)
            .collect();
        intervals.sort_unstable();

        let mut merged: Vec<(i64, i64)> = Vec::with_capacity(intervals.len());
        for (lo, hi) in intervals {
            match merged.last_mut() {
                // Overlapping or adjacent: extend the last interval.
                Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        Self { intervals: merged }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Smallest value of the domain.
    ///
    /// # Panics
    ///
    /// Panics if the domain is empty.
    pub fn min(&self) -> i64 {
        match self.intervals.first() {
            Some(&(lo, _)) => lo,
            None => panic!("Empty domain has no minimum"),
        }
    }

    /// Largest value of the domain.
    ///
    /// # Panics
    ///
    /// Panics if the domain is empty.
    pub fn max(&self) -> i64 {
        match self.intervals.last() {
            Some(&(_, hi)) => hi,
            None => panic!("Empty domain has no maximum"),
        }
    }

    /// Checks whether the domain is a single value.
    pub fn is_fixed(&self) -> bool {
        self.intervals.len() == 1 && self.intervals[0].0 == self.intervals[0].1
    }

    pub fn contains(&self, value: i64) -> bool {
        // Index of the first interval whose upper end is >= value.
        let i = self.intervals.partition_point(|&(_, hi)| hi < value);
        i < self.intervals.len() && self.intervals[i].0 <= value
    }

    /// Checks whether the domain shares at least one value with `[min, max]`.
    pub fn intersects_range(&self, min: i64, max: i64) -> bool {
        self.intervals.iter().any(|&(lo, hi)| lo <= max && min <= hi)
    }

    /// Checks whether the two domains share at least one value.
    pub fn intersects(&self, other: &Domain) -> bool {
        self.intervals
            .iter()
            .any(|&(lo, hi)| other.intersects_range(lo, hi))
    }

    /// Checks whether every value of the domain lies in `other`.
    pub fn is_subset(&self, other: &Domain) -> bool {
        self.intervals.iter().all(|&(lo, hi)| {
            // Intervals are merged, so `[lo, hi]` must fit inside a single one.
            let i = other.intervals.partition_point(|&(start, _)| start <= lo);
            i > 0 && other.intervals[i - 1].1 >= hi
        })
    }

    /// Complement with respect to the full `i64` range.
    pub fn complement(&self) -> Self {
        let mut result = Vec::with_capacity(self.intervals.len() + 1);
        let mut next = Some(i64::MIN);
        for &(lo, hi) in &self.intervals {
            if let Some(start) = next {
                if start < lo {
                    result.push((start, lo - 1));
                }
            }
            next = hi.checked_add(1);
        }
        if let Some(start) = next {
            result.push((start, i64::MAX));
        }
        Self { intervals: result }
    }

    /// Image of the domain under `x -> 1 - x`.
    ///
    /// This is the domain of a negated boolean handle.
    pub fn negate_boolean(&self) -> Self {
        Self::from_intervals(self.intervals.iter().map(|&(lo, hi)| (1 - hi, 1 - lo)))
    }

    /// Number of values in the domain.
    pub fn size(&self) -> u128 {
        self.intervals
            .iter()
            .map(|&(lo, hi)| (hi as i128 - lo as i128 + 1) as u128)
            .sum()
    }

    /// Iterates over all values in increasing order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.intervals.iter().flat_map(|&(lo, hi)| lo..=hi)
    }

    pub fn intervals(&self) -> &[(i64, i64)] {
        &self.intervals
    }

    /// Flat list of interval bounds: `[lo0, hi0, lo1, hi1, ...]`.
    pub fn breakpoints(&self) -> Vec<i64> {
        self.intervals.iter().flat_map(|&(lo, hi)| [lo, hi]).collect()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, &(lo, hi)) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if lo == hi {
                write!(f, "{}", lo)?;
            } else {
                write!(f, "{}..{}", lo, hi)?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let d = Domain::new(-3, 4);
        assert_eq!(d.min(), -3);
        assert_eq!(d.max(), 4);
        assert_eq!(d.size(), 8);
        assert!(!d.is_fixed());
        assert!(d.contains(0));
        assert!(!d.contains(5));
        assert_eq!(d.breakpoints(), vec![-3, 4]);
    }

    #[test]
    #[should_panic(expected = "Empty domain")]
    fn test_inverted_bounds_panic() {
        Domain::new(5, 3);
    }

    #[test]
    #[should_panic(expected = "Empty domain has no minimum")]
    fn test_empty_min_panics() {
        Domain::empty().min();
    }

    #[test]
    fn test_from_values_merges() {
        let d = Domain::from_values([7, 1, 3, 2, 7, 9]);
        assert_eq!(d.intervals(), &[(1, 3), (7, 7), (9, 9)]);
        assert_eq!(d.breakpoints(), vec![1, 3, 7, 7, 9, 9]);
        assert_eq!(d.min(), 1);
        assert_eq!(d.max(), 9);
        assert_eq!(d.size(), 5);
        assert!(d.contains(2));
        assert!(!d.contains(4));
        assert!(!d.contains(8));
        assert_eq!(d.values().collect::<Vec<_>>(), vec![1, 2, 3, 7, 9]);
        assert_eq!(d.to_string(), "{1..3, 7, 9}");
    }

    #[test]
    fn test_complement() {
        let d = Domain::from_values([1, 2, 5]);
        let c = d.complement();
        assert_eq!(c.intervals(), &[(i64::MIN, 0), (3, 4), (6, i64::MAX)]);
        assert!(!c.contains(1));
        assert!(c.contains(4));
        assert_eq!(c.complement(), d);

        let full = Domain::new(i64::MIN, i64::MAX);
        assert!(full.complement().is_empty());
        assert_eq!(Domain::empty().complement(), full);
    }

    #[test]
    fn test_negate_boolean() {
        assert_eq!(Domain::new(0, 1).negate_boolean(), Domain::new(0, 1));
        assert_eq!(Domain::constant(1).negate_boolean(), Domain::constant(0));
        assert_eq!(Domain::constant(0).negate_boolean(), Domain::constant(1));
    }

    #[test]
    fn test_intersects_range() {
        let d = Domain::from_values([1, 10]);
        assert!(d.intersects_range(0, 1));
        assert!(!d.intersects_range(2, 9));
        assert!(d.intersects_range(10, 20));
    }

    #[test]
    fn test_intersects_and_subset() {
        let d = Domain::from_values([1, 5]);
        assert!(d.intersects(&Domain::new(5, 9)));
        assert!(!d.intersects(&Domain::new(2, 4)));
        assert!(!d.intersects(&Domain::empty()));

        assert!(d.is_subset(&Domain::from_values([1, 3, 5])));
        assert!(d.is_subset(&Domain::new(0, 9)));
        assert!(!d.is_subset(&Domain::new(2, 9)));
        assert!(Domain::new(3, 6).is_subset(&Domain::from_intervals([(0, 4), (5, 8)])));
        assert!(!Domain::new(3, 6).is_subset(&Domain::from_intervals([(0, 4), (6, 8)])));
        assert!(Domain::empty().is_subset(&d));
    }
}
