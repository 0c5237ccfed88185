//! Membership degrees.
//!
//! A membership degree measures how strongly a crisp value belongs to a fuzzy set.
//! Type-1 fuzzy sets produce a single number, interval type-2 fuzzy sets produce an
//! [`Interval`] of numbers. Evaluating a set over a vector of inputs produces a
//! sequence of such values, aligned with the inputs.

use std::fmt::{Display, Formatter};

use crate::error::{FuzzyError, Result};

/// Closed interval `[lower, upper]` of membership degrees.
///
/// # Invariants
///
/// - `lower <= upper`, checked by [`Interval::new`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates an interval, failing with [`FuzzyError::InvalidInterval`] if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower > upper {
            return Err(FuzzyError::InvalidInterval { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Degenerate interval `[value, value]`.
    pub const fn point(value: f64) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    // Bounds computed by monotone operators are ordered by construction.
    pub(crate) const fn new_unchecked(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub const fn lower(self) -> f64 {
        self.lower
    }

    pub const fn upper(self) -> f64 {
        self.upper
    }

    pub fn width(self) -> f64 {
        self.upper - self.lower
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Membership degree of one or many crisp values.
#[derive(Debug, Clone, PartialEq)]
pub enum MembershipDegree {
    /// Type-1 degree of a single value.
    Scalar(f64),
    /// Interval type-2 degree of a single value.
    Interval(Interval),
    /// Type-1 degrees of a vector of values.
    Scalars(Vec<f64>),
    /// Interval type-2 degrees of a vector of values.
    Intervals(Vec<Interval>),
}

impl MembershipDegree {
    /// Size of the first dimension: 1 for a single degree, the length for a sequence.
    pub fn size(&self) -> usize {
        match self {
            MembershipDegree::Scalar(_) | MembershipDegree::Interval(_) => 1,
            MembershipDegree::Scalars(values) => values.len(),
            MembershipDegree::Intervals(values) => values.len(),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            MembershipDegree::Scalars(_) | MembershipDegree::Intervals(_)
        )
    }

    pub fn is_interval(&self) -> bool {
        matches!(
            self,
            MembershipDegree::Interval(_) | MembershipDegree::Intervals(_)
        )
    }

    /// Human-readable name of the degree family.
    pub fn kind(&self) -> &'static str {
        if self.is_interval() {
            "interval type-2"
        } else {
            "type-1"
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            MembershipDegree::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_interval(&self) -> Option<Interval> {
        match self {
            MembershipDegree::Interval(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_scalars(&self) -> Option<&[f64]> {
        match self {
            MembershipDegree::Scalars(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_intervals(&self) -> Option<&[Interval]> {
        match self {
            MembershipDegree::Intervals(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the degree at `index` of a sequence.
    ///
    /// A single degree is its own element 0.
    pub fn at(&self, index: usize) -> Option<MembershipDegree> {
        match self {
            MembershipDegree::Scalar(_) | MembershipDegree::Interval(_) => {
                (index == 0).then(|| self.clone())
            }
            MembershipDegree::Scalars(values) => {
                values.get(index).copied().map(MembershipDegree::Scalar)
            }
            MembershipDegree::Intervals(values) => {
                values.get(index).copied().map(MembershipDegree::Interval)
            }
        }
    }

    /// Splits interval degrees into aligned `(lower, upper)` rows.
    ///
    /// Returns `None` for type-1 degrees.
    pub fn rows(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        match self {
            MembershipDegree::Interval(value) => Some((vec![value.lower], vec![value.upper])),
            MembershipDegree::Intervals(values) => Some((
                values.iter().map(|v| v.lower).collect(),
                values.iter().map(|v| v.upper).collect(),
            )),
            _ => None,
        }
    }

    /// Degree at `index` viewed as an interval; single degrees broadcast.
    ///
    /// For sequences, `index` must be in bounds.
    pub(crate) fn point(&self, index: usize) -> Interval {
        match self {
            MembershipDegree::Scalar(value) => Interval::point(*value),
            MembershipDegree::Interval(value) => *value,
            MembershipDegree::Scalars(values) => Interval::point(values[index]),
            MembershipDegree::Intervals(values) => values[index],
        }
    }

    pub(crate) fn single(point: Interval, interval: bool) -> Self {
        if interval {
            MembershipDegree::Interval(point)
        } else {
            MembershipDegree::Scalar(point.lower)
        }
    }

    fn collect_points(points: impl Iterator<Item = Interval>, interval: bool) -> Self {
        if interval {
            MembershipDegree::Intervals(points.collect())
        } else {
            MembershipDegree::Scalars(points.map(|p| p.lower).collect())
        }
    }

    /// Picks the degrees at `indices` into a new sequence of the same family.
    ///
    /// Indices must be in bounds for sequences; a single degree is repeated.
    pub(crate) fn select(&self, indices: &[usize]) -> Self {
        Self::collect_points(indices.iter().map(|&i| self.point(i)), self.is_interval())
    }

    /// Applies `f` to every degree, keeping the shape.
    pub(crate) fn map(&self, f: impl Fn(Interval) -> Interval) -> Self {
        let interval = self.is_interval();
        if self.is_sequence() {
            Self::collect_points((0..self.size()).map(|i| f(self.point(i))), interval)
        } else {
            Self::single(f(self.point(0)), interval)
        }
    }

    /// Combines two degrees elementwise.
    ///
    /// Sizes must already be validated: single degrees broadcast, sequences are
    /// of equal size. The result is a sequence if either side is, and an interval
    /// if either side is.
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(Interval, Interval) -> Interval) -> Self {
        let interval = self.is_interval() || other.is_interval();
        if self.is_sequence() || other.is_sequence() {
            let size = self.size().max(other.size());
            Self::collect_points((0..size).map(|i| f(self.point(i), other.point(i))), interval)
        } else {
            Self::single(f(self.point(0), other.point(0)), interval)
        }
    }
}

impl From<f64> for MembershipDegree {
    fn from(value: f64) -> Self {
        MembershipDegree::Scalar(value)
    }
}

impl From<Interval> for MembershipDegree {
    fn from(value: Interval) -> Self {
        MembershipDegree::Interval(value)
    }
}

impl From<Vec<f64>> for MembershipDegree {
    fn from(values: Vec<f64>) -> Self {
        MembershipDegree::Scalars(values)
    }
}

impl From<&[f64]> for MembershipDegree {
    fn from(values: &[f64]) -> Self {
        MembershipDegree::Scalars(values.to_vec())
    }
}

impl From<Vec<Interval>> for MembershipDegree {
    fn from(values: Vec<Interval>) -> Self {
        MembershipDegree::Intervals(values)
    }
}

impl Display for MembershipDegree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipDegree::Scalar(value) => write!(f, "{}", value),
            MembershipDegree::Interval(value) => write!(f, "{}", value),
            MembershipDegree::Scalars(values) => {
                let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            MembershipDegree::Intervals(values) => {
                let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_interval_rejects_inverted_bounds() {
        assert!(Interval::new(0.2, 0.4).is_ok());
        assert!(Interval::new(0.4, 0.4).is_ok());
        assert_eq!(
            Interval::new(0.5, 0.4),
            Err(FuzzyError::InvalidInterval {
                lower: 0.5,
                upper: 0.4
            })
        );
    }

    #[test]
    fn test_size() {
        assert_eq!(MembershipDegree::from(0.3).size(), 1);
        assert_eq!(MembershipDegree::from(Interval::point(0.3)).size(), 1);
        assert_eq!(MembershipDegree::from(vec![0.1, 0.2, 0.3]).size(), 3);
        assert!(!MembershipDegree::from(0.3).is_sequence());
        assert!(MembershipDegree::from(vec![0.1]).is_sequence());
    }

    #[test]
    fn test_at() {
        let degrees = MembershipDegree::from(vec![0.1, 0.2, 0.3]);
        assert_eq!(degrees.at(1), Some(MembershipDegree::Scalar(0.2)));
        assert_eq!(degrees.at(3), None);

        let single = MembershipDegree::from(0.7);
        assert_eq!(single.at(0), Some(MembershipDegree::Scalar(0.7)));
        assert_eq!(single.at(1), None);
    }

    #[test]
    fn test_select() {
        let degrees = MembershipDegree::from(vec![0.1, 0.2, 0.3]);
        assert_eq!(
            degrees.select(&[2, 0, 2]),
            MembershipDegree::Scalars(vec![0.3, 0.1, 0.3])
        );
    }

    #[test]
    fn test_rows() {
        let degrees = MembershipDegree::from(vec![
            Interval::new(0.1, 0.3).unwrap(),
            Interval::new(0.2, 0.5).unwrap(),
        ]);
        let (lower, upper) = degrees.rows().unwrap();
        assert_eq!(lower, vec![0.1, 0.2]);
        assert_eq!(upper, vec![0.3, 0.5]);
        assert_eq!(MembershipDegree::from(0.5).rows(), None);
    }

    #[test]
    fn test_zip_with_broadcasts_single() {
        let a = MembershipDegree::from(0.5);
        let b = MembershipDegree::from(vec![0.1, 0.9]);
        let res = a.zip_with(&b, |x, y| {
            Interval::new_unchecked(x.lower().min(y.lower()), x.upper().min(y.upper()))
        });
        assert_eq!(res, MembershipDegree::Scalars(vec![0.1, 0.5]));
    }

    #[test]
    fn test_zip_with_promotes_to_interval() {
        let a = MembershipDegree::from(0.5);
        let b = MembershipDegree::from(Interval::new(0.2, 0.8).unwrap());
        let res = a.zip_with(&b, |x, y| {
            Interval::new_unchecked(x.lower().min(y.lower()), x.upper().min(y.upper()))
        });
        assert_eq!(
            res,
            MembershipDegree::Interval(Interval::new(0.2, 0.5).unwrap())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MembershipDegree::from(0.5).to_string(), "0.5");
        assert_eq!(
            MembershipDegree::from(Interval::new(0.25, 0.5).unwrap()).to_string(),
            "[0.25, 0.5]"
        );
        assert_eq!(
            MembershipDegree::from(vec![0.25, 0.5]).to_string(),
            "[0.25, 0.5]"
        );
    }
}
