//! Fuzzy sets.

use std::fmt::Debug;

use log::trace;

use crate::degree::{Interval, MembershipDegree};
use crate::error::Result;
use crate::membership::MembershipFunction;

/// A fuzzy set evaluates crisp values to membership degrees.
pub trait FuzzySet: Debug + Send + Sync {
    /// Membership degree of a single value.
    fn membership(&self, x: f64) -> Result<MembershipDegree>;

    /// Membership degrees of a vector of values, aligned with `xs`.
    fn memberships(&self, xs: &[f64]) -> Result<MembershipDegree>;
}

/// Type-1 fuzzy set: one membership function, scalar degrees.
#[derive(Debug, Clone)]
pub struct Type1FuzzySet {
    membership_function: MembershipFunction,
}

impl Type1FuzzySet {
    pub fn new(membership_function: MembershipFunction) -> Self {
        Self { membership_function }
    }

    pub fn from_fn(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(MembershipFunction::custom(f))
    }

    pub fn membership_function(&self) -> &MembershipFunction {
        &self.membership_function
    }
}

impl FuzzySet for Type1FuzzySet {
    fn membership(&self, x: f64) -> Result<MembershipDegree> {
        Ok(MembershipDegree::Scalar(self.membership_function.evaluate(x)))
    }

    fn memberships(&self, xs: &[f64]) -> Result<MembershipDegree> {
        Ok(MembershipDegree::Scalars(self.membership_function.evaluate_all(xs)))
    }
}

/// Interval type-2 fuzzy set: a lower and an upper membership function.
///
/// The footprint of uncertainty lies between the two functions. The bounds are
/// checked at evaluation time: a point where the lower function exceeds the upper
/// one fails with [`FuzzyError::InvalidInterval`](crate::error::FuzzyError::InvalidInterval).
#[derive(Debug, Clone)]
pub struct IntervalType2FuzzySet {
    lower: MembershipFunction,
    upper: MembershipFunction,
}

impl IntervalType2FuzzySet {
    pub fn new(lower: MembershipFunction, upper: MembershipFunction) -> Self {
        Self { lower, upper }
    }

    pub fn from_fns(
        lower: impl Fn(f64) -> f64 + Send + Sync + 'static,
        upper: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self::new(MembershipFunction::custom(lower), MembershipFunction::custom(upper))
    }

    pub fn lower(&self) -> &MembershipFunction {
        &self.lower
    }

    pub fn upper(&self) -> &MembershipFunction {
        &self.upper
    }

    fn interval(&self, x: f64) -> Result<Interval> {
        Interval::new(self.lower.evaluate(x), self.upper.evaluate(x))
    }
}

impl FuzzySet for IntervalType2FuzzySet {
    fn membership(&self, x: f64) -> Result<MembershipDegree> {
        Ok(MembershipDegree::Interval(self.interval(x)?))
    }

    fn memberships(&self, xs: &[f64]) -> Result<MembershipDegree> {
        trace!("IntervalType2FuzzySet::memberships({} values)", xs.len());
        let intervals = xs
            .iter()
            .map(|&x| self.interval(x))
            .collect::<Result<Vec<Interval>>>()?;
        Ok(MembershipDegree::Intervals(intervals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::FuzzyError;
    use crate::membership::{gaussian, triangular};

    #[test]
    fn test_type1_membership() {
        let set = Type1FuzzySet::new(triangular(0.0, 0.5, 1.0, 1.0));
        assert_eq!(set.membership(0.5).unwrap(), MembershipDegree::Scalar(1.0));
        assert_eq!(
            set.memberships(&[0.0, 0.25, 0.5]).unwrap(),
            MembershipDegree::Scalars(vec![0.0, 0.5, 1.0])
        );
    }

    #[test]
    fn test_type1_from_fn() {
        let set = Type1FuzzySet::from_fn(|x| x * x);
        assert_eq!(set.membership(0.5).unwrap(), MembershipDegree::Scalar(0.25));
    }

    #[test]
    fn test_it2_memberships_rows() {
        let set = IntervalType2FuzzySet::new(gaussian(0.5, 0.1, 0.8), gaussian(0.5, 0.1, 1.0));
        let degrees = set.memberships(&[0.3, 0.5, 0.7]).unwrap();
        assert_eq!(degrees.size(), 3);
        let (lower, upper) = degrees.rows().unwrap();
        assert_eq!(lower.len(), 3);
        assert_eq!(upper[1], 1.0);
        assert!((lower[1] - 0.8).abs() < 1e-12);
        for (l, u) in lower.iter().zip(&upper) {
            assert!(l <= u);
        }
    }

    #[test]
    fn test_it2_rejects_crossing_bounds() {
        let set = IntervalType2FuzzySet::from_fns(|x| x, |_| 0.5);
        assert!(set.membership(0.4).is_ok());
        assert_eq!(
            set.membership(0.6),
            Err(FuzzyError::InvalidInterval {
                lower: 0.6,
                upper: 0.5
            })
        );
        assert!(set.memberships(&[0.1, 0.9]).is_err());
    }
}
