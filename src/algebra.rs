//! Fuzzy logic algebras.
//!
//! An algebra supplies the four operators of a fuzzy logic:
//!
//! - **T-norm**: generalized AND
//! - **S-norm**: generalized OR
//! - **Negation**: generalized NOT
//! - **Implication**
//!
//! Implementors only provide the scalar primitives; the operators on
//! [`MembershipDegree`]s are provided by the trait and work elementwise over
//! single degrees, interval degrees and sequences of both.
//!
//! ```
//! use fuzzy_rs::algebra::{Algebra, GodelAlgebra};
//! use fuzzy_rs::degree::MembershipDegree;
//!
//! let a = MembershipDegree::from(0.5);
//! let b = MembershipDegree::from(vec![0.1, 0.9]);
//! let res = GodelAlgebra.t_norm(&a, &b).unwrap();
//! assert_eq!(res, MembershipDegree::Scalars(vec![0.1, 0.5]));
//! ```

use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

use crate::degree::{Interval, MembershipDegree};
use crate::error::{FuzzyError, Result};

/// Checks that two operands of a binary operator have compatible first dimensions.
///
/// A single degree is compatible with anything (it broadcasts), two sequences must
/// have the same length.
pub fn validate_dimensions(a: &MembershipDegree, b: &MembershipDegree) -> Result<()> {
    if a.is_sequence() && b.is_sequence() && a.size() != b.size() {
        return Err(FuzzyError::DimensionMismatch {
            left: a.size(),
            right: b.size(),
        });
    }
    Ok(())
}

pub trait Algebra: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn t_norm_value(&self, a: f64, b: f64) -> f64;

    fn s_norm_value(&self, a: f64, b: f64) -> f64;

    fn negation_value(&self, a: f64) -> f64 {
        1.0 - a
    }

    fn implication_value(&self, a: f64, b: f64) -> f64;

    /// Generalized AND of two degrees.
    ///
    /// Fails with [`FuzzyError::DimensionMismatch`] if both operands are sequences of
    /// different length. Interval bounds are combined boundwise.
    fn t_norm(&self, a: &MembershipDegree, b: &MembershipDegree) -> Result<MembershipDegree> {
        validate_dimensions(a, b)?;
        Ok(a.zip_with(b, |x, y| {
            Interval::new_unchecked(
                self.t_norm_value(x.lower(), y.lower()),
                self.t_norm_value(x.upper(), y.upper()),
            )
        }))
    }

    /// Generalized OR of two degrees.
    ///
    /// Fails with [`FuzzyError::DimensionMismatch`] if both operands are sequences of
    /// different length. Interval bounds are combined boundwise.
    fn s_norm(&self, a: &MembershipDegree, b: &MembershipDegree) -> Result<MembershipDegree> {
        validate_dimensions(a, b)?;
        Ok(a.zip_with(b, |x, y| {
            Interval::new_unchecked(
                self.s_norm_value(x.lower(), y.lower()),
                self.s_norm_value(x.upper(), y.upper()),
            )
        }))
    }

    /// Generalized NOT of a degree; `[l, u]` maps to `[n(u), n(l)]`.
    fn negation(&self, a: &MembershipDegree) -> MembershipDegree {
        a.map(|x| {
            Interval::new_unchecked(self.negation_value(x.upper()), self.negation_value(x.lower()))
        })
    }

    /// Implication `a -> b`.
    ///
    /// Fails with [`FuzzyError::DimensionMismatch`] if both operands are sequences of
    /// different length. Implication falls in `a` and grows in `b`, so the interval
    /// result is `[i(a.upper, b.lower), i(a.lower, b.upper)]`.
    fn implication(&self, a: &MembershipDegree, b: &MembershipDegree) -> Result<MembershipDegree> {
        validate_dimensions(a, b)?;
        Ok(a.zip_with(b, |x, y| {
            Interval::new_unchecked(
                self.implication_value(x.upper(), y.lower()),
                self.implication_value(x.lower(), y.upper()),
            )
        }))
    }
}

/// Gödel (minimum) logic.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GodelAlgebra;

impl Algebra for GodelAlgebra {
    fn name(&self) -> &'static str {
        "godel"
    }

    /// `min(a, b)`
    fn t_norm_value(&self, a: f64, b: f64) -> f64 {
        a.min(b)
    }

    /// `max(a, b)`
    fn s_norm_value(&self, a: f64, b: f64) -> f64 {
        a.max(b)
    }

    /// `max(1 - a, b)`
    fn implication_value(&self, a: f64, b: f64) -> f64 {
        (1.0 - a).max(b)
    }
}

/// Łukasiewicz logic.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LukasiewiczAlgebra;

impl Algebra for LukasiewiczAlgebra {
    fn name(&self) -> &'static str {
        "lukasiewicz"
    }

    /// `max(0, a + b - 1)`
    fn t_norm_value(&self, a: f64, b: f64) -> f64 {
        (a + b - 1.0).max(0.0)
    }

    /// `min(1, a + b)`
    fn s_norm_value(&self, a: f64, b: f64) -> f64 {
        (a + b).min(1.0)
    }

    /// `min(1, 1 - a + b)`
    fn implication_value(&self, a: f64, b: f64) -> f64 {
        (1.0 - a + b).min(1.0)
    }
}

/// Selects one of the built-in algebras.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Logic {
    Godel,
    Lukasiewicz,
}

impl Logic {
    pub fn algebra(self) -> Arc<dyn Algebra> {
        match self {
            Logic::Godel => Arc::new(GodelAlgebra),
            Logic::Lukasiewicz => Arc::new(LukasiewiczAlgebra),
        }
    }
}

impl FromStr for Logic {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "godel" | "gödel" => Ok(Logic::Godel),
            "lukasiewicz" | "łukasiewicz" => Ok(Logic::Lukasiewicz),
            _ => Err(FuzzyError::unsupported("logic", s)),
        }
    }
}
