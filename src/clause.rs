//! Clauses: "variable is adjective".
//!
//! A [`Clause`] pairs a [`LinguisticVariable`] with a fuzzy set describing one
//! gradation of it ("temperature is high"). The fuzzy set is evaluated over the
//! whole domain once, when the clause is created; lookups then pick the nearest
//! precomputed degree.
//!
//! ```
//! use std::sync::Arc;
//!
//! use fuzzy_rs::clause::Clause;
//! use fuzzy_rs::domain::{Domain, LinguisticVariable};
//! use fuzzy_rs::fuzzy_set::Type1FuzzySet;
//!
//! let temperature = LinguisticVariable::new("Temperature", Domain::new(0.0, 10.0, 0.01));
//! let medium = Arc::new(Type1FuzzySet::from_fn(|x| 0.05 * x));
//! let clause = Clause::new(temperature, "Medium", medium).unwrap();
//!
//! let degree = clause.get_value(2.0).unwrap().as_scalar().unwrap();
//! assert!((degree - 0.1).abs() < 1e-9);
//! ```

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, trace};

use crate::degree::MembershipDegree;
use crate::domain::LinguisticVariable;
use crate::error::{FuzzyError, Result};
use crate::fuzzy_set::FuzzySet;

static NEXT_CLAUSE_ID: AtomicU64 = AtomicU64::new(0);

fn next_clause_id() -> u64 {
    NEXT_CLAUSE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a clause.
///
/// Every created or derived clause gets its own key, even under the same variable
/// name and adjective. Keys compare and hash by identity only; the names are kept
/// for display.
#[derive(Debug, Clone)]
pub struct ClauseKey {
    id: u64,
    variable: String,
    adjective: String,
}

impl ClauseKey {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn adjective(&self) -> &str {
        &self.adjective
    }
}

impl PartialEq for ClauseKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClauseKey {}

impl Hash for ClauseKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for ClauseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.variable, self.adjective)
    }
}

/// A cloned clause keeps the key of its source; [`Clause::with_values`] does not.
#[derive(Debug, Clone)]
pub struct Clause {
    id: u64,
    variable: LinguisticVariable,
    adjective: String,
    fuzzy_set: Arc<dyn FuzzySet>,
    values: MembershipDegree,
}

impl Clause {
    /// Creates a clause and evaluates `fuzzy_set` over every point of the variable's domain.
    ///
    /// Fails with [`FuzzyError::InvalidParameter`] if the domain is empty or its precision
    /// is not positive.
    pub fn new(
        variable: LinguisticVariable,
        adjective: impl Into<String>,
        fuzzy_set: Arc<dyn FuzzySet>,
    ) -> Result<Self> {
        let adjective = adjective.into();
        variable.domain().validate()?;
        let values = fuzzy_set.memberships(&variable.domain().points())?;
        debug!(
            "Clause::new({} is {}): {} {} values",
            variable.name(),
            adjective,
            values.size(),
            values.kind()
        );
        Ok(Self {
            id: next_clause_id(),
            variable,
            adjective,
            fuzzy_set,
            values,
        })
    }

    pub fn variable(&self) -> &LinguisticVariable {
        &self.variable
    }

    pub fn adjective(&self) -> &str {
        &self.adjective
    }

    pub fn fuzzy_set(&self) -> &Arc<dyn FuzzySet> {
        &self.fuzzy_set
    }

    /// Membership degrees of every domain point.
    pub fn values(&self) -> &MembershipDegree {
        &self.values
    }

    pub fn key(&self) -> ClauseKey {
        ClauseKey {
            id: self.id,
            variable: self.variable.name().to_string(),
            adjective: self.adjective.clone(),
        }
    }

    fn index_of(&self, x: f64) -> Result<usize> {
        let domain = self.variable.domain();
        let index = domain.index_of(x)?;
        if index >= self.values.size() {
            return Err(FuzzyError::OutOfDomain {
                value: x,
                min: domain.min(),
                max: domain.max(),
            });
        }
        Ok(index)
    }

    /// Precomputed membership degree of the domain point nearest to `x`.
    pub fn get_value(&self, x: f64) -> Result<MembershipDegree> {
        let index = self.index_of(x)?;
        trace!("{}: get_value({}) at index {}", self, x, index);
        Ok(MembershipDegree::single(
            self.values.point(index),
            self.values.is_interval(),
        ))
    }

    /// Precomputed membership degrees of the domain points nearest to `xs`.
    pub fn get_values(&self, xs: &[f64]) -> Result<MembershipDegree> {
        let indices = xs
            .iter()
            .map(|&x| self.index_of(x))
            .collect::<Result<Vec<usize>>>()?;
        Ok(self.values.select(&indices))
    }

    /// Derives a clause with the same variable and fuzzy set but a replaced table.
    ///
    /// The new table must be of the same family (type-1 or interval) and of the same
    /// length as the current one.
    pub fn with_values(&self, values: MembershipDegree) -> Result<Clause> {
        if values.is_interval() != self.values.is_interval() {
            return Err(FuzzyError::IncompatibleDegree {
                expected: self.values.kind(),
                found: values.kind(),
            });
        }
        if !values.is_sequence() || values.size() != self.values.size() {
            return Err(FuzzyError::ShapeMismatch {
                expected: self.values.size(),
                found: values.size(),
            });
        }
        Ok(Clause {
            id: next_clause_id(),
            variable: self.variable.clone(),
            adjective: self.adjective.clone(),
            fuzzy_set: Arc::clone(&self.fuzzy_set),
            values,
        })
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clause {} is {}", self.variable.name(), self.adjective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::degree::Interval;
    use crate::domain::Domain;
    use crate::fuzzy_set::{IntervalType2FuzzySet, Type1FuzzySet};
    use crate::membership::gaussian;

    fn temperature() -> LinguisticVariable {
        LinguisticVariable::new("Temperature", Domain::new(0.0, 10.0, 0.01))
    }

    fn medium() -> Clause {
        Clause::new(
            temperature(),
            "Medium",
            Arc::new(Type1FuzzySet::from_fn(|x| 0.05 * x)),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_degenerate_domain() {
        let set: Arc<dyn FuzzySet> = Arc::new(Type1FuzzySet::from_fn(|x| x));
        let flat = LinguisticVariable::new("Temperature", Domain::new(0.0, 1.0, 0.0));
        assert!(matches!(
            Clause::new(flat, "Low", Arc::clone(&set)),
            Err(FuzzyError::InvalidParameter(_))
        ));
        let empty = LinguisticVariable::new("Temperature", Domain::new(1.0, 1.0, 0.1));
        assert!(matches!(
            Clause::new(empty, "Low", set),
            Err(FuzzyError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_values_cover_domain() {
        let clause = medium();
        assert_eq!(clause.values().size(), 1000);
        assert!(!clause.values().is_interval());
    }

    #[test]
    fn test_get_value() {
        let clause = medium();
        let degree = clause.get_value(2.0).unwrap().as_scalar().unwrap();
        assert!((degree - 0.1).abs() < 1e-9);
        assert_eq!(
            clause.get_value(0.0).unwrap(),
            clause.values().at(0).unwrap()
        );
    }

    #[test]
    fn test_get_value_outside_domain() {
        let clause = medium();
        assert!(matches!(
            clause.get_value(-1.0),
            Err(FuzzyError::OutOfDomain { .. })
        ));
        assert!(clause.get_value(11.0).is_err());
    }

    #[test]
    fn test_get_values() {
        let clause = medium();
        let degrees = clause.get_values(&[1.0, 4.0]).unwrap();
        let values = degrees.as_scalars().unwrap();
        assert_eq!(values.len(), 2);
        assert!((values[0] - 0.05).abs() < 1e-9);
        assert!((values[1] - 0.2).abs() < 1e-9);
        assert!(clause.get_values(&[1.0, 12.0]).is_err());
    }

    #[test]
    fn test_interval_clause() {
        let set = IntervalType2FuzzySet::new(gaussian(5.0, 1.0, 0.8), gaussian(5.0, 1.0, 1.0));
        let clause = Clause::new(temperature(), "Warm", Arc::new(set)).unwrap();
        let degree = clause.get_value(5.0).unwrap().as_interval().unwrap();
        assert!((degree.lower() - 0.8).abs() < 1e-9);
        assert!((degree.upper() - 1.0).abs() < 1e-9);

        let degrees = clause.get_values(&[4.0, 5.0]).unwrap();
        assert_eq!(degrees.as_intervals().unwrap().len(), 2);
    }

    #[test]
    fn test_with_values_derives_new_clause() {
        let clause = medium();
        let cut = clause
            .with_values(MembershipDegree::Scalars(vec![0.25; 1000]))
            .unwrap();
        assert_eq!(cut.get_value(9.0).unwrap(), MembershipDegree::Scalar(0.25));
        // The source clause keeps its table.
        let degree = clause.get_value(9.0).unwrap().as_scalar().unwrap();
        assert!((degree - 0.45).abs() < 1e-9);
        assert_ne!(cut.key(), clause.key());
        assert_eq!(cut.key().to_string(), clause.key().to_string());
    }

    #[test]
    fn test_keys_distinguish_same_names() {
        let rising = Clause::new(temperature(), "Low", Arc::new(Type1FuzzySet::from_fn(|x| x))).unwrap();
        let falling =
            Clause::new(temperature(), "Low", Arc::new(Type1FuzzySet::from_fn(|x| 1.0 - x))).unwrap();
        assert_ne!(rising.key(), falling.key());
        assert_eq!(rising.key(), rising.key());
        assert_eq!(rising.clone().key(), rising.key());
        assert_eq!(rising.key().variable(), "Temperature");
        assert_eq!(rising.key().adjective(), "Low");
    }

    #[test]
    fn test_with_values_rejects_mismatch() {
        let clause = medium();
        assert_eq!(
            clause
                .with_values(MembershipDegree::Scalars(vec![0.25; 10]))
                .unwrap_err(),
            FuzzyError::ShapeMismatch {
                expected: 1000,
                found: 10
            }
        );
        assert!(matches!(
            clause.with_values(MembershipDegree::Intervals(vec![Interval::point(0.2); 1000])),
            Err(FuzzyError::IncompatibleDegree { .. })
        ));
    }

    #[test]
    fn test_display() {
        let clause = medium();
        assert_eq!(clause.to_string(), "Clause Temperature is Medium");
        assert_eq!(clause.key().to_string(), "Temperature_Medium");
    }
}
