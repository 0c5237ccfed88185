//! Domains and linguistic variables.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::{FuzzyError, Result};

/// Crisp inputs keyed by linguistic variable name.
pub type Inputs = HashMap<String, f64>;

/// Discretized range of crisp values: `min, min + precision, ...` below `max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
    precision: f64,
}

impl Domain {
    /// Creates a domain without validating its bounds.
    pub const fn new(min: f64, max: f64, precision: f64) -> Self {
        Self { min, max, precision }
    }

    /// Creates a domain, rejecting empty ranges and non-positive precision.
    pub fn try_new(min: f64, max: f64, precision: f64) -> Result<Self> {
        let domain = Self::new(min, max, precision);
        domain.validate()?;
        Ok(domain)
    }

    /// Checks that the domain has finite bounds, `min < max` and a positive precision.
    pub fn validate(&self) -> Result<()> {
        if !(self.precision > 0.0) {
            return Err(FuzzyError::InvalidParameter(format!(
                "Domain precision must be positive, got {}",
                self.precision
            )));
        }
        if !(self.min.is_finite() && self.max.is_finite() && self.min < self.max) {
            return Err(FuzzyError::InvalidParameter(format!(
                "Domain minimum {} must be below its maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Number of points in the domain.
    pub fn len(&self) -> usize {
        let steps = ((self.max - self.min) / self.precision).ceil();
        if steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All points of the domain, `max` excluded.
    pub fn points(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.min + i as f64 * self.precision)
            .collect()
    }

    /// Index of the domain point nearest to `x`; halfway values go to the even index.
    pub fn index_of(&self, x: f64) -> Result<usize> {
        let out_of_domain = FuzzyError::OutOfDomain {
            value: x,
            min: self.min,
            max: self.max,
        };
        if !(x >= self.min && x <= self.max) {
            return Err(out_of_domain);
        }
        let index = ((x - self.min) / self.precision).round_ties_even() as usize;
        if index >= self.len() {
            return Err(out_of_domain);
        }
        Ok(index)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(0.0, 1.001, 0.001)
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Domain({}, {}, {})", self.min, self.max, self.precision)
    }
}

/// A measurable property (temperature, humidity, ...) over a domain.
///
/// Two variables are equal when their names are.
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: String,
    domain: Domain,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, domain: Domain) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl PartialEq for LinguisticVariable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for LinguisticVariable {}

impl Hash for LinguisticVariable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for LinguisticVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.name, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_default_domain_points() {
        let domain = Domain::default();
        assert_eq!(domain.len(), 1001);
        let points = domain.points();
        assert_eq!(points.len(), 1001);
        assert_eq!(points[0], 0.0);
        assert!((points[1000] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_points_exclude_max() {
        let domain = Domain::new(0.0, 10.0, 1.0);
        assert_eq!(domain.points(), (0..10).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn test_try_new() {
        assert!(Domain::try_new(0.0, 1.0, 0.01).is_ok());
        assert!(Domain::try_new(0.0, 1.0, 0.0).is_err());
        assert!(Domain::try_new(0.0, 1.0, -0.1).is_err());
        assert!(Domain::try_new(1.0, 1.0, 0.1).is_err());
        assert!(Domain::try_new(0.0, f64::INFINITY, 0.1).is_err());
        assert!(Domain::new(0.0, 1.0, 0.0).validate().is_err());
        assert!(Domain::default().validate().is_ok());
    }

    #[test]
    fn test_index_of() {
        let domain = Domain::new(0.0, 10.0, 0.01);
        assert_eq!(domain.index_of(0.0).unwrap(), 0);
        assert_eq!(domain.index_of(2.0).unwrap(), 200);
        assert_eq!(domain.index_of(2.004).unwrap(), 200);
        assert_eq!(domain.index_of(2.006).unwrap(), 201);
        assert!(matches!(
            domain.index_of(-0.5),
            Err(FuzzyError::OutOfDomain { .. })
        ));
        assert!(domain.index_of(10.5).is_err());
        // Halfway values go to the even index.
        let coarse = Domain::new(0.0, 10.0, 1.0);
        assert_eq!(coarse.index_of(2.5).unwrap(), 2);
        assert_eq!(coarse.index_of(3.5).unwrap(), 4);
        // `max` itself is not a point of the domain.
        assert!(domain.index_of(10.0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Domain::default().to_string(), "Domain(0, 1.001, 0.001)");
        let variable = LinguisticVariable::new("Temperature", Domain::new(0.0, 10.0, 0.5));
        assert_eq!(variable.to_string(), "Temperature_Domain(0, 10, 0.5)");
    }

    #[test]
    fn test_variable_equality_by_name() {
        let a = LinguisticVariable::new("Humidity", Domain::new(0.0, 1.0, 0.1));
        let b = LinguisticVariable::new("Humidity", Domain::new(0.0, 100.0, 1.0));
        let c = LinguisticVariable::new("Temperature", Domain::new(0.0, 1.0, 0.1));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
