//! Bulk creation of linguistic variables, fuzzy sets and clauses.
//!
//! [`create_set_of_variables`] builds, for every variable name, one fuzzy set and
//! one clause per gradation adjective ("Low", "Medium", "High", ...), with the
//! membership functions placed over the domain by the [`partition`](crate::partition)
//! generators.
//!
//! ```
//! use fuzzy_rs::grouping::{create_set_of_variables, VariableSetConfig};
//!
//! let set = create_set_of_variables(["temperature", "humidity"], &VariableSetConfig::default()).unwrap();
//! assert_eq!(set.variables.len(), 2);
//! assert_eq!(set.adjectives, ["Low", "Medium", "High"]);
//! assert!(set.clause("humidity", "Medium").is_some());
//! ```

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use log::debug;

use crate::clause::Clause;
use crate::domain::{Domain, LinguisticVariable};
use crate::error::{FuzzyError, Result};
use crate::fuzzy_set::{FuzzySet, IntervalType2FuzzySet, Type1FuzzySet};
use crate::membership::{sigmoid, MembershipFunction};
use crate::partition::{
    generate_equal_gausses, generate_even_trapezoidals, generate_even_triangulars,
    generate_full_trapezoidals, generate_full_triangulars, generate_progressive_gausses,
};

/// Offset of the sigmoid pair.
const SIGMOID_OFFSET: f64 = 0.5;
/// Magnitude of the sigmoid pair.
const SIGMOID_MAGNITUDE: f64 = 5.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeKind {
    Gaussian,
    Triangular,
    Trapezoidal,
    Sigmoid,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SetKind {
    /// Type-1 fuzzy sets.
    T1,
    /// Interval type-2 fuzzy sets.
    It2,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Placement {
    Default,
    /// Evenly spaced members.
    Equal,
    /// Gaussians getting denser around the middle value.
    Progressive,
    /// Outer members centred on the domain edges.
    Full,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Adjustment {
    /// Partition spans the whole domain.
    Center,
    /// Equal Gaussians centre their middle member on the middle value.
    Mean,
}

impl FromStr for ShapeKind {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gaussian" => Ok(ShapeKind::Gaussian),
            "triangular" => Ok(ShapeKind::Triangular),
            "trapezoidal" => Ok(ShapeKind::Trapezoidal),
            "sigmoid" => Ok(ShapeKind::Sigmoid),
            _ => Err(FuzzyError::unsupported("shape", s)),
        }
    }
}

impl FromStr for SetKind {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "t1" => Ok(SetKind::T1),
            "it2" => Ok(SetKind::It2),
            _ => Err(FuzzyError::unsupported("set kind", s)),
        }
    }
}

impl FromStr for Placement {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Placement::Default),
            "equal" => Ok(Placement::Equal),
            "progressive" => Ok(Placement::Progressive),
            "full" => Ok(Placement::Full),
            _ => Err(FuzzyError::unsupported("placement", s)),
        }
    }
}

impl FromStr for Adjustment {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "center" => Ok(Adjustment::Center),
            "mean" => Ok(Adjustment::Mean),
            _ => Err(FuzzyError::unsupported("adjustment", s)),
        }
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ShapeKind::Gaussian => "gaussian",
            ShapeKind::Triangular => "triangular",
            ShapeKind::Trapezoidal => "trapezoidal",
            ShapeKind::Sigmoid => "sigmoid",
        };
        f.write_str(s)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Placement::Default => "default",
            Placement::Equal => "equal",
            Placement::Progressive => "progressive",
            Placement::Full => "full",
        };
        f.write_str(s)
    }
}

/// Configuration of [`create_set_of_variables`]. Use `VariableSetConfig::default()`
/// for three type-1 Gaussians over `Domain(0, 1.001, 0.001)`.
#[derive(Debug, Clone)]
pub struct VariableSetConfig {
    /// Domain shared by all variables (default: `Domain(0, 1.001, 0.001)`)
    pub domain: Domain,
    /// Shape of the membership functions (default: gaussian)
    pub shape: ShapeKind,
    /// Number of membership functions per variable, one of 2, 3, 5, 7, 9, 11 (default: 3)
    pub n_mfs: usize,
    /// Type-1 or interval type-2 sets (default: t1)
    pub set_kind: SetKind,
    /// Placement of the membership functions over the domain (default: default)
    pub placement: Placement,
    /// Height of the lower membership functions of interval type-2 sets (default: 0.8)
    pub lower_scaling: f64,
    /// Middle value of each variable, or a single one for all (default: `[0.5]`)
    pub middle_values: Vec<f64>,
    /// Adjustment of equal Gaussians (default: center)
    pub adjustment: Adjustment,
}

impl Default for VariableSetConfig {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            shape: ShapeKind::Gaussian,
            n_mfs: 3,
            set_kind: SetKind::T1,
            placement: Placement::Default,
            lower_scaling: 0.8,
            middle_values: vec![0.5],
            adjustment: Adjustment::Center,
        }
    }
}

/// Variables with their fuzzy sets and clauses, both keyed by variable name, then adjective.
#[derive(Debug, Clone)]
pub struct VariableSet {
    pub variables: Vec<LinguisticVariable>,
    /// Gradation adjectives, ordered from the left end of the domain.
    pub adjectives: Vec<&'static str>,
    pub fuzzy_sets: HashMap<String, HashMap<String, Arc<dyn FuzzySet>>>,
    pub clauses: HashMap<String, HashMap<String, Arc<Clause>>>,
}

impl VariableSet {
    pub fn clause(&self, variable: &str, adjective: &str) -> Option<&Arc<Clause>> {
        self.clauses.get(variable)?.get(adjective)
    }

    pub fn fuzzy_set(&self, variable: &str, adjective: &str) -> Option<&Arc<dyn FuzzySet>> {
        self.fuzzy_sets.get(variable)?.get(adjective)
    }
}

/// Gradation adjectives for `n` membership functions.
pub fn adjectives(n: usize) -> Result<&'static [&'static str]> {
    let adjectives: &'static [&'static str] = match n {
        2 => &["Zero", "One"],
        3 => &["Low", "Medium", "High"],
        5 => &["Low", "Medium_Low", "Medium", "Medium_High", "High"],
        7 => &[
            "Low",
            "Medium_Low_Minus",
            "Medium_Low",
            "Medium",
            "Medium_High",
            "Medium_High_Plus",
            "High",
        ],
        9 => &[
            "Low",
            "Medium_Low_Minus",
            "Medium_Low",
            "Medium_Low_Plus",
            "Medium",
            "Medium_High_Minus",
            "Medium_High",
            "Medium_High_Plus",
            "High",
        ],
        11 => &[
            "Low",
            "Low_High",
            "Medium_Low_Minus",
            "Medium_Low",
            "Medium_Low_Plus",
            "Medium",
            "Medium_High_Minus",
            "Medium_High",
            "Medium_High_Plus",
            "High_Low",
            "High",
        ],
        _ => return Err(FuzzyError::unsupported("number of membership functions", n)),
    };
    Ok(adjectives)
}

/// Membership functions of height `max_value` for one variable.
fn membership_functions(
    config: &VariableSetConfig,
    placement: Placement,
    middle: f64,
    max_value: f64,
) -> Result<Vec<MembershipFunction>> {
    let n = config.n_mfs;
    let start = config.domain.min();
    let end = config.domain.max() - config.domain.precision();
    match (config.shape, placement) {
        (ShapeKind::Gaussian, Placement::Default | Placement::Equal) => {
            let mid_ev = match config.adjustment {
                Adjustment::Center => None,
                Adjustment::Mean => Some(middle),
            };
            generate_equal_gausses(n, start, end, max_value, mid_ev)
        }
        (ShapeKind::Gaussian, Placement::Progressive) => {
            generate_progressive_gausses(n, middle, max_value)
        }
        (ShapeKind::Triangular, Placement::Full) => generate_full_triangulars(n, start, end, max_value),
        (ShapeKind::Triangular, _) => generate_even_triangulars(n, start, end, max_value),
        (ShapeKind::Trapezoidal, Placement::Full) => {
            generate_full_trapezoidals(n, start, end, max_value)
        }
        (ShapeKind::Trapezoidal, _) => generate_even_trapezoidals(n, start, end, max_value),
        (ShapeKind::Sigmoid, _) => {
            if n != 2 {
                return Err(FuzzyError::unsupported("number of sigmoids", n));
            }
            Ok(vec![
                sigmoid(SIGMOID_OFFSET, -SIGMOID_MAGNITUDE, max_value),
                sigmoid(SIGMOID_OFFSET, SIGMOID_MAGNITUDE, max_value),
            ])
        }
        (shape, placement) => Err(FuzzyError::unsupported(
            "placement",
            format!("{} for {}", placement, shape),
        )),
    }
}

fn fuzzy_sets(
    config: &VariableSetConfig,
    placement: Placement,
    middle: f64,
) -> Result<Vec<Arc<dyn FuzzySet>>> {
    let upper = membership_functions(config, placement, middle, 1.0)?;
    let sets: Vec<Arc<dyn FuzzySet>> = match config.set_kind {
        SetKind::T1 => upper
            .into_iter()
            .map(|mf| Arc::new(Type1FuzzySet::new(mf)) as Arc<dyn FuzzySet>)
            .collect(),
        SetKind::It2 => {
            let lower = membership_functions(config, placement, middle, config.lower_scaling)?;
            lower
                .into_iter()
                .zip(upper)
                .map(|(lmf, umf)| {
                    Arc::new(IntervalType2FuzzySet::new(lmf, umf)) as Arc<dyn FuzzySet>
                })
                .collect()
        }
    };
    Ok(sets)
}

/// Creates linguistic variables named `names` over `config.domain`, with one fuzzy
/// set and one clause per gradation adjective.
///
/// Progressive placement only applies to Gaussians; other shapes fall back to full
/// placement. The middle values are matched with the names in order, a single
/// middle value applies to every variable.
pub fn create_set_of_variables<S: AsRef<str>>(
    names: impl IntoIterator<Item = S>,
    config: &VariableSetConfig,
) -> Result<VariableSet> {
    let names: Vec<String> = names.into_iter().map(|s| s.as_ref().to_string()).collect();
    let adjectives = adjectives(config.n_mfs)?;

    let placement = match (config.placement, config.shape) {
        (Placement::Progressive, shape) if shape != ShapeKind::Gaussian => Placement::Full,
        (placement, _) => placement,
    };

    let middles: Vec<f64> = match config.middle_values.as_slice() {
        [middle] => vec![*middle; names.len()],
        values if values.len() == names.len() => values.to_vec(),
        values => {
            return Err(FuzzyError::InvalidParameter(format!(
                "Got {} middle values for {} variables",
                values.len(),
                names.len()
            )))
        }
    };

    debug!(
        "create_set_of_variables({:?}): {} {:?} x{} ({}), {:?}",
        names, config.shape, config.set_kind, config.n_mfs, placement, config.adjustment
    );

    let mut set = VariableSet {
        variables: Vec::with_capacity(names.len()),
        adjectives: adjectives.to_vec(),
        fuzzy_sets: HashMap::new(),
        clauses: HashMap::new(),
    };
    for (name, middle) in names.iter().zip(middles) {
        let variable = LinguisticVariable::new(name.as_str(), config.domain);
        let mut var_sets = HashMap::new();
        let mut var_clauses = HashMap::new();
        for (adjective, fuzzy_set) in adjectives.iter().zip(fuzzy_sets(config, placement, middle)?) {
            let clause = Clause::new(variable.clone(), *adjective, Arc::clone(&fuzzy_set))?;
            var_sets.insert(adjective.to_string(), fuzzy_set);
            var_clauses.insert(adjective.to_string(), Arc::new(clause));
        }
        set.fuzzy_sets.insert(name.clone(), var_sets);
        set.clauses.insert(name.clone(), var_clauses);
        set.variables.push(variable);
    }
    Ok(set)
}
