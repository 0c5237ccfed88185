//! Rule consequents.
//!
//! A consequent turns the firing degree of a rule (or its crisp inputs) into the
//! rule's output: a clause cut to the firing level in the Mamdani model, a crisp
//! value in the Takagi-Sugeno model.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::debug;

use crate::clause::Clause;
use crate::degree::{Interval, MembershipDegree};
use crate::domain::{Inputs, LinguisticVariable};
use crate::error::{FuzzyError, Result};

pub trait Consequent {
    type Input;
    type Output;

    /// Computes the output of the rule; the last output is kept by the consequent.
    fn output(&mut self, input: &Self::Input) -> Result<Self::Output>;
}

/// Mamdani consequent: the output clause cut at the rule firing level.
#[derive(Debug, Clone)]
pub struct MamdaniConsequent {
    clause: Arc<Clause>,
    cut_clause: Option<Arc<Clause>>,
}

impl MamdaniConsequent {
    pub fn new(clause: Arc<Clause>) -> Self {
        Self {
            clause,
            cut_clause: None,
        }
    }

    pub fn clause(&self) -> &Arc<Clause> {
        &self.clause
    }

    /// The clause derived by the last call to [`Consequent::output`], if any.
    pub fn cut_clause(&self) -> Option<&Arc<Clause>> {
        self.cut_clause.as_ref()
    }

    fn cut(&self, firing: &MembershipDegree) -> Result<Clause> {
        let values = self.clause.values();
        if firing.is_sequence() {
            return Err(FuzzyError::IncompatibleDegree {
                expected: "single",
                found: "sequence",
            });
        }
        if firing.is_interval() && !values.is_interval() {
            return Err(FuzzyError::IncompatibleDegree {
                expected: values.kind(),
                found: firing.kind(),
            });
        }
        let cut = values.zip_with(firing, |value, level| {
            Interval::new_unchecked(
                value.lower().min(level.lower()),
                value.upper().min(level.upper()),
            )
        });
        self.clause.with_values(cut)
    }
}

impl Consequent for MamdaniConsequent {
    type Input = MembershipDegree;
    type Output = Arc<Clause>;

    /// Cuts the membership function of the clause to `firing`.
    ///
    /// A scalar firing cuts type-1 and interval tables alike; an interval firing
    /// cuts interval tables boundwise.
    fn output(&mut self, firing: &MembershipDegree) -> Result<Arc<Clause>> {
        debug!("{}: cut at {}", self, firing);
        let cut = Arc::new(self.cut(firing)?);
        self.cut_clause = Some(Arc::clone(&cut));
        Ok(cut)
    }
}

impl Display for MamdaniConsequent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MamdaniConsequent_{}", self.clause)
    }
}

/// Takagi-Sugeno consequent: `bias + a1 * x1 + a2 * x2 + ...`.
#[derive(Debug, Clone)]
pub struct TakagiSugenoConsequent {
    parameters: BTreeMap<String, f64>,
    bias: f64,
    variable: LinguisticVariable,
    last_output: f64,
}

impl TakagiSugenoConsequent {
    /// `parameters` maps input variable names to their coefficients.
    pub fn new<S: Into<String>>(
        parameters: impl IntoIterator<Item = (S, f64)>,
        bias: f64,
        variable: LinguisticVariable,
    ) -> Self {
        Self {
            parameters: parameters
                .into_iter()
                .map(|(name, a)| (name.into(), a))
                .collect(),
            bias,
            variable,
            last_output: 0.0,
        }
    }

    pub fn parameters(&self) -> &BTreeMap<String, f64> {
        &self.parameters
    }

    pub fn set_parameters(&mut self, parameters: BTreeMap<String, f64>) {
        self.parameters = parameters;
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// Output variable of the rule.
    pub fn variable(&self) -> &LinguisticVariable {
        &self.variable
    }

    pub fn last_output(&self) -> f64 {
        self.last_output
    }
}

impl Consequent for TakagiSugenoConsequent {
    type Input = Inputs;
    type Output = f64;

    /// Every variable with a coefficient must be present in `inputs`; other inputs are ignored.
    fn output(&mut self, inputs: &Inputs) -> Result<f64> {
        let mut y = self.bias;
        for (name, a) in &self.parameters {
            let x = inputs
                .get(name)
                .ok_or_else(|| FuzzyError::MissingInput(name.clone()))?;
            y += a * x;
        }
        debug!("TakagiSugenoConsequent({}): {}", self.variable.name(), y);
        self.last_output = y;
        Ok(y)
    }
}

impl Display for TakagiSugenoConsequent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TakagiSugenoConsequent_{}_{}", self.variable.name(), self.bias)
    }
}
