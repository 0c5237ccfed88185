//! Rule antecedents.
//!
//! A [`Term`] is a tree of clauses joined by fuzzy AND / OR / NOT. Firing a term
//! does not evaluate any fuzzy set: the membership degree of every clause is
//! taken from an [`Assignment`], and the degrees are combined bottom-up with the
//! term's [`Algebra`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use fuzzy_rs::algebra::{Algebra, GodelAlgebra};
//! use fuzzy_rs::clause::Clause;
//! use fuzzy_rs::domain::{Domain, LinguisticVariable};
//! use fuzzy_rs::fuzzy_set::Type1FuzzySet;
//! use fuzzy_rs::term::{Antecedent, Assignment, Term};
//!
//! let algebra: Arc<dyn Algebra> = Arc::new(GodelAlgebra);
//! let domain = Domain::new(0.0, 1.0, 0.01);
//! let hot = Arc::new(Clause::new(
//!     LinguisticVariable::new("temperature", domain),
//!     "hot",
//!     Arc::new(Type1FuzzySet::from_fn(|x| x)),
//! ).unwrap());
//! let dry = Arc::new(Clause::new(
//!     LinguisticVariable::new("humidity", domain),
//!     "dry",
//!     Arc::new(Type1FuzzySet::from_fn(|x| 1.0 - x)),
//! ).unwrap());
//!
//! let rule = Term::new(algebra.clone(), hot.clone()) & Term::new(algebra, dry.clone());
//! assert_eq!(rule.name(), "temperature_hot & humidity_dry");
//!
//! let mut assignment = Assignment::new();
//! assignment.insert(&hot, 0.3.into());
//! assignment.insert(&dry, 0.7.into());
//! assert_eq!(rule.fire(&assignment).unwrap().as_scalar(), Some(0.3));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use log::{debug, trace, warn};

use crate::algebra::Algebra;
use crate::clause::{Clause, ClauseKey};
use crate::degree::MembershipDegree;
use crate::domain::Inputs;
use crate::error::{FuzzyError, Result};

/// Something that fires to a membership degree under an algebra.
pub trait Antecedent {
    fn algebra(&self) -> &Arc<dyn Algebra>;

    /// Computes the firing degree from the clause degrees in `assignment`.
    fn fire(&self, assignment: &Assignment) -> Result<MembershipDegree>;
}

/// Membership degrees of clauses, keyed by [`ClauseKey`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    degrees: HashMap<ClauseKey, MembershipDegree>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up every clause at the input value of its variable.
    ///
    /// Fails with [`FuzzyError::MissingInput`] if `inputs` has no value for a variable.
    pub fn evaluate<'a>(
        clauses: impl IntoIterator<Item = &'a Clause>,
        inputs: &Inputs,
    ) -> Result<Self> {
        let mut assignment = Self::new();
        for clause in clauses {
            let name = clause.variable().name();
            let x = inputs
                .get(name)
                .ok_or_else(|| FuzzyError::MissingInput(name.to_string()))?;
            let degree = clause.get_value(*x)?;
            trace!("Assignment::evaluate: {} at {} -> {}", clause, x, degree);
            assignment.degrees.insert(clause.key(), degree);
        }
        Ok(assignment)
    }

    pub fn insert(&mut self, clause: &Clause, degree: MembershipDegree) -> Option<MembershipDegree> {
        self.degrees.insert(clause.key(), degree)
    }

    pub fn insert_key(&mut self, key: ClauseKey, degree: MembershipDegree) -> Option<MembershipDegree> {
        self.degrees.insert(key, degree)
    }

    pub fn get(&self, key: &ClauseKey) -> Option<&MembershipDegree> {
        self.degrees.get(key)
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClauseKey, &MembershipDegree)> {
        self.degrees.iter()
    }
}

impl FromIterator<(ClauseKey, MembershipDegree)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (ClauseKey, MembershipDegree)>>(iter: I) -> Self {
        Self {
            degrees: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug)]
pub enum TermNode {
    Clause(Arc<Clause>),
    Not(Term),
    And(Term, Term),
    Or(Term, Term),
}

/// Antecedent built from clauses with `&`, `|` and `!`.
///
/// Terms are immutable and cheap to clone: combining two terms shares them as
/// subtrees of the new one. Every derived term keeps the algebra of its left
/// operand.
#[derive(Debug, Clone)]
pub struct Term {
    algebra: Arc<dyn Algebra>,
    name: String,
    node: Arc<TermNode>,
}

impl Term {
    /// Leaf term named `"{variable}_{adjective}"`.
    pub fn new(algebra: Arc<dyn Algebra>, clause: Arc<Clause>) -> Self {
        let name = clause.key().to_string();
        Self {
            algebra,
            name,
            node: Arc::new(TermNode::Clause(clause)),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &TermNode {
        &self.node
    }

    fn combine(&self, other: &Term, op: &str, node: TermNode) -> Term {
        if self.algebra.name() != other.algebra.name() {
            warn!(
                "Combining term under {} with term under {}, keeping {}",
                self.algebra.name(),
                other.algebra.name(),
                self.algebra.name()
            );
        }
        let name = format!("{} {} {}", self.name, op, other.name);
        debug!("Term: {}", name);
        Term {
            algebra: Arc::clone(&self.algebra),
            name,
            node: Arc::new(node),
        }
    }

    /// Fuzzy conjunction, fired with the t-norm.
    pub fn and(&self, other: &Term) -> Term {
        self.combine(other, "&", TermNode::And(self.clone(), other.clone()))
    }

    /// Fuzzy disjunction, fired with the s-norm.
    pub fn or(&self, other: &Term) -> Term {
        self.combine(other, "|", TermNode::Or(self.clone(), other.clone()))
    }

    /// Fuzzy negation.
    pub fn not(&self) -> Term {
        Term {
            algebra: Arc::clone(&self.algebra),
            name: format!("~{}", self.name),
            node: Arc::new(TermNode::Not(self.clone())),
        }
    }

    /// Distinct clauses at the leaves, left to right.
    pub fn clauses(&self) -> Vec<Arc<Clause>> {
        let mut seen = HashSet::new();
        let mut clauses = Vec::new();
        let mut stack = vec![self];
        while let Some(term) = stack.pop() {
            match term.node.as_ref() {
                TermNode::Clause(clause) => {
                    if seen.insert(clause.key()) {
                        clauses.push(Arc::clone(clause));
                    }
                }
                TermNode::Not(a) => stack.push(a),
                TermNode::And(a, b) | TermNode::Or(a, b) => {
                    stack.push(b);
                    stack.push(a);
                }
            }
        }
        clauses
    }

    /// Looks up the clauses at `inputs` and fires the term.
    pub fn evaluate(&self, inputs: &Inputs) -> Result<MembershipDegree> {
        let clauses = self.clauses();
        let assignment = Assignment::evaluate(clauses.iter().map(|c| c.as_ref()), inputs)?;
        self.fire(&assignment)
    }
}

impl Antecedent for Term {
    fn algebra(&self) -> &Arc<dyn Algebra> {
        &self.algebra
    }

    fn fire(&self, assignment: &Assignment) -> Result<MembershipDegree> {
        let degree = match self.node.as_ref() {
            TermNode::Clause(clause) => {
                let key = clause.key();
                assignment
                    .get(&key)
                    .cloned()
                    .ok_or_else(|| FuzzyError::MissingClause(key.to_string()))?
            }
            TermNode::Not(a) => self.algebra.negation(&a.fire(assignment)?),
            TermNode::And(a, b) => self
                .algebra
                .t_norm(&a.fire(assignment)?, &b.fire(assignment)?)?,
            TermNode::Or(a, b) => self
                .algebra
                .s_norm(&a.fire(assignment)?, &b.fire(assignment)?)?,
        };
        trace!("fire({}) = {}", self.name, degree);
        Ok(degree)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl BitAnd for Term {
    type Output = Term;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(&rhs)
    }
}

impl BitAnd for &Term {
    type Output = Term;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Term {
    type Output = Term;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(&rhs)
    }
}

impl BitOr for &Term {
    type Output = Term;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Term {
    type Output = Term;

    fn not(self) -> Self::Output {
        Term::not(&self)
    }
}

impl Not for &Term {
    type Output = Term;

    fn not(self) -> Self::Output {
        Term::not(self)
    }
}
