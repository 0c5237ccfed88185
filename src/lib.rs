//! # fuzzy-rs: Fuzzy Logic Knowledge Representation in Rust
//!
//! **`fuzzy-rs`** is a library for describing fuzzy knowledge: fuzzy sets over discretized
//! domains, the clauses built on top of them ("temperature is high"), and rule antecedents
//! combining clauses with the operators of a fuzzy logic.
//!
//! ## What is a fuzzy set?
//!
//! A fuzzy set assigns every crisp value a **membership degree** in `[0, 1]` instead of a
//! yes/no answer. Type-1 sets give a single number; interval type-2 sets give an interval
//! `[lower, upper]`, modelling uncertainty about the membership itself.
//!
//! ## Key Features
//!
//! - **Pluggable logics**: Gödel and Łukasiewicz algebras behind the [`Algebra`][crate::algebra::Algebra] trait.
//! - **Type-1 and interval type-2** degrees, single or vectorized, through one [`MembershipDegree`][crate::degree::MembershipDegree] type.
//! - **Membership functions**: Gaussian, sigmoid, triangular, trapezoidal, linear, and asymmetric Gaussian shapes,
//!   plus generators placing whole partitions over a domain.
//! - **Immutable knowledge**: clauses precompute their table once; terms and cuts derive new values instead of mutating.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fuzzy_rs::algebra::Logic;
//! use fuzzy_rs::clause::Clause;
//! use fuzzy_rs::domain::{Domain, Inputs, LinguisticVariable};
//! use fuzzy_rs::fuzzy_set::Type1FuzzySet;
//! use fuzzy_rs::membership::{gaussian, sigmoid};
//! use fuzzy_rs::term::Term;
//!
//! // 1. Describe the variables
//! let temperature = LinguisticVariable::new("temperature", Domain::new(0.0, 40.0, 0.1));
//! let humidity = LinguisticVariable::new("humidity", Domain::default());
//!
//! // 2. Attach fuzzy sets through clauses
//! let hot = Clause::new(temperature, "hot", Arc::new(Type1FuzzySet::new(sigmoid(25.0, 0.5, 1.0)))).unwrap();
//! let dry = Clause::new(humidity, "dry", Arc::new(Type1FuzzySet::new(gaussian(0.0, 0.2, 1.0)))).unwrap();
//!
//! // 3. Build an antecedent: temperature is hot AND humidity is dry
//! let algebra = "godel".parse::<Logic>().unwrap().algebra();
//! let rule = Term::new(algebra.clone(), Arc::new(hot)) & Term::new(algebra, Arc::new(dry));
//!
//! // 4. Fire it on crisp inputs
//! let inputs = Inputs::from([("temperature".to_string(), 25.0), ("humidity".to_string(), 0.0)]);
//! let firing = rule.evaluate(&inputs).unwrap().as_scalar().unwrap();
//! assert!((firing - 0.5).abs() < 1e-9);
//! ```
//!
//! ## Core Components
//!
//! - **[`algebra`]**: t-norms, s-norms, negations and implications.
//! - **[`fuzzy_set`]** and **[`membership`]**: fuzzy sets and their membership functions.
//! - **[`clause`]** and **[`term`]**: the knowledge representation and the antecedent evaluator.
//! - **[`consequent`]**: Mamdani and Takagi-Sugeno rule outputs.
//! - **[`grouping`]**: bulk creation of variables, sets and clauses.

pub mod algebra;
pub mod clause;
pub mod consequent;
pub mod degree;
pub mod domain;
pub mod error;
pub mod fuzzy_set;
pub mod grouping;
pub mod membership;
pub mod partition;
pub mod term;
