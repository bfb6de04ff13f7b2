//! A RIPPERk-style propositional rule learner.
//!
//! Trains an ordered disjunction of conjunctive rules per class, plus a
//! default class, via Cohen's `IREP*` followed by k global optimization
//! passes, with rule length controlled by a minimum-description-length
//! stopping criterion. See [`learner::fit`] for the training entry point
//! and [`model::Model`] for the trained artifact.

pub mod catalog;
pub mod condition;
pub mod dataset;
pub mod error;
pub mod instance;
pub mod io;
pub mod learner;
pub mod mathutils;
pub mod model;
pub mod rule;
pub mod ruleset;
pub mod value;

pub use error::{Result, RipperError};
pub use instance::{Attribute, Instance};
pub use learner::fit;
pub use model::Model;
