//! Propositional logic: symbols, formulas, models, entailment.
//!
//! This is the boolean-formula capability the knights puzzles are encoded
//! against. It is deliberately minimal: formulas over interned symbols,
//! evaluation against a complete truth assignment, and entailment by model
//! enumeration.

pub mod formula;
pub mod model;
pub mod symbol;

pub use formula::Formula;
pub use model::{entails, satisfiable, Model};
pub use symbol::{SymbolId, SymbolTable};
