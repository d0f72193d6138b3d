//! Propositional formulas.
//!
//! A `Formula` is a boolean expression over `SymbolId`s. The constructor
//! helpers keep puzzle encodings readable:
//!
//! ```
//! use puzzle_agents::logic::{Formula, Model, SymbolTable};
//!
//! let mut table = SymbolTable::new();
//! let p = table.intern("P");
//! let q = table.intern("Q");
//!
//! // P -> Q
//! let formula = Formula::implies(Formula::sym(p), Formula::sym(q));
//!
//! let model = Model::from_bits(&table, 0b01); // P true, Q false
//! assert!(!formula.evaluate(&model));
//! ```

use rustc_hash::FxHashSet;

use super::model::Model;
use super::symbol::SymbolId;

/// A propositional formula over interned symbols.
///
/// `And`/`Or` are n-ary because puzzle knowledge bases are naturally flat
/// conjunction lists; an empty `And` is true and an empty `Or` is false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// An atomic symbol.
    Symbol(SymbolId),
    /// Negation.
    Not(Box<Formula>),
    /// N-ary conjunction.
    And(Vec<Formula>),
    /// N-ary disjunction.
    Or(Vec<Formula>),
    /// Material implication: antecedent -> consequent.
    Implication(Box<Formula>, Box<Formula>),
    /// Biconditional: both or neither.
    Biconditional(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Atomic symbol formula.
    #[must_use]
    pub const fn sym(id: SymbolId) -> Self {
        Formula::Symbol(id)
    }

    /// Negate a formula.
    #[must_use]
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// Conjunction of the given formulas.
    #[must_use]
    pub fn and(conjuncts: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(conjuncts.into_iter().collect())
    }

    /// Disjunction of the given formulas.
    #[must_use]
    pub fn or(disjuncts: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(disjuncts.into_iter().collect())
    }

    /// Implication `antecedent -> consequent`.
    #[must_use]
    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implication(Box::new(antecedent), Box::new(consequent))
    }

    /// Biconditional `left <-> right`.
    #[must_use]
    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Biconditional(Box::new(left), Box::new(right))
    }

    /// Evaluate this formula against a truth assignment.
    #[must_use]
    pub fn evaluate(&self, model: &Model) -> bool {
        match self {
            Formula::Symbol(id) => model.value(*id),
            Formula::Not(inner) => !inner.evaluate(model),
            Formula::And(conjuncts) => conjuncts.iter().all(|f| f.evaluate(model)),
            Formula::Or(disjuncts) => disjuncts.iter().any(|f| f.evaluate(model)),
            Formula::Implication(antecedent, consequent) => {
                !antecedent.evaluate(model) || consequent.evaluate(model)
            }
            Formula::Biconditional(left, right) => left.evaluate(model) == right.evaluate(model),
        }
    }

    /// Collect every symbol mentioned by this formula into `out`.
    pub fn collect_symbols(&self, out: &mut FxHashSet<SymbolId>) {
        match self {
            Formula::Symbol(id) => {
                out.insert(*id);
            }
            Formula::Not(inner) => inner.collect_symbols(out),
            Formula::And(parts) | Formula::Or(parts) => {
                for part in parts {
                    part.collect_symbols(out);
                }
            }
            Formula::Implication(left, right) | Formula::Biconditional(left, right) => {
                left.collect_symbols(out);
                right.collect_symbols(out);
            }
        }
    }
}
