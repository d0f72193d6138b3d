//! Truth assignments and model checking.
//!
//! A `Model` assigns a boolean to every symbol in a table. Entailment is
//! decided by brute-force model enumeration: the symbol counts in this crate
//! are tiny (at most six for the knights puzzles), so 2^n enumeration is the
//! straightforward and correct tool.

use super::formula::Formula;
use super::symbol::{SymbolId, SymbolTable};

/// A complete truth assignment over a symbol table.
///
/// Backed by a `Vec<bool>` indexed by `SymbolId`, one entry per interned
/// symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// Build a model from the low bits of `bits`: bit `i` is the truth value
    /// of `SymbolId(i)`.
    #[must_use]
    pub fn from_bits(table: &SymbolTable, bits: u64) -> Self {
        assert!(table.len() <= 16, "Too many symbols to enumerate");
        let values = (0..table.len()).map(|i| bits & (1 << i) != 0).collect();
        Self { values }
    }

    /// Truth value of a symbol.
    ///
    /// Panics if the symbol does not belong to the table this model was
    /// built from.
    #[must_use]
    pub fn value(&self, id: SymbolId) -> bool {
        self.values[id.index()]
    }
}

/// Check whether `knowledge` entails `query`.
///
/// True iff every assignment over the table that satisfies `knowledge` also
/// satisfies `query`. Vacuously true when `knowledge` is unsatisfiable.
///
/// ```
/// use puzzle_agents::logic::{entails, Formula, SymbolTable};
///
/// let mut table = SymbolTable::new();
/// let p = table.intern("P");
/// let q = table.intern("Q");
///
/// let kb = Formula::and([
///     Formula::sym(p),
///     Formula::implies(Formula::sym(p), Formula::sym(q)),
/// ]);
/// assert!(entails(&kb, &Formula::sym(q), &table));
/// assert!(!entails(&kb, &Formula::not(Formula::sym(q)), &table));
/// ```
#[must_use]
pub fn entails(knowledge: &Formula, query: &Formula, table: &SymbolTable) -> bool {
    assert!(table.len() <= 16, "Too many symbols to enumerate");

    for bits in 0..(1u64 << table.len()) {
        let model = Model::from_bits(table, bits);
        if knowledge.evaluate(&model) && !query.evaluate(&model) {
            return false;
        }
    }
    true
}

/// Check whether `knowledge` has at least one satisfying assignment.
///
/// Useful as a sanity check before trusting `entails`: an unsatisfiable
/// knowledge base entails everything.
#[must_use]
pub fn satisfiable(knowledge: &Formula, table: &SymbolTable) -> bool {
    assert!(table.len() <= 16, "Too many symbols to enumerate");

    (0..(1u64 << table.len())).any(|bits| knowledge.evaluate(&Model::from_bits(table, bits)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modus_ponens() {
        let mut table = SymbolTable::new();
        let rain = table.intern("It is raining");
        let wet = table.intern("The grass is wet");

        let kb = Formula::and([
            Formula::sym(rain),
            Formula::implies(Formula::sym(rain), Formula::sym(wet)),
        ]);

        assert!(entails(&kb, &Formula::sym(wet), &table));
    }

    #[test]
    fn test_no_entailment_without_premise() {
        let mut table = SymbolTable::new();
        let p = table.intern("P");
        let q = table.intern("Q");

        let kb = Formula::implies(Formula::sym(p), Formula::sym(q));

        assert!(!entails(&kb, &Formula::sym(q), &table));
        assert!(!entails(&kb, &Formula::not(Formula::sym(q)), &table));
    }

    #[test]
    fn test_unsatisfiable_kb_entails_everything() {
        let mut table = SymbolTable::new();
        let p = table.intern("P");

        let kb = Formula::and([Formula::sym(p), Formula::not(Formula::sym(p))]);

        assert!(!satisfiable(&kb, &table));
        assert!(entails(&kb, &Formula::sym(p), &table));
        assert!(entails(&kb, &Formula::not(Formula::sym(p)), &table));
    }

    #[test]
    fn test_satisfiable() {
        let mut table = SymbolTable::new();
        let p = table.intern("P");

        assert!(satisfiable(&Formula::sym(p), &table));
        assert!(satisfiable(&Formula::not(Formula::sym(p)), &table));
    }

    #[test]
    fn test_disjunction_entails_neither_disjunct() {
        let mut table = SymbolTable::new();
        let p = table.intern("P");
        let q = table.intern("Q");

        let kb = Formula::or([Formula::sym(p), Formula::sym(q)]);

        assert!(!entails(&kb, &Formula::sym(p), &table));
        assert!(!entails(&kb, &Formula::sym(q), &table));
        assert!(entails(
            &kb,
            &Formula::or([Formula::sym(q), Formula::sym(p)]),
            &table
        ));
    }
}
