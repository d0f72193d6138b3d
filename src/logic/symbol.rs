//! Propositional symbols and their interning table.
//!
//! Formulas refer to symbols by `SymbolId` rather than by name, so that
//! models can be plain `Vec<bool>` assignments and model enumeration is a
//! counter loop. The `SymbolTable` owns the id-to-name mapping.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier for a propositional symbol.
///
/// Ids are dense: a table with `n` symbols uses ids `0..n`, which lets a
/// truth assignment be indexed directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Interning table mapping symbol names to dense ids.
///
/// ```
/// use puzzle_agents::logic::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// let a = table.intern("A is a Knight");
/// let b = table.intern("A is a Knave");
///
/// assert_ne!(a, b);
/// assert_eq!(table.intern("A is a Knight"), a); // idempotent
/// assert_eq!(table.name(a), "A is a Knight");
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    names: Vec<String>,
    by_name: FxHashMap<String, SymbolId>,
}

impl SymbolTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a symbol name, returning its id.
    ///
    /// Interning the same name twice returns the same id.
    pub fn intern(&mut self, name: impl Into<String>) -> SymbolId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        assert!(self.names.len() < u16::MAX as usize, "Symbol table full");
        let id = SymbolId::new(self.names.len() as u16);
        self.names.push(name.clone());
        self.by_name.insert(name, id);
        id
    }

    /// Look up the name of a symbol.
    ///
    /// Panics if the id was not produced by this table.
    #[must_use]
    pub fn name(&self, id: SymbolId) -> &str {
        &self.names[id.index()]
    }

    /// Number of interned symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all symbol ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> {
        (0..self.names.len() as u16).map(SymbolId::new)
    }
}
