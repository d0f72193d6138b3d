//! Knights-and-Knaves puzzle encoding.
//!
//! Every inhabitant of the island is either a knight (always tells the
//! truth) or a knave (always lies). A puzzle is a cast of characters plus
//! the statements they make; solving it means asking, for each character,
//! whether the accumulated knowledge entails "knight" or "knave".

use crate::logic::{entails, satisfiable, Formula, SymbolId, SymbolTable};

/// The role a character turns out to have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Knight,
    Knave,
}

/// A puzzle character and its two propositional symbols.
#[derive(Clone, Debug)]
pub struct Character {
    name: String,
    knight: SymbolId,
    knave: SymbolId,
}

impl Character {
    /// Character name as given to `Puzzle::new`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The "is a Knight" symbol.
    #[must_use]
    pub fn knight_symbol(&self) -> SymbolId {
        self.knight
    }

    /// The "is a Knave" symbol.
    #[must_use]
    pub fn knave_symbol(&self) -> SymbolId {
        self.knave
    }
}

/// A Knights-and-Knaves puzzle under construction.
///
/// Creating the puzzle asserts the game rules for every character (each is
/// a knight or a knave, never both). Statements are then added with
/// [`Puzzle::says`], and [`Puzzle::solve`] reports every role the knowledge
/// pins down.
///
/// ```
/// use puzzle_agents::knights::{Puzzle, Role};
///
/// // A says "I am both a knight and a knave."
/// let mut puzzle = Puzzle::new(&["A"]);
/// let claim = puzzle.both(0);
/// puzzle.says(0, claim);
///
/// assert_eq!(puzzle.solve(), vec![Some(Role::Knave)]);
/// ```
#[derive(Clone, Debug)]
pub struct Puzzle {
    table: SymbolTable,
    characters: Vec<Character>,
    conjuncts: Vec<Formula>,
}

impl Puzzle {
    /// Create a puzzle with the given character names.
    ///
    /// Panics if `names` is empty.
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        assert!(!names.is_empty(), "A puzzle needs at least one character");

        let mut table = SymbolTable::new();
        let mut characters = Vec::with_capacity(names.len());
        let mut conjuncts = Vec::new();

        for &name in names {
            let knight = table.intern(format!("{name} is a Knight"));
            let knave = table.intern(format!("{name} is a Knave"));

            // Game rules: each character is exactly one of the two.
            conjuncts.push(Formula::or([Formula::sym(knight), Formula::sym(knave)]));
            conjuncts.push(Formula::not(Formula::and([
                Formula::sym(knight),
                Formula::sym(knave),
            ])));

            characters.push(Character {
                name: name.to_string(),
                knight,
                knave,
            });
        }

        Self {
            table,
            characters,
            conjuncts,
        }
    }

    /// The characters, in the order given to `new`.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// The symbol table behind this puzzle.
    #[must_use]
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Formula "character `index` is a knight".
    #[must_use]
    pub fn knight(&self, index: usize) -> Formula {
        Formula::sym(self.characters[index].knight)
    }

    /// Formula "character `index` is a knave".
    #[must_use]
    pub fn knave(&self, index: usize) -> Formula {
        Formula::sym(self.characters[index].knave)
    }

    /// Formula "character `index` is both a knight and a knave".
    #[must_use]
    pub fn both(&self, index: usize) -> Formula {
        Formula::and([self.knight(index), self.knave(index)])
    }

    /// Formula "characters `a` and `b` are the same kind".
    #[must_use]
    pub fn same_kind(&self, a: usize, b: usize) -> Formula {
        Formula::or([
            Formula::and([self.knight(a), self.knight(b)]),
            Formula::and([self.knave(a), self.knave(b)]),
        ])
    }

    /// Formula "characters `a` and `b` are different kinds".
    #[must_use]
    pub fn different_kinds(&self, a: usize, b: usize) -> Formula {
        Formula::or([
            Formula::and([self.knight(a), self.knave(b)]),
            Formula::and([self.knave(a), self.knight(b)]),
        ])
    }

    /// Record that character `speaker` said `statement`.
    ///
    /// A knight's statement is true and a knave's is false, so the statement
    /// being true forces the speaker to be a knight and the statement being
    /// false forces a knave.
    pub fn says(&mut self, speaker: usize, statement: Formula) {
        self.conjuncts.push(Formula::implies(
            statement.clone(),
            self.knight(speaker),
        ));
        self.conjuncts
            .push(Formula::implies(Formula::not(statement), self.knave(speaker)));
    }

    /// Add an arbitrary known fact to the puzzle.
    pub fn assert_fact(&mut self, fact: Formula) {
        self.conjuncts.push(fact);
    }

    /// The full knowledge base as one conjunction.
    #[must_use]
    pub fn knowledge(&self) -> Formula {
        Formula::and(self.conjuncts.iter().cloned())
    }

    /// Check that the accumulated knowledge has at least one model.
    ///
    /// A contradictory puzzle would make `solve` report every role at once,
    /// so tests call this first.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        satisfiable(&self.knowledge(), &self.table)
    }

    /// Solve the puzzle.
    ///
    /// Returns one entry per character: `Some(role)` when the knowledge
    /// entails that role, `None` when the character's role is not pinned
    /// down.
    #[must_use]
    pub fn solve(&self) -> Vec<Option<Role>> {
        let knowledge = self.knowledge();

        self.characters
            .iter()
            .map(|character| {
                if entails(&knowledge, &Formula::sym(character.knight), &self.table) {
                    Some(Role::Knight)
                } else if entails(&knowledge, &Formula::sym(character.knave), &self.table) {
                    Some(Role::Knave)
                } else {
                    None
                }
            })
            .collect()
    }
}
