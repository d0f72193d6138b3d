//! Knights-and-Knaves integration tests: the classic puzzle set end to end.

use puzzle_agents::knights::{puzzle_0, puzzle_1, puzzle_2, puzzle_3, Puzzle, Role};
use puzzle_agents::logic::{entails, Formula};

#[test]
fn test_classic_puzzle_solutions() {
    assert_eq!(puzzle_0().solve(), vec![Some(Role::Knave)]);
    assert_eq!(
        puzzle_1().solve(),
        vec![Some(Role::Knave), Some(Role::Knight)]
    );
    assert_eq!(
        puzzle_2().solve(),
        vec![Some(Role::Knave), Some(Role::Knight)]
    );
    assert_eq!(
        puzzle_3().solve(),
        vec![Some(Role::Knight), Some(Role::Knave), Some(Role::Knight)]
    );
}

#[test]
fn test_solutions_come_from_consistent_knowledge() {
    // Guards against a vacuous solve: an unsatisfiable knowledge base
    // would entail both roles for everyone.
    for puzzle in [puzzle_0(), puzzle_1(), puzzle_2(), puzzle_3()] {
        assert!(puzzle.is_consistent());

        let knowledge = puzzle.knowledge();
        for character in puzzle.characters() {
            let knight = Formula::sym(character.knight_symbol());
            let knave = Formula::sym(character.knave_symbol());
            assert!(
                !(entails(&knowledge, &knight, puzzle.table())
                    && entails(&knowledge, &knave, puzzle.table())),
                "{} entailed as both roles",
                character.name()
            );
        }
    }
}

#[test]
fn test_liar_paradox_statement() {
    // A says "I am a knave": a knight can't say it truthfully and a knave
    // can't say it falsely, so the puzzle is contradictory.
    let mut puzzle = Puzzle::new(&["A"]);
    let claim = puzzle.knave(0);
    puzzle.says(0, claim);

    assert!(!puzzle.is_consistent());
}

#[test]
fn test_accusation_chain() {
    // A says "B is a knave", B says "A is a knave": exactly one of them
    // lies, but which one is not determined.
    let mut puzzle = Puzzle::new(&["A", "B"]);
    let a_claim = puzzle.knave(1);
    puzzle.says(0, a_claim);
    let b_claim = puzzle.knave(0);
    puzzle.says(1, b_claim);

    assert!(puzzle.is_consistent());
    assert_eq!(puzzle.solve(), vec![None, None]);

    // But "they are different kinds" is entailed.
    let different = puzzle.different_kinds(0, 1);
    assert!(entails(&puzzle.knowledge(), &different, puzzle.table()));
}

#[test]
fn test_added_fact_narrows_solution() {
    let mut puzzle = Puzzle::new(&["A", "B"]);
    let a_claim = puzzle.knave(1);
    puzzle.says(0, a_claim);
    assert_eq!(puzzle.solve(), vec![None, None]);

    let fact = puzzle.knight(0);
    puzzle.assert_fact(fact);
    assert_eq!(puzzle.solve(), vec![Some(Role::Knight), Some(Role::Knave)]);
}
