//! Property tests for the cube group laws.

use proptest::prelude::*;

use rust_cube::core::{invert_algorithm, Cube, Direction, Face, Move};
use rust_cube::replay::Replay;

fn arb_move() -> impl Strategy<Value = Move> {
    (0..6usize, any::<bool>())
        .prop_map(|(face, prime)| Move::new(Face::ALL[face], Direction::from_prime(prime)))
}

fn arb_moves(max: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(arb_move(), 0..max)
}

proptest! {
    #[test]
    fn prop_color_multiset_is_invariant(moves in arb_moves(60)) {
        let mut cube = Cube::new();
        cube.apply_algorithm(&moves);

        prop_assert_eq!(cube.color_counts(), [9; 6]);
        for face in Face::ALL {
            prop_assert_eq!(cube.face(face)[4], face.home_color());
        }
    }

    #[test]
    fn prop_inverse_sequence_restores_state(prefix in arb_moves(20), moves in arb_moves(40)) {
        let mut cube = Cube::new();
        cube.apply_algorithm(&prefix);
        let before = cube.color_string();

        cube.apply_algorithm(&moves);
        cube.apply_algorithm(&invert_algorithm(&moves));

        prop_assert_eq!(cube.color_string(), before);
    }

    #[test]
    fn prop_four_quarter_turns_are_identity(prefix in arb_moves(20), mv in arb_move()) {
        let mut cube = Cube::new();
        cube.apply_algorithm(&prefix);
        let before = cube.color_string();

        for _ in 0..4 {
            cube.apply(mv);
        }

        prop_assert_eq!(cube.color_string(), before);
    }

    #[test]
    fn prop_solve_undoes_history(moves in arb_moves(50)) {
        let mut cube = Cube::new();
        cube.apply_algorithm(&moves);

        let solution = cube.solve();

        prop_assert_eq!(solution.len(), moves.len());
        prop_assert_eq!(solution, invert_algorithm(&moves));
        prop_assert!(cube.matches_solved_layout());
        prop_assert!(cube.is_solved());
        prop_assert!(cube.history().is_empty());
    }

    #[test]
    fn prop_clone_mutation_does_not_leak(prefix in arb_moves(20), moves in arb_moves(20)) {
        let mut original = Cube::new();
        original.apply_algorithm(&prefix);
        let snapshot = original.clone();

        let mut copy = original.clone();
        copy.apply_algorithm(&moves);
        copy.solve();

        prop_assert_eq!(original, snapshot);
    }

    #[test]
    fn prop_scramble_history_length(count in 0usize..60, seed in any::<u64>()) {
        let mut cube = Cube::new();
        cube.scramble(count, &mut rust_cube::core::CubeRng::new(seed));

        prop_assert_eq!(cube.history().len(), count);
        prop_assert!(!cube.is_solved());
    }

    #[test]
    fn prop_color_string_round_trips(moves in arb_moves(40)) {
        let mut cube = Cube::new();
        cube.apply_algorithm(&moves);

        let parsed = Cube::from_color_string(&cube.color_string()).unwrap();
        prop_assert_eq!(parsed.color_string(), cube.color_string());
    }

    #[test]
    fn prop_replay_ends_at_applied_state(moves in arb_moves(30)) {
        let mut cube = Cube::new();
        cube.apply_algorithm(&moves);

        let last = Replay::new(&Cube::new(), &moves)
            .last()
            .map(|step| step.colors)
            .unwrap_or_else(|| Cube::new().color_string());

        prop_assert_eq!(last, cube.color_string());
    }
}
