//! Turn-by-turn rule scenarios.
//!
//! Each test builds a position with `with_piece_location`, rolls a fixed
//! value and checks the successor state.

use ludo_engine::core::{
    create_initial_game_state, DieValue, GameState, Location, Phase, PieceId, PlayerId,
};
use ludo_engine::rules::{apply_move, can_roll, is_terminal, legal_actions, roll, Action};

fn pid(player: u8, index: u8) -> PieceId {
    PieceId::new(PlayerId::new(player), index)
}

fn die(value: u8) -> DieValue {
    DieValue::new(value)
}

/// Starting state with the listed pieces relocated.
fn position(pieces: &[(PieceId, Location)]) -> GameState {
    pieces
        .iter()
        .fold(create_initial_game_state(), |state, &(id, location)| {
            state.with_piece_location(id, location)
        })
}

// ============================================================================
// Start of game
// ============================================================================

#[test]
fn test_initial_state() {
    let state = create_initial_game_state();

    assert_eq!(state.phase(), Phase::Waiting);
    assert_eq!(state.current_player(), PlayerId::new(0));
    assert_eq!(state.die_value(), None);
    assert_eq!(state.winner(), None);
    assert!(state.eligible_pieces().is_empty());
    assert_eq!(state.pieces().count(), 16);
    assert!(state.pieces().all(|p| p.location() == Location::Yard && p.position() == -1));

    let active: Vec<_> = state.players().values().filter(|p| p.is_active()).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), PlayerId::new(0));
}

#[test]
fn test_six_brings_piece_out_and_keeps_turn() {
    let state = roll(&create_initial_game_state(), DieValue::SIX);

    assert_eq!(state.phase(), Phase::Moving);
    assert_eq!(state.eligible_pieces().len(), 4);
    assert!(state.is_eligible(pid(0, 0)));

    let state = apply_move(&state, pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Track(1));
    assert!(state.piece(pid(0, 0)).is_active());
    assert_eq!(state.current_player(), PlayerId::new(0));
    assert_eq!(state.phase(), Phase::Waiting);
    assert!(state.eligible_pieces().is_empty());
}

#[test]
fn test_each_player_enters_on_own_cell() {
    let mut state = create_initial_game_state();

    for (player, cell) in [(0, 1), (1, 14), (2, 27), (3, 40)] {
        state = state.with_current_player(PlayerId::new(player));
        state = apply_move(&roll(&state, DieValue::SIX), pid(player, 0));
        assert_eq!(state.piece(pid(player, 0)).location(), Location::Track(cell));
    }
}

#[test]
fn test_non_six_from_yard_passes_turn() {
    let state = roll(&create_initial_game_state(), die(3));

    assert_eq!(state.phase(), Phase::Waiting);
    assert_eq!(state.die_value(), Some(die(3)));
    assert_eq!(state.current_player(), PlayerId::new(1));
    assert!(state.player(PlayerId::new(1)).is_active());
    assert!(!state.player(PlayerId::new(0)).is_active());
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_track_move_passes_turn() {
    let state = position(&[(pid(0, 0), Location::Track(5))]);
    let state = apply_move(&roll(&state, die(4)), pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Track(9));
    assert_eq!(state.current_player(), PlayerId::new(1));
}

#[test]
fn test_track_into_home_lane() {
    let state = position(&[(pid(0, 0), Location::Track(47))]);
    let state = roll(&state, die(5));
    assert!(state.is_eligible(pid(0, 0)));

    let state = apply_move(&state, pid(0, 0));

    let piece = state.piece(pid(0, 0));
    assert_eq!(piece.location(), Location::Lane(52));
    assert_eq!(piece.position(), 52);
    assert!(piece.is_active());
    assert!(!piece.is_in_home());
    assert!(!piece.is_in_goal());
}

#[test]
fn test_second_player_lane_entry_and_goal() {
    let blue = PlayerId::new(1);
    let state = position(&[(pid(1, 0), Location::Track(51))]);
    let state = roll(&state.with_current_player(blue), die(5));
    assert!(state.is_eligible(pid(1, 0)));

    let state = apply_move(&state, pid(1, 0));
    let piece = state.piece(pid(1, 0));
    assert_eq!(piece.location(), Location::Lane(56));
    assert!(piece.is_active());
    assert!(!piece.is_in_home());
    assert_eq!(state.current_player(), PlayerId::new(2));

    let state = roll(&state.with_current_player(blue), die(4));
    let state = apply_move(&state, pid(1, 0));
    let piece = state.piece(pid(1, 0));
    assert_eq!(piece.location(), Location::Goal);
    assert_eq!(piece.position(), 60);
    assert!(!piece.is_active());
    assert_eq!(state.player(blue).pieces_in_goal(), 1);
}

#[test]
fn test_second_player_lane_overshoot_is_illegal() {
    // 56 + 5 is past player 1's goal at 60
    let state = position(&[(pid(1, 0), Location::Lane(56))]);
    let state = roll(&state.with_current_player(PlayerId::new(1)), die(5));

    assert!(!state.is_eligible(pid(1, 0)));
    assert_eq!(state.current_player(), PlayerId::new(2));
}

#[test]
fn test_lane_exact_roll_reaches_goal() {
    let state = position(&[(pid(0, 0), Location::Lane(54))]);
    let state = apply_move(&roll(&state, die(1)), pid(0, 0));

    let piece = state.piece(pid(0, 0));
    assert_eq!(piece.location(), Location::Goal);
    assert_eq!(piece.position(), 55);
    assert!(piece.is_in_goal());
    assert!(!piece.is_active());
    assert_eq!(state.player(PlayerId::new(0)).pieces_in_goal(), 1);
}

#[test]
fn test_lane_overshoot_has_no_move() {
    let state = position(&[(pid(0, 0), Location::Lane(54))]);
    let rolled = roll(&state, die(2));

    assert_eq!(rolled.phase(), Phase::Waiting);
    assert!(rolled.eligible_pieces().is_empty());
    assert_eq!(rolled.current_player(), PlayerId::new(1));

    let after = apply_move(&rolled, pid(0, 0));
    assert_eq!(after, rolled);
}

#[test]
fn test_track_overshoot_past_lane_is_illegal() {
    // 50 + 6 lands beyond player 0's goal
    let state = position(&[(pid(0, 0), Location::Track(50)), (pid(0, 1), Location::Track(10))]);
    let state = roll(&state, DieValue::SIX);

    assert!(!state.is_eligible(pid(0, 0)));
    assert!(state.is_eligible(pid(0, 1)));
    assert_eq!(apply_move(&state, pid(0, 0)), state);
}

#[test]
fn test_placement_off_the_board_is_rejected() {
    let state = create_initial_game_state();

    assert!(state.try_with_piece_location(pid(0, 0), Location::Track(252)).is_err());
    assert!(state.try_with_piece_location(pid(2, 0), Location::Lane(54)).is_err());
    assert!(state.try_with_piece_location(pid(0, 0), Location::Lane(55)).is_err());
}

#[test]
fn test_move_of_ineligible_piece_is_noop() {
    let state = roll(&create_initial_game_state(), DieValue::SIX);

    assert_eq!(apply_move(&state, pid(1, 0)), state);
}

#[test]
fn test_move_before_roll_is_noop() {
    let state = position(&[(pid(0, 0), Location::Track(5))]);

    assert_eq!(apply_move(&state, pid(0, 0)), state);
}

// ============================================================================
// Capture
// ============================================================================

#[test]
fn test_capture_on_plain_cell() {
    let state = position(&[(pid(0, 0), Location::Track(10)), (pid(1, 0), Location::Track(13))]);
    let state = apply_move(&roll(&state, die(3)), pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Track(13));
    assert_eq!(state.piece(pid(1, 0)).location(), Location::Yard);
    assert!(!state.piece(pid(1, 0)).is_active());
}

#[test]
fn test_no_capture_on_safe_cell() {
    let state = position(&[(pid(0, 0), Location::Track(19)), (pid(1, 0), Location::Track(22))]);
    let state = apply_move(&roll(&state, die(3)), pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Track(22));
    assert_eq!(state.piece(pid(1, 0)).location(), Location::Track(22));
}

#[test]
fn test_capture_sends_every_piece_on_cell() {
    let state = position(&[
        (pid(0, 0), Location::Track(10)),
        (pid(1, 0), Location::Track(13)),
        (pid(2, 3), Location::Track(13)),
    ]);
    let state = apply_move(&roll(&state, die(3)), pid(0, 0));

    assert_eq!(state.piece(pid(1, 0)).location(), Location::Yard);
    assert_eq!(state.piece(pid(2, 3)).location(), Location::Yard);
}

#[test]
fn test_capture_includes_own_pieces() {
    let state = position(&[(pid(0, 0), Location::Track(10)), (pid(0, 1), Location::Track(13))]);
    let state = apply_move(&roll(&state, die(3)), pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Track(13));
    assert_eq!(state.piece(pid(0, 1)).location(), Location::Yard);
}

#[test]
fn test_lane_cell_collides_with_track_cell_of_same_number() {
    // Player 0's first lane cell and track cell 51 share a number
    let state = position(&[(pid(0, 0), Location::Track(48)), (pid(1, 0), Location::Track(51))]);
    let state = apply_move(&roll(&state, die(3)), pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Lane(51));
    assert_eq!(state.piece(pid(1, 0)).location(), Location::Yard);
}

#[test]
fn test_no_capture_on_entry_cell() {
    let state = position(&[(pid(1, 0), Location::Track(1))]);
    let state = apply_move(&roll(&state, DieValue::SIX), pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Track(1));
    assert_eq!(state.piece(pid(1, 0)).location(), Location::Track(1));
}

// ============================================================================
// Turn rules
// ============================================================================

#[test]
fn test_six_without_move_rolls_again() {
    let state = position(&[
        (pid(0, 0), Location::Lane(54)),
        (pid(0, 1), Location::Goal),
        (pid(0, 2), Location::Goal),
        (pid(0, 3), Location::Goal),
    ]);
    let state = roll(&state, DieValue::SIX);

    assert_eq!(state.phase(), Phase::Waiting);
    assert_eq!(state.current_player(), PlayerId::new(0));
    assert!(can_roll(&state));
}

#[test]
fn test_six_after_move_keeps_turn() {
    let state = position(&[(pid(0, 0), Location::Track(5))]);
    let state = apply_move(&roll(&state, DieValue::SIX), pid(0, 0));

    assert_eq!(state.piece(pid(0, 0)).location(), Location::Track(11));
    assert_eq!(state.current_player(), PlayerId::new(0));
}

#[test]
fn test_turn_wraps_from_last_player() {
    let state = create_initial_game_state().with_current_player(PlayerId::new(3));
    let state = roll(&state, die(2));

    assert_eq!(state.current_player(), PlayerId::new(0));
}

#[test]
fn test_roll_while_moving_is_noop() {
    let state = roll(&create_initial_game_state(), DieValue::SIX);

    assert_eq!(roll(&state, die(3)), state);
}

// ============================================================================
// Winning
// ============================================================================

fn one_step_from_winning() -> GameState {
    position(&[
        (pid(0, 0), Location::Lane(54)),
        (pid(0, 1), Location::Goal),
        (pid(0, 2), Location::Goal),
        (pid(0, 3), Location::Goal),
    ])
}

#[test]
fn test_fourth_piece_in_goal_wins() {
    let state = apply_move(&roll(&one_step_from_winning(), die(1)), pid(0, 0));

    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.winner(), Some(PlayerId::new(0)));
    assert!(state.player(PlayerId::new(0)).has_won());
    assert!(state.player(PlayerId::new(0)).all_in_goal());
    assert_eq!(state.current_player(), PlayerId::new(0));
    assert!(state.eligible_pieces().is_empty());
    assert_eq!(is_terminal(&state), Some(PlayerId::new(0)));
}

#[test]
fn test_finished_game_accepts_nothing() {
    let state = apply_move(&roll(&one_step_from_winning(), die(1)), pid(0, 0));

    assert!(!can_roll(&state));
    assert!(legal_actions(&state).is_empty());
    assert_eq!(roll(&state, DieValue::SIX), state);
    assert_eq!(apply_move(&state, pid(0, 0)), state);
    assert_eq!(state.with_current_player(PlayerId::new(2)), state);
}

#[test]
fn test_legal_actions_follow_phase() {
    let state = create_initial_game_state();
    assert_eq!(legal_actions(&state).as_slice(), &[Action::Roll]);

    let state = roll(&state, DieValue::SIX);
    let actions = legal_actions(&state);
    assert_eq!(actions.len(), 4);
    assert!(actions.contains(&Action::Move(pid(0, 2))));
}
