use goldmines_core::*;

fn all_coords(side: Coord) -> impl Iterator<Item = Coord2> {
    (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
}

#[test]
fn easy_single_player_first_click_is_safe() {
    for seed in 0..100 {
        let state = GameState::new().start_game(GameMode::Single, 1, Difficulty::Easy, seed);

        let (next, outcome) = state.try_reveal((0, 0)).unwrap();

        assert_eq!(next.board().side(), 8);
        assert_eq!(next.board().mine_count(), 10);
        assert!(!next.board()[(0, 0)].is_mine);
        assert!(matches!(
            outcome,
            RevealOutcome::Revealed { .. } | RevealOutcome::Gold { .. }
        ));
        assert_eq!(next.status(), GameStatus::Playing);
    }
}

#[test]
fn two_player_mine_hit_moves_turn_on() {
    let board = Board::from_mine_coords(8, &[(3, 3), (6, 1)]).unwrap();
    let state = GameState::new()
        .start_game(GameMode::Multi, 2, Difficulty::Easy, 0)
        .with_board(board);
    assert_eq!(state.mine_penalty(), 5);

    let next = state.reveal((3, 3));

    let first = &next.players()[0];
    assert_eq!(first.score, -5);
    assert_eq!(first.mines_hit, 1);
    assert_eq!(next.status(), GameStatus::Playing);
    assert_eq!(next.current_player_index(), 1);
}

#[test]
fn extra_flag_past_mine_count_is_refused() {
    let board = Board::from_mine_coords(4, &[(0, 0), (3, 3)]).unwrap();
    let mut state = GameState::new()
        .start_game(GameMode::Single, 1, Difficulty::Easy, 0)
        .with_board(board);
    state = state.toggle_flag((1, 1)).toggle_flag((2, 2));
    assert_eq!(state.flags_placed(), state.mines_count());

    let next = state.toggle_flag((0, 3));

    assert_eq!(next.flags_placed(), 2);
    assert!(!next.board()[(0, 3)].is_flagged);
}

/// Plays a whole multiplayer game revealing only safe cells and checks the invariants after
/// every move.
#[test]
fn full_multiplayer_game_keeps_invariants() {
    let mut state = GameState::new().start_game(GameMode::Multi, 3, Difficulty::Easy, 2024);
    state = state.reveal((4, 4));
    let safe: Vec<_> = all_coords(8)
        .filter(|&coords| !state.board()[coords].is_mine && !state.board()[coords].is_revealed)
        .collect();

    let mut stamps = std::collections::HashMap::new();
    for (turn, coords) in safe.iter().copied().enumerate() {
        assert_eq!(state.status(), GameStatus::Playing);
        let expected_player = (turn + 1) % 3;
        assert_eq!(state.current_player_index(), expected_player);

        state = state.reveal(coords);
        stamps.insert(coords, state.board()[coords].revealed_by);

        for cell in state.board().cells() {
            assert_eq!(cell.is_revealed, cell.revealed_by.is_some());
            assert!(cell.neighbor_mines <= MAX_NEIGHBOR_MINES);
        }
        for (&seen, &by) in &stamps {
            assert_eq!(state.board()[seen].revealed_by, by);
        }
    }

    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.leaderboard().len(), 3);
    let total: i32 = state.players().iter().map(|p| p.score).sum();
    let expected: i32 = state
        .board()
        .cells()
        .filter(|cell| !cell.is_mine)
        .map(Cell::points)
        .sum();
    assert_eq!(total, expected);
}

#[test]
fn won_only_once_the_last_safe_cell_is_open() {
    let state = GameState::new().start_game(GameMode::Single, 1, Difficulty::Easy, 77);
    let mut state = state.reveal((7, 0));
    let mut remaining: Vec<_> = all_coords(8)
        .filter(|&coords| !state.board()[coords].is_mine && !state.board()[coords].is_revealed)
        .collect();

    while let Some(coords) = remaining.pop() {
        assert_eq!(state.status(), GameStatus::Playing);
        state = state.reveal(coords);
    }

    assert_eq!(state.status(), GameStatus::Won);
    assert!(state.board().is_cleared());
}

#[test]
fn leaderboard_merges_sessions_and_stays_sorted() {
    let board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
    let mut state = GameState::new();

    for round in 0..6 {
        state = state
            .start_game(GameMode::Multi, 2, Difficulty::Easy, round)
            .with_board(board.clone())
            .set_mine_penalty(round as i32 + 1);
        state = state.reveal((0, 0)).reveal((0, 1)).reveal((1, 0)).reveal((1, 1));
        assert_eq!(state.status(), GameStatus::Won);
    }

    let scores: Vec<_> = state.leaderboard().iter().map(|p| p.score).collect();
    assert_eq!(scores.len(), LEADERBOARD_SIZE);
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(scores[0], 2);
}

#[test]
fn state_round_trips_through_json() {
    let state = GameState::new()
        .start_game(GameMode::Multi, 2, Difficulty::Medium, 3)
        .reveal((5, 5))
        .toggle_flag((0, 0));

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
}
