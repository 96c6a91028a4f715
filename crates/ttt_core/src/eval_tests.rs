use super::*;

fn board_with_line(line: [Pos; 3], side: Side) -> Board {
    let mut board = Board::new();
    for pos in line {
        board.push(pos, side);
    }
    board
}

#[test]
fn test_every_line_scores_for_its_owner() {
    for line in LINES {
        assert_eq!(evaluate(&board_with_line(line, Side::Human)), HUMAN_WIN);
        assert_eq!(
            evaluate(&board_with_line(line, Side::Automated)),
            AUTOMATED_WIN
        );
    }
}

#[test]
fn test_empty_board_is_neutral() {
    assert_eq!(evaluate(&Board::new()), NEUTRAL);
    assert_eq!(outcome(&Board::new()), None);
}

#[test]
fn test_mixed_lines_do_not_score() {
    let board = Board::from_rows(["XXO", "OOX", "XOX"]).unwrap();
    assert_eq!(evaluate(&board), NEUTRAL);
}

#[test]
fn test_two_in_a_row_is_not_a_win() {
    let board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
    assert_eq!(evaluate(&board), NEUTRAL);
    assert_eq!(winner(&board), None);
}

#[test]
fn test_human_row_wins_regardless_of_other_cells() {
    let board = Board::from_rows(["XXX", "   ", "   "]).unwrap();
    assert_eq!(evaluate(&board), HUMAN_WIN);

    let board = Board::from_rows(["XXX", "OO ", "  O"]).unwrap();
    assert_eq!(evaluate(&board), HUMAN_WIN);
}

#[test]
fn test_rows_are_checked_before_columns() {
    // Not reachable in a legal game, but the check order must stay fixed.
    let board = Board::from_rows(["OOO", "XXX", "   "]).unwrap();
    assert_eq!(evaluate(&board), AUTOMATED_WIN);

    let board = Board::from_rows(["XOO", "XO ", "XO "]).unwrap();
    assert_eq!(evaluate(&board), HUMAN_WIN);
}

#[test]
fn test_evaluate_does_not_mutate() {
    let board = Board::from_rows(["XO ", " X ", "O  "]).unwrap();
    let before = board.clone();
    let _ = evaluate(&board);
    assert_eq!(board, before);
}

#[test]
fn test_outcome_variants() {
    let win = Board::from_rows(["X O", "XO ", "X  "]).unwrap();
    assert_eq!(outcome(&win), Some(Outcome::HumanWin));

    let loss = Board::from_rows(["XXO", " O ", "OX "]).unwrap();
    assert_eq!(outcome(&loss), Some(Outcome::AutomatedWin));

    let draw = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
    assert!(draw.is_full());
    assert_eq!(outcome(&draw), Some(Outcome::Draw));

    let running = Board::from_rows(["XO ", "   ", "   "]).unwrap();
    assert_eq!(outcome(&running), None);
}
