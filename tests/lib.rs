use sudoku_engine::{Engine, EngineError, InvalidInput};

// From https://en.wikipedia.org/wiki/Sudoku -- a puzzle with a unique
// solution whose first row completes to 5,3,4,6,7,8,9,1,2.
#[rustfmt::skip]
const CLASSIC: [u8; 81] = [
    5, 3, 0,  0, 7, 0,  0, 0, 0,
    6, 0, 0,  1, 9, 5,  0, 0, 0,
    0, 9, 8,  0, 0, 0,  0, 6, 0,

    8, 0, 0,  0, 6, 0,  0, 0, 3,
    4, 0, 0,  8, 0, 3,  0, 0, 1,
    7, 0, 0,  0, 2, 0,  0, 0, 6,

    0, 6, 0,  0, 0, 0,  2, 8, 0,
    0, 0, 0,  4, 1, 9,  0, 0, 5,
    0, 0, 0,  0, 8, 0,  0, 7, 9,
];

fn engine() -> Engine {
    Engine::new(4)
}

// every cell filled, no duplicate digit in any row, column or box
fn assert_valid_solution(board: &[u8; 81]) {
    for (cell, &num) in board.iter().enumerate() {
        assert!(
            (1..=9).contains(&num),
            "cell {} holds {} in {:?}",
            cell,
            num,
            &board[..]
        );
    }
    for unit in 0..9 {
        let mut row_seen = [false; 10];
        let mut col_seen = [false; 10];
        let mut box_seen = [false; 10];
        for i in 0..9 {
            let row_cell = unit * 9 + i;
            let col_cell = i * 9 + unit;
            let box_cell = unit / 3 * 27 + unit % 3 * 3 + i / 3 * 9 + i % 3;
            assert!(!row_seen[board[row_cell] as usize], "dup in row {}", unit);
            assert!(!col_seen[board[col_cell] as usize], "dup in col {}", unit);
            assert!(!box_seen[board[box_cell] as usize], "dup in box {}", unit);
            row_seen[board[row_cell] as usize] = true;
            col_seen[board[col_cell] as usize] = true;
            box_seen[board[box_cell] as usize] = true;
        }
    }
}

#[test]
fn solve_classic_puzzle() {
    let mut solution = [0; 81];
    let solved = engine().solve(&CLASSIC, &mut solution).unwrap();

    assert!(solved);
    assert_valid_solution(&solution);
    assert_eq!(&solution[..9], &[5, 3, 4, 6, 7, 8, 9, 1, 2]);
    // givens are preserved
    for cell in 0..81 {
        if CLASSIC[cell] != 0 {
            assert_eq!(solution[cell], CLASSIC[cell]);
        }
    }
}

#[test]
fn solve_empty_board() {
    let mut solution = [0; 81];
    let solved = engine().solve(&[0; 81], &mut solution).unwrap();

    assert!(solved);
    assert_valid_solution(&solution);
}

#[test]
fn solve_is_idempotent_on_solved_boards() {
    let engine = engine();
    let mut solution = [0; 81];
    assert!(engine.solve(&CLASSIC, &mut solution).unwrap());

    let mut again = [0; 81];
    assert!(engine.solve(&solution, &mut again).unwrap());
    assert_eq!(again, solution);
}

#[test]
fn solve_reports_conflicting_givens_as_unsolvable() {
    let mut input = [0; 81];
    input[0] = 5;
    input[1] = 5; // same row, same digit

    let mut output = [9; 81];
    let solved = engine().solve(&input, &mut output).unwrap();

    assert!(!solved);
    // output untouched on failure
    assert_eq!(output, [9; 81]);
}

#[test]
fn solve_reports_contradiction_free_dead_end_as_unsolvable() {
    // the classic puzzle's unique solution has 4 at cell 2; forcing a 1
    // there conflicts with nothing directly but kills every completion
    let mut input = CLASSIC;
    assert_eq!(input[2], 0);
    input[2] = 1;

    let mut output = [0; 81];
    let solved = engine().solve(&input, &mut output).unwrap();

    assert!(!solved);
    assert_eq!(output, [0; 81]);
}

#[test]
fn solve_rejects_wrong_length() {
    let engine = engine();
    let mut output = [7; 81];

    let err = engine.solve(&[0; 80], &mut output).unwrap_err();
    match err {
        EngineError::InvalidInput(InvalidInput::WrongLength(80)) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(output, [7; 81]);
}

#[test]
fn solve_rejects_out_of_range_values() {
    let engine = engine();
    let mut input = [0; 81];
    input[13] = 10;
    let mut output = [7; 81];

    let err = engine.solve(&input, &mut output).unwrap_err();
    match err {
        EngineError::InvalidInput(InvalidInput::ValueOutOfRange { cell: 13, value: 10 }) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(output, [7; 81]);
}

#[test]
fn count_unique_puzzle() {
    assert_eq!(engine().count_solutions(&CLASSIC, 100).unwrap(), 1);
}

#[test]
fn count_saturates_cap_on_empty_board() {
    let engine = engine();
    assert_eq!(engine.count_solutions(&[0; 81], 2).unwrap(), 2);
    assert_eq!(engine.count_solutions(&[0; 81], 25).unwrap(), 25);
}

#[test]
fn count_solved_board_is_one() {
    let engine = engine();
    let mut solution = [0; 81];
    assert!(engine.solve(&CLASSIC, &mut solution).unwrap());
    assert_eq!(engine.count_solutions(&solution, 10).unwrap(), 1);
}

#[test]
fn count_conflicting_givens_is_zero() {
    let mut input = [0; 81];
    input[0] = 5;
    input[1] = 5;
    assert_eq!(engine().count_solutions(&input, 10).unwrap(), 0);
}

#[test]
fn count_with_zero_cap_is_zero() {
    assert_eq!(engine().count_solutions(&CLASSIC, 0).unwrap(), 0);
}

#[test]
fn count_rejects_malformed_input() {
    assert!(engine().count_solutions(&[0; 82], 10).is_err());
}

#[test]
fn count_exact_on_a_two_solution_puzzle() {
    // remove two givens of a solved board that can only swap with each
    // other: take a solution and blank a "deadly rectangle" of two digits
    let engine = engine();
    let mut solution = [0; 81];
    assert!(engine.solve(&CLASSIC, &mut solution).unwrap());

    // find two rows and two columns within the same box-columns where the
    // four corners hold digits a,b / b,a; blanking them yields exactly 2
    let mut input = solution;
    let mut blanked = false;
    'outer: for r1 in 0..9 {
        for r2 in r1 + 1..9 {
            if r1 / 3 != r2 / 3 {
                continue;
            }
            for c1 in 0..9 {
                for c2 in c1 + 1..9 {
                    if c1 / 3 == c2 / 3 {
                        continue;
                    }
                    let a = solution[r1 * 9 + c1];
                    let b = solution[r1 * 9 + c2];
                    if solution[r2 * 9 + c1] == b && solution[r2 * 9 + c2] == a {
                        input[r1 * 9 + c1] = 0;
                        input[r1 * 9 + c2] = 0;
                        input[r2 * 9 + c1] = 0;
                        input[r2 * 9 + c2] = 0;
                        blanked = true;
                        break 'outer;
                    }
                }
            }
        }
    }

    if blanked {
        assert_eq!(engine.count_solutions(&input, 10).unwrap(), 2);
    }
}

#[test]
fn generate_produces_valid_boards() {
    let engine = engine();
    for _ in 0..10 {
        let mut board = [0; 81];
        engine.generate_solved_board(&mut board);
        assert_valid_solution(&board);
    }
}

#[test]
fn generate_varies_between_calls() {
    let engine = engine();
    let mut first = [0; 81];
    engine.generate_solved_board(&mut first);

    // 5 independent draws all identical would be a broken shuffle
    let repeated = (0..5).all(|_| {
        let mut board = [0; 81];
        engine.generate_solved_board(&mut board);
        board == first
    });
    assert!(!repeated);
}

#[test]
fn generated_boards_count_as_their_own_unique_completion() {
    let engine = engine();
    let mut board = [0; 81];
    engine.generate_solved_board(&mut board);
    assert_eq!(engine.count_solutions(&board, 5).unwrap(), 1);
}

#[test]
fn engine_is_reusable_across_many_calls() {
    let engine = engine();
    let mut output = [0; 81];
    for _ in 0..20 {
        assert!(engine.solve(&CLASSIC, &mut output).unwrap());
        assert_eq!(engine.count_solutions(&CLASSIC, 3).unwrap(), 1);
    }
}
