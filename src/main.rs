use sudoku_engine::{default_worker_count, Engine};

// From https://en.wikipedia.org/wiki/Sudoku
#[rustfmt::skip]
static INPUT: [u8; 81] = [
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

const COUNT_CAP: usize = 1000;

fn main() {
    let engine = Engine::new(default_worker_count());

    println!("Input:");
    print_board(&INPUT);

    let mut solution = [0; 81];
    match engine.solve(&INPUT, &mut solution) {
        Ok(true) => {
            println!("Solved:");
            print_board(&solution);
        }
        Ok(false) => println!("No solution exists"),
        Err(err) => {
            eprintln!("solve failed: {}", err);
            return;
        }
    }

    match engine.count_solutions(&INPUT, COUNT_CAP) {
        Ok(count) if count == COUNT_CAP => println!("At least {} solutions", count),
        Ok(count) => println!("Exactly {} solution(s)", count),
        Err(err) => {
            eprintln!("count failed: {}", err);
            return;
        }
    }

    let mut board = [0; 81];
    engine.generate_solved_board(&mut board);
    println!("A freshly generated board:");
    print_board(&board);
}

fn print_board(board: &[u8; 81]) {
    for row in 0..9 {
        if row % 3 == 0 {
            println!("+---------+---------+---------+");
        }
        for col in 0..9 {
            if col % 3 == 0 {
                print!("|");
            }
            match board[row * 9 + col] {
                0 => print!(" _ "),
                num => print!(" {} ", num),
            }
        }
        println!("|");
    }
    println!("+---------+---------+---------+");
}
