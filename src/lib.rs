#![warn(missing_docs)]
//! A parallel sudoku engine
//!
//! ## Overview
//!
//! This crate solves, counts the solutions of, and generates standard
//! 9×9 sudoku boards. Boards cross the API as flat 81-cell digit buffers
//! (`0` = empty, row-major), which makes it easy to sit behind a thin
//! presentation layer that only renders and edits a grid of digits.
//!
//! Searching runs on a fixed pool of worker threads: the search tree is
//! split once at the root into independent sub-problems, workers race
//! through them, and the first solution (or a shared, capped solution
//! counter) ends the call.
//!
//! ## Example
//!
//! ```
//! use sudoku_engine::Engine;
//!
//! let engine = Engine::new(sudoku_engine::default_worker_count());
//!
//! // generate a full board, then solve it again
//! let mut board = [0; 81];
//! engine.generate_solved_board(&mut board);
//!
//! let mut solution = [0; 81];
//! let solved = engine.solve(&board, &mut solution).unwrap();
//! assert!(solved);
//! assert_eq!(solution, board);
//!
//! // a full board has exactly one completion: itself
//! assert_eq!(engine.count_solutions(&board, 10).unwrap(), 1);
//! ```

mod digit_set;
mod engine;
mod errors;
mod grid;
mod partition;
mod pool;
mod positions;
mod search;
mod types;

pub use crate::engine::Engine;
pub use crate::errors::{EngineError, InvalidInput};
pub use crate::pool::default_worker_count;
