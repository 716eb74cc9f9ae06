//! The engine facade: validate, dispatch, marshal.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::errors::{EngineError, InvalidInput};
use crate::grid::Grid;
use crate::partition::{split_root, RootSplit};
use crate::pool::{Task, WorkerPool};
use crate::search::{fill_random, propagate, SolutionCounter};
use crate::types::{Entry, Unsolvable};

/// The sudoku engine.
///
/// Owns the worker pool, which is created once and reused for every
/// operation. Presentation layers hand in 81-cell digit buffers (`0` =
/// empty) and get back 81-cell results plus a status value; nothing else
/// crosses the boundary.
pub struct Engine {
    pool: WorkerPool,
}

impl Engine {
    /// Create an engine backed by `n_workers` worker threads (clamped to at
    /// least one). Call once and reuse;
    /// [`default_worker_count`](crate::default_worker_count) gives the
    /// host's available parallelism.
    pub fn new(n_workers: usize) -> Engine {
        Engine {
            pool: WorkerPool::new(n_workers),
        }
    }

    /// Solve the puzzle in `input`.
    ///
    /// Returns `Ok(true)` and writes the completed board to `output` when a
    /// solution exists. Returns `Ok(false)` for unsolvable or conflicting
    /// inputs, leaving `output` untouched. When several solutions exist,
    /// which one is returned depends on worker timing.
    pub fn solve(&self, input: &[u8], output: &mut [u8; 81]) -> Result<bool, EngineError> {
        let values = validate(input)?;
        let mut grid = match Grid::from_givens(&values) {
            Ok(grid) => grid,
            Err(Unsolvable) => return Ok(false),
        };

        let mut trail = Vec::new();
        if propagate(&mut grid, &mut trail).is_err() {
            return Ok(false);
        }

        let branches = match split_root(&grid) {
            RootSplit::Solved(solved) => {
                *output = *solved.values();
                return Ok(true);
            }
            RootSplit::Branches(branches) => branches,
        };
        if branches.is_empty() {
            return Ok(false);
        }
        let n_branches = branches.len();

        let cancel = Arc::new(AtomicBool::new(false));
        let (result_tx, result_rx) = crossbeam_channel::bounded(n_branches);
        for sub in branches {
            self.pool.submit(Task::Solve {
                grid: sub,
                cancel: Arc::clone(&cancel),
                result_tx: result_tx.clone(),
            });
        }
        drop(result_tx);

        let mut solution = None;
        let mut reported = 0;
        for result in result_rx.iter() {
            reported += 1;
            if solution.is_none() {
                solution = result;
            }
        }
        if reported != n_branches {
            return Err(EngineError::WorkerFailure);
        }

        match solution {
            Some(solution) => {
                *output = solution;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Count the puzzle's solutions, saturating at `cap`.
    ///
    /// A return value below `cap` is the exact count; `cap` itself means
    /// "at least `cap`". Sparse boards can have combinatorially many
    /// completions, so the cap is what bounds the runtime.
    pub fn count_solutions(&self, input: &[u8], cap: usize) -> Result<usize, EngineError> {
        let values = validate(input)?;
        if cap == 0 {
            return Ok(0);
        }
        let mut grid = match Grid::from_givens(&values) {
            Ok(grid) => grid,
            Err(Unsolvable) => return Ok(0),
        };

        let mut trail = Vec::new();
        if propagate(&mut grid, &mut trail).is_err() {
            return Ok(0);
        }

        let branches = match split_root(&grid) {
            RootSplit::Solved(_) => return Ok(1),
            RootSplit::Branches(branches) => branches,
        };
        let n_branches = branches.len();

        let counter = Arc::new(SolutionCounter::new(cap));
        let cancel = Arc::new(AtomicBool::new(false));
        let (done_tx, done_rx) = crossbeam_channel::bounded(n_branches);
        for sub in branches {
            self.pool.submit(Task::Count {
                grid: sub,
                counter: Arc::clone(&counter),
                cancel: Arc::clone(&cancel),
                done_tx: done_tx.clone(),
            });
        }
        drop(done_tx);

        if done_rx.iter().count() != n_branches {
            return Err(EngineError::WorkerFailure);
        }
        Ok(counter.count())
    }

    /// Fill `output` with a random complete, valid board.
    ///
    /// The first row is seeded with a random permutation before the search;
    /// candidate digits are shuffled at every branch point below it.
    pub fn generate_solved_board(&self, output: &mut [u8; 81]) {
        let mut grid = Grid::empty();

        let mut first_row = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        first_row.shuffle(&mut rand::thread_rng());
        for (cell, &num) in first_row.iter().enumerate() {
            // distinct digits in one row cannot conflict on an empty grid
            let _ = grid.place(Entry {
                cell: cell as u8,
                num,
            });
        }

        let solution = fill_random(grid).expect("an empty grid is always completable");
        *output = solution;
    }

    /// Number of worker threads backing this engine.
    pub fn n_workers(&self) -> usize {
        self.pool.n_workers()
    }
}

fn validate(input: &[u8]) -> Result<[u8; 81], InvalidInput> {
    if input.len() != 81 {
        return Err(InvalidInput::WrongLength(input.len()));
    }
    let mut values = [0; 81];
    for (cell, &value) in input.iter().enumerate() {
        if value > 9 {
            return Err(InvalidInput::ValueOutOfRange { cell, value });
        }
        values[cell] = value;
    }
    Ok(values)
}
