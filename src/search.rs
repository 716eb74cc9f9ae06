//! Constraint propagation and the backtracking search.
//!
//! Propagation places forced digits (naked and hidden singles) until
//! nothing more can be deduced or a contradiction shows up. The search
//! branches on the empty cell with the fewest candidates, propagates after
//! every trial placement and unwinds over an explicit trail, so the grid is
//! mutated in place and restored exactly on backtrack. No grid copies are
//! taken below the root.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::seq::SliceRandom;

use crate::digit_set::DigitSet;
use crate::grid::Grid;
use crate::positions::{cells_of_box, cells_of_col, cells_of_row};
use crate::types::{Entry, Unsolvable};

/// Shared, cap-bounded solution counter.
///
/// Workers counting leaves of different sub-problems all record into the
/// same counter. The stored count never exceeds the cap; once it is full
/// every searcher stops branching.
pub(crate) struct SolutionCounter {
    found: AtomicUsize,
    cap: usize,
}

impl SolutionCounter {
    pub fn new(cap: usize) -> SolutionCounter {
        SolutionCounter {
            found: AtomicUsize::new(0),
            cap,
        }
    }

    /// Record one solution, unless the cap is already reached.
    pub fn record(&self) {
        let _ = self
            .found
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
                if count < self.cap {
                    Some(count + 1)
                } else {
                    None
                }
            });
    }

    pub fn is_full(&self) -> bool {
        self.count() >= self.cap
    }

    pub fn count(&self) -> usize {
        self.found.load(Ordering::Relaxed)
    }
}

/// Order in which candidate digits are tried at a branch point.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum BranchOrder {
    /// Ascending numeric order, for deterministic solving and counting.
    Ascending,
    /// A fresh shuffle at every branch point, for board generation.
    Shuffled,
}

/// Where found solutions go.
pub(crate) enum Solutions<'a> {
    /// Stop at the first complete assignment and keep it.
    One(&'a mut Option<[u8; 81]>),
    /// Keep branching past solutions, counting leaves into a shared counter.
    Count(&'a SolutionCounter),
}

/// Whether the search should keep exploring sibling branches.
#[derive(PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Place naked and hidden singles until fixpoint.
///
/// Every placement is appended to `trail`. On contradiction (a cell with no
/// candidates, or a digit with no home left in some unit) the caller must
/// unwind the trail back to its own mark; this function does not undo its
/// work.
pub(crate) fn propagate(grid: &mut Grid, trail: &mut Vec<u8>) -> Result<(), Unsolvable> {
    loop {
        let mut progress = false;
        naked_singles(grid, trail, &mut progress)?;
        hidden_singles(grid, trail, &mut progress)?;
        if !progress {
            return Ok(());
        }
    }
}

// A cell with exactly one candidate gets that digit; a cell with none is a
// contradiction.
fn naked_singles(grid: &mut Grid, trail: &mut Vec<u8>, progress: &mut bool) -> Result<(), Unsolvable> {
    for cell in 0..81u8 {
        if grid.get(cell) != 0 {
            continue;
        }
        let cands = grid.candidates(cell);
        if cands.is_empty() {
            return Err(Unsolvable);
        }
        if let Some(num) = cands.unique() {
            grid.place(Entry { cell, num })?;
            trail.push(cell);
            *progress = true;
        }
    }
    Ok(())
}

// A digit missing from a unit that fits in exactly one of the unit's empty
// cells goes there; a missing digit with no possible cell is a
// contradiction.
fn hidden_singles(grid: &mut Grid, trail: &mut Vec<u8>, progress: &mut bool) -> Result<(), Unsolvable> {
    for unit in 0..9 {
        hidden_singles_in(grid, trail, progress, |g| g.row_used(unit), || cells_of_row(unit))?;
        hidden_singles_in(grid, trail, progress, |g| g.col_used(unit), || cells_of_col(unit))?;
        hidden_singles_in(grid, trail, progress, |g| g.box_used(unit), || cells_of_box(unit))?;
    }
    Ok(())
}

fn hidden_singles_in<U, C, I>(
    grid: &mut Grid,
    trail: &mut Vec<u8>,
    progress: &mut bool,
    used: U,
    cells: C,
) -> Result<(), Unsolvable>
where
    U: Fn(&Grid) -> DigitSet,
    C: Fn() -> I,
    I: Iterator<Item = u8>,
{
    for num in 1..=9u8 {
        // re-read per digit, earlier placements in this unit count
        if used(grid).contains(num) {
            continue;
        }

        let mut home = None;
        let mut n_homes = 0;
        for cell in cells() {
            if grid.get(cell) == 0 && grid.candidates(cell).contains(num) {
                home = Some(cell);
                n_homes += 1;
            }
        }

        match (n_homes, home) {
            (0, _) => return Err(Unsolvable),
            (1, Some(cell)) => {
                grid.place(Entry { cell, num })?;
                trail.push(cell);
                *progress = true;
            }
            _ => {}
        }
    }
    Ok(())
}

/// The empty cell with the fewest candidates, ties broken by lowest index.
/// `None` when the grid is full.
pub(crate) fn pick_cell(grid: &Grid) -> Option<(u8, DigitSet)> {
    let mut best: Option<(u8, DigitSet)> = None;
    for cell in grid.empty_cells() {
        let cands = grid.candidates(cell);
        match best {
            Some((_, best_cands)) if best_cands.len() <= cands.len() => {}
            _ => best = Some((cell, cands)),
        }
        if cands.len() <= 2 {
            // propagation already placed singles; 2 is as low as it gets
            break;
        }
    }
    best
}

fn unwind(grid: &mut Grid, trail: &mut Vec<u8>, mark: usize) {
    while trail.len() > mark {
        if let Some(cell) = trail.pop() {
            grid.unplace(cell);
        }
    }
}

// One recursion step: pick a cell, try its candidates in order, propagate
// after each trial, unwind on failure. The cancel flag is polled once per
// step, so a sibling's success stops this search within one step's work.
fn search(
    grid: &mut Grid,
    trail: &mut Vec<u8>,
    order: BranchOrder,
    cancel: &AtomicBool,
    solutions: &mut Solutions<'_>,
) -> Flow {
    if cancel.load(Ordering::Relaxed) {
        return Flow::Stop;
    }
    if let Solutions::Count(counter) = solutions {
        // a sibling sub-problem may have filled the counter in the meantime
        if counter.is_full() {
            return Flow::Stop;
        }
    }

    let (cell, cands) = match pick_cell(grid) {
        Some(branch) => branch,
        None => {
            // complete assignment
            return match solutions {
                Solutions::One(slot) => {
                    **slot = Some(grid.to_bytes());
                    Flow::Stop
                }
                Solutions::Count(counter) => {
                    counter.record();
                    if counter.is_full() {
                        Flow::Stop
                    } else {
                        Flow::Continue
                    }
                }
            };
        }
    };

    let mut digits: Vec<u8> = cands.iter().collect();
    if order == BranchOrder::Shuffled {
        digits.shuffle(&mut rand::thread_rng());
    }

    for num in digits {
        let mark = trail.len();
        if grid.place(Entry { cell, num }).is_err() {
            continue;
        }
        trail.push(cell);

        let flow = match propagate(grid, trail) {
            Ok(()) => search(grid, trail, order, cancel, solutions),
            Err(Unsolvable) => Flow::Continue,
        };

        unwind(grid, trail, mark);
        if flow == Flow::Stop {
            return Flow::Stop;
        }
    }

    Flow::Continue
}

/// Find the first complete assignment of an already-propagated grid.
pub(crate) fn find_first(mut grid: Grid, cancel: &AtomicBool) -> Option<[u8; 81]> {
    if grid.is_full() {
        return Some(grid.to_bytes());
    }
    let mut solution = None;
    let mut trail = Vec::with_capacity(grid.n_empty() as usize);
    search(
        &mut grid,
        &mut trail,
        BranchOrder::Ascending,
        cancel,
        &mut Solutions::One(&mut solution),
    );
    solution
}

/// Count the complete assignments of an already-propagated grid into a
/// shared counter, stopping as soon as the counter is full.
pub(crate) fn count_into(mut grid: Grid, counter: &SolutionCounter, cancel: &AtomicBool) {
    if grid.is_full() {
        counter.record();
        return;
    }
    let mut trail = Vec::with_capacity(grid.n_empty() as usize);
    search(
        &mut grid,
        &mut trail,
        BranchOrder::Ascending,
        cancel,
        &mut Solutions::Count(counter),
    );
}

/// Complete a grid with randomized branch order.
///
/// Every full board reachable from the input is a possible result; for the
/// empty grid this always succeeds.
pub(crate) fn fill_random(mut grid: Grid) -> Option<[u8; 81]> {
    if grid.is_full() {
        return Some(grid.to_bytes());
    }
    let mut solution = None;
    let mut trail = Vec::with_capacity(grid.n_empty() as usize);
    let cancel = AtomicBool::new(false);
    search(
        &mut grid,
        &mut trail,
        BranchOrder::Shuffled,
        &cancel,
        &mut Solutions::One(&mut solution),
    );
    solution
}
