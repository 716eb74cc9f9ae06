//! Single-level splitting of a search into independent sub-problems.
//!
//! Branching factors shrink fast with depth, so splitting only at the root
//! already spreads the load well without any coordination below it. Each
//! sub-problem is a grid copy with one root candidate placed and
//! propagated; the copies share nothing, so workers need no locks around
//! their boards.

use crate::grid::Grid;
use crate::search::{pick_cell, propagate};
use crate::types::{Entry, Unsolvable};

/// Result of splitting an already-propagated root grid.
pub(crate) enum RootSplit {
    /// Propagation alone completed the grid; no search needed.
    Solved(Grid),
    /// One independent, propagated sub-grid per surviving root candidate.
    /// Empty when every candidate contradicts immediately.
    Branches(Vec<Grid>),
}

/// Split at the root's minimum-candidate cell, one sub-grid per legal
/// digit. Candidates whose placement propagates into a contradiction are
/// dropped here rather than handed to a worker.
pub(crate) fn split_root(root: &Grid) -> RootSplit {
    if root.is_full() {
        return RootSplit::Solved(*root);
    }

    let mut branches = Vec::new();
    if let Some((cell, cands)) = pick_cell(root) {
        for num in cands {
            let mut sub = *root;
            let mut trail = Vec::new();
            if sub.place(Entry { cell, num }).is_err() {
                continue;
            }
            match propagate(&mut sub, &mut trail) {
                Ok(()) => branches.push(sub),
                Err(Unsolvable) => {}
            }
        }
    }
    RootSplit::Branches(branches)
}
