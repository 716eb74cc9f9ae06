//! Fixed pool of long-lived search workers.
//!
//! Workers are spawned once, block on a shared MPMC task queue and are
//! reused across operations. One top-level call dispatches its sub-problems
//! as tasks, then blocks collecting results on a per-call channel. The only
//! cross-worker state during a call is the cancellation flag and, for
//! counting, the shared solution counter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use crate::grid::Grid;
use crate::search::{count_into, find_first, SolutionCounter};

/// Number of workers matching the host's available parallelism.
pub fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(|parallelism| parallelism.get())
        .unwrap_or(4)
}

/// One sub-problem, handed to whichever worker pulls it first.
pub(crate) enum Task {
    /// Search the sub-grid for any complete assignment. The first task to
    /// find one raises the cancel flag before publishing, so siblings stop
    /// within one recursion step.
    Solve {
        grid: Grid,
        cancel: Arc<AtomicBool>,
        result_tx: Sender<Option<[u8; 81]>>,
    },
    /// Count the sub-grid's complete assignments into the shared counter,
    /// then report completion.
    Count {
        grid: Grid,
        counter: Arc<SolutionCounter>,
        cancel: Arc<AtomicBool>,
        done_tx: Sender<()>,
    },
}

impl Task {
    fn run(self) {
        match self {
            Task::Solve {
                grid,
                cancel,
                result_tx,
            } => {
                let solution = find_first(grid, &cancel);
                if solution.is_some() {
                    cancel.store(true, Ordering::Relaxed);
                }
                let _ = result_tx.send(solution);
            }
            Task::Count {
                grid,
                counter,
                cancel,
                done_tx,
            } => {
                count_into(grid, &counter, &cancel);
                let _ = done_tx.send(());
            }
        }
    }
}

/// The long-lived worker threads and the queue feeding them.
pub(crate) struct WorkerPool {
    task_tx: Option<Sender<Task>>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `n_workers` threads (at least one) that pull tasks until the
    /// pool is dropped.
    pub fn new(n_workers: usize) -> WorkerPool {
        let n_workers = n_workers.max(1);
        let (task_tx, task_rx) = crossbeam_channel::unbounded::<Task>();

        let mut workers = Vec::with_capacity(n_workers);
        for id in 0..n_workers {
            let rx = task_rx.clone();
            let handle = thread::Builder::new()
                .name(format!("sudoku-worker-{}", id))
                .spawn(move || worker_loop(rx))
                .expect("failed to spawn worker thread");
            workers.push(handle);
        }

        WorkerPool {
            task_tx: Some(task_tx),
            workers,
        }
    }

    pub fn n_workers(&self) -> usize {
        self.workers.len()
    }

    /// Queue a task. If every worker has died the task is dropped, which
    /// disconnects its result channel and surfaces as a failed call.
    pub fn submit(&self, task: Task) {
        if let Some(task_tx) = &self.task_tx {
            let _ = task_tx.send(task);
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // disconnect the queue so blocked workers see it close
        self.task_tx.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(task_rx: Receiver<Task>) {
    while let Ok(task) = task_rx.recv() {
        task.run();
    }
}
