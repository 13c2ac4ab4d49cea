// rule.rs - Conway's rule evaluated as one cooperative coroutine per row

use std::sync::Arc;

use tokio::runtime::Runtime;
use tokio::task::JoinSet;

use crate::error::{LifeError, LifeResult};

/// Standard Life: survive on 2 or 3 neighbors, birth on exactly 3
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Live cells in the Moore neighborhood of (row, col). Neighbors past the
/// board edge do not exist; there is no wraparound.
pub fn live_neighbors(snapshot: &[bool], size: usize, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for nr in row.saturating_sub(1)..=(row + 1).min(size - 1) {
        for nc in col.saturating_sub(1)..=(col + 1).min(size - 1) {
            if (nr, nc) != (row, col) && snapshot[nr * size + nc] {
                count += 1;
            }
        }
    }
    count
}

/// Row coroutine: next state of every cell in `row_index`
async fn process_row(row_index: usize, snapshot: Arc<[bool]>, size: usize) -> (usize, Vec<bool>) {
    let mut row_result = Vec::with_capacity(size);
    for col in 0..size {
        let count = live_neighbors(&snapshot, size, row_index, col);
        row_result.push(next_state(snapshot[row_index * size + col], count));
    }
    tokio::task::yield_now().await;  // Let sibling rows run
    (row_index, row_result)
}

/// Next generation of a `size` x `size` row-major snapshot.
///
/// Every row reads the same immutable snapshot, so no cell can see a neighbor's
/// new state from the generation being computed.
pub fn evaluate_generation(runtime: &Runtime, snapshot: Arc<[bool]>, size: usize) -> LifeResult<Vec<bool>> {
    runtime.block_on(async move {
        let mut rows = JoinSet::new();
        for row in 0..size {
            rows.spawn(process_row(row, Arc::clone(&snapshot), size));
        }

        let mut next = vec![false; size * size];
        while let Some(joined) = rows.join_next().await {
            let (row_index, completed_row) = joined?;
            next[row_index * size..(row_index + 1) * size].copy_from_slice(&completed_row);
        }
        Ok::<_, LifeError>(next)
    })
}
