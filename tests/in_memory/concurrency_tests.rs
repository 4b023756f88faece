//! Concurrent access tests for the board controller.

use super::helpers::{TestController, assert_unique_placement, controller, observed_controller};
use eyre::ensure;
use rstest::rstest;
use taskboard::board::{domain::Column, services::CreateThingRequest};

const WORKERS: usize = 8;
const MOVES_PER_WORKER: usize = 50;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_moves_never_duplicate_things(controller: TestController) -> eyre::Result<()> {
    let mut ids = Vec::new();
    for _ in 0..6 {
        ids.push(controller.create(CreateThingRequest::new(Column::Todo))?.id());
    }

    let mut handles = Vec::new();
    for worker in 0..WORKERS {
        let board = controller.clone();
        let ids = ids.clone();
        handles.push(tokio::task::spawn_blocking(move || -> eyre::Result<()> {
            for step in 0..MOVES_PER_WORKER {
                let seed = worker.wrapping_mul(31).wrapping_add(step);
                let Some(id) = ids.get(seed % ids.len()) else {
                    continue;
                };
                let column = Column::ALL
                    .get(seed % Column::ALL.len())
                    .copied()
                    .unwrap_or(Column::Todo);
                let index = isize::try_from(seed % 4)? - 1;
                board.move_thing(*id, column, index)?;
            }
            Ok(())
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_unique_placement(&controller)?;
    let total: usize = controller
        .board_snapshot()?
        .iter()
        .map(|snapshot| snapshot.things.len())
        .sum();
    ensure!(total == ids.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_and_deletes_stay_consistent() -> eyre::Result<()> {
    let (controller, projection) = observed_controller()?;

    let mut handles = Vec::new();
    for worker in 0..WORKERS {
        let board = controller.clone();
        handles.push(tokio::task::spawn_blocking(move || -> eyre::Result<usize> {
            let mut kept = 0;
            for step in 0..MOVES_PER_WORKER {
                let column = Column::ALL
                    .get((worker + step) % Column::ALL.len())
                    .copied()
                    .unwrap_or(Column::Done);
                let created = board.create(CreateThingRequest::new(column))?;
                if step % 3 == 0 {
                    board.delete(created.id())?;
                } else {
                    kept += 1;
                }
            }
            Ok(kept)
        }));
    }
    let mut expected = 0;
    for handle in handles {
        expected += handle.await??;
    }

    assert_unique_placement(&controller)?;
    let total: usize = controller
        .board_snapshot()?
        .iter()
        .map(|snapshot| snapshot.things.len())
        .sum();
    ensure!(total == expected);
    // Out-of-order deliveries are discarded, so the projection ends on the
    // latest revision of every column.
    for column in Column::ALL {
        ensure!(projection.ids(column) == controller.snapshot(column)?.ids());
    }
    Ok(())
}
