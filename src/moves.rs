use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::grid::{CellCoord, CellRect, Direction};
use crate::vehicle::OFF_BOARD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved(CellCoord),
    Cleared,
    Blocked,
    Ignored,
}

// Pure decision; the board is not touched. Checked in order:
// unknown/dead id, collision against alive vehicles, board-edge exit.
pub fn resolve_move(board: &Board, id: u32, dir: Direction) -> MoveOutcome {
    let Some(vehicle) = board.vehicle(id).filter(|v| v.alive) else {
        return MoveOutcome::Ignored;
    };
    let (w, h) = vehicle.kind.footprint();
    let (dx, dy) = dir.delta();
    let x = (vehicle.pos.x + dx).clamp(0, board.width() - w);
    let y = (vehicle.pos.y + dy).clamp(0, board.height() - h);
    let candidate = CellRect::new(CellCoord::new(x, y), w, h);
    if board.overlaps_alive(&candidate, Some(id)) {
        return MoveOutcome::Blocked;
    }
    // Touching any edge counts as exiting, so vehicles that start flush
    // against the top/left edge clear on their first legal move.
    if x <= 0 || x >= board.width() - w || y <= 0 || y >= board.height() - h {
        return MoveOutcome::Cleared;
    }
    MoveOutcome::Moved(CellCoord::new(x, y))
}

pub fn apply_move(board: &mut Board, id: u32, dir: Direction) -> MoveOutcome {
    let outcome = resolve_move(board, id, dir);
    match outcome {
        MoveOutcome::Moved(pos) => {
            if let Some(v) = board.vehicle_mut(id) {
                v.pos = pos;
            }
        }
        MoveOutcome::Cleared => {
            if let Some(v) = board.vehicle_mut(id) {
                v.alive = false;
                v.pos = OFF_BOARD;
            }
        }
        MoveOutcome::Blocked | MoveOutcome::Ignored => {}
    }
    outcome
}
