pub mod board;
pub mod grid;
pub mod hud;
pub mod layout;
pub mod moves;
pub mod progress;
pub mod session;
pub mod vehicle;

// Re-exports for convenience in tests and integration users.
pub use board::{Board, PLACEMENT_BUDGET};
pub use grid::{CellCoord, CellRect, Direction};
pub use hud::{
    HudControls, IDLE_HINT, LOG_PANEL_HEADING, MOVE_HINT, SELECT_HINT, VEHICLE_PANEL_HEADING,
    format_hud, format_side_panel, hud_controls, instruction_line, phase_label,
};
pub use layout::{LAYOUT_VERSION, LayoutError, LevelLayout, VehiclePlacement, build_board};
pub use moves::{MoveOutcome, apply_move, resolve_move};
pub use progress::Progress;
pub use session::{Phase, Rules, Session};
pub use vehicle::{OFF_BOARD, Vehicle, VehicleKind};
