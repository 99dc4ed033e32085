use crate::board::Board;
use crate::session::{Phase, Session};

pub const VEHICLE_PANEL_HEADING: &str = "Vehicles";
pub const LOG_PANEL_HEADING: &str = "Events";

pub const IDLE_HINT: &str =
	"Click vehicles to select them, then use arrow keys or WASD to move them out of the intersection!";
pub const SELECT_HINT: &str = "Click a vehicle to select it";
pub const MOVE_HINT: &str = "Use arrow keys or WASD to move the selected vehicle";

#[derive(Debug, Clone, Copy)]
pub struct HudControls {
	pub start_label: &'static str,
	pub reset_label: &'static str,
	pub status: &'static str,
}

pub fn hud_controls(phase: Phase) -> HudControls {
	HudControls {
		start_label: "Start Game",
		reset_label: "Reset",
		status: phase_label(phase),
	}
}

pub fn phase_label(phase: Phase) -> &'static str {
	match phase {
		Phase::Idle => "Idle",
		Phase::Playing => "Playing",
		Phase::GameOver => "Game Over",
	}
}

pub fn format_hud(session: &Session) -> String {
	format!(
		"Score: {} | Cleared: {} | Level {} | {}s left",
		session.score(),
		session.cleared(),
		session.level(),
		session.time_left()
	)
}

pub fn instruction_line(phase: Phase, selected: Option<u32>) -> &'static str {
	match phase {
		Phase::Playing if selected.is_some() => MOVE_HINT,
		Phase::Playing => SELECT_HINT,
		_ => IDLE_HINT,
	}
}

pub fn format_side_panel(board: &Board, selected: Option<u32>) -> Vec<String> {
	let mut out = Vec::new();
	out.push(format!("[{}]", VEHICLE_PANEL_HEADING));
	for v in board.alive() {
		let marker = if selected == Some(v.id) { " (selected)" } else { "" };
		out.push(format!(
			"{} #{} at ({}, {}){}",
			v.kind.label(),
			v.id,
			v.pos.x,
			v.pos.y,
			marker
		));
	}
	out
}
