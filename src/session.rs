use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::grid::Direction;
use crate::moves::{MoveOutcome, apply_move};
use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
	Idle,
	Playing,
	GameOver,
}

#[derive(Debug, Clone, Copy)]
pub struct Rules {
	pub board_width: i32,
	pub board_height: i32,
	pub start_time: u32,
	pub clear_reward: u32,
	pub level_score_bonus: u32,
	pub level_time_bonus: u32,
	pub base_vehicles: u32,
	pub max_vehicles: u32,
	pub advance_threshold: u32,
	pub xp_multiplier: u32,
}

impl Default for Rules {
	fn default() -> Self {
		Self {
			board_width: 12,
			board_height: 12,
			start_time: 30,
			clear_reward: 100,
			level_score_bonus: 500,
			level_time_bonus: 15,
			base_vehicles: 8,
			max_vehicles: 15,
			advance_threshold: 2,
			xp_multiplier: 10,
		}
	}
}

impl Rules {
	// Levels request more vehicles until the cap.
	pub fn vehicle_count(&self, level: u32) -> u32 {
		(self.base_vehicles + level).min(self.max_vehicles)
	}
}

#[derive(Debug)]
pub struct Session {
	rules: Rules,
	rng: StdRng,
	phase: Phase,
	level: u32,
	time_left: u32,
	progress: Progress,
	selected: Option<u32>,
	board: Board,
}

impl Session {
	pub fn new(rules: Rules, seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
			phase: Phase::Idle,
			level: 1,
			time_left: rules.start_time,
			progress: Progress::new(),
			selected: None,
			board: Board::new(rules.board_width, rules.board_height),
			rules,
		}
	}

	pub fn start(&mut self) {
		if self.phase != Phase::Idle {
			return;
		}
		let board = Board::generate(
			self.rules.board_width,
			self.rules.board_height,
			self.rules.vehicle_count(1),
			&mut self.rng,
		);
		self.begin(board);
	}

	// Scripted variant of start for externally authored layouts.
	pub fn start_with_board(&mut self, board: Board) {
		if self.phase != Phase::Idle {
			return;
		}
		self.begin(board);
	}

	fn begin(&mut self, board: Board) {
		self.phase = Phase::Playing;
		self.level = 1;
		self.time_left = self.rules.start_time;
		self.progress = Progress::new();
		self.selected = None;
		self.board = board;
	}

	pub fn reset(&mut self) {
		self.phase = Phase::Idle;
		self.level = 1;
		self.time_left = self.rules.start_time;
		self.progress = Progress::new();
		self.selected = None;
		self.board = Board::new(self.rules.board_width, self.rules.board_height);
	}

	// One second of play. Returns the final experience value on the tick
	// that ends the session; every other tick returns None.
	pub fn tick(&mut self) -> Option<u32> {
		if self.phase != Phase::Playing {
			return None;
		}
		self.time_left = self.time_left.saturating_sub(1);
		if self.time_left == 0 {
			self.phase = Phase::GameOver;
			self.selected = None;
			return Some(self.progress.score.saturating_mul(self.rules.xp_multiplier));
		}
		None
	}

	// Selecting the selected vehicle deselects it; selecting another
	// alive vehicle re-targets. Dead or unknown ids are no-ops.
	pub fn select(&mut self, id: u32) {
		if self.phase != Phase::Playing {
			return;
		}
		if !self.board.vehicle(id).is_some_and(|v| v.alive) {
			return;
		}
		self.selected = if self.selected == Some(id) { None } else { Some(id) };
	}

	pub fn move_selected(&mut self, dir: Direction) -> MoveOutcome {
		if self.phase != Phase::Playing {
			return MoveOutcome::Ignored;
		}
		let Some(id) = self.selected else {
			return MoveOutcome::Ignored;
		};
		let outcome = apply_move(&mut self.board, id, dir);
		if outcome == MoveOutcome::Cleared {
			self.progress.add_score(self.rules.clear_reward);
			self.progress.record_clear();
			self.selected = None;
			if (self.board.alive_count() as u32) <= self.rules.advance_threshold {
				self.advance_level();
			}
		}
		outcome
	}

	fn advance_level(&mut self) {
		self.level += 1;
		self.time_left = self.time_left.saturating_add(self.rules.level_time_bonus);
		self.progress.add_score(self.rules.level_score_bonus);
		self.selected = None;
		self.board = Board::generate(
			self.board.width(),
			self.board.height(),
			self.rules.vehicle_count(self.level),
			&mut self.rng,
		);
	}

	pub fn rules(&self) -> &Rules {
		&self.rules
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn level(&self) -> u32 {
		self.level
	}

	pub fn time_left(&self) -> u32 {
		self.time_left
	}

	pub fn score(&self) -> u32 {
		self.progress.score
	}

	pub fn cleared(&self) -> u32 {
		self.progress.cleared
	}

	pub fn selected(&self) -> Option<u32> {
		self.selected
	}

	pub fn board(&self) -> &Board {
		&self.board
	}
}
