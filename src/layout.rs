use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::grid::{CellCoord, CellRect};
use crate::vehicle::{Vehicle, VehicleKind};

pub const LAYOUT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum LayoutError {
	#[error("Unsupported layout version {0}")]
	UnsupportedVersion(u32),
	#[error("Invalid board extent {0}x{1}")]
	InvalidExtent(i32, i32),
	#[error("Duplicate vehicle id {0}")]
	DuplicateId(u32),
	#[error("Vehicle {0} extends outside the board")]
	OutOfBounds(u32),
	#[error("Vehicles {0} and {1} overlap")]
	Overlap(u32, u32),
}

// Externally authored level description, usually parsed from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
	pub version: u32,
	pub width: i32,
	pub height: i32,
	pub vehicles: Vec<VehiclePlacement>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VehiclePlacement {
	pub id: u32,
	pub kind: VehicleKind,
	pub x: i32,
	pub y: i32,
}

pub fn build_board(layout: &LevelLayout) -> Result<Board, LayoutError> {
	if layout.version != LAYOUT_VERSION {
		return Err(LayoutError::UnsupportedVersion(layout.version));
	}
	if layout.width <= 0 || layout.height <= 0 {
		return Err(LayoutError::InvalidExtent(layout.width, layout.height));
	}
	let mut board = Board::new(layout.width, layout.height);
	for p in &layout.vehicles {
		if board.vehicle(p.id).is_some() {
			return Err(LayoutError::DuplicateId(p.id));
		}
		let (w, h) = p.kind.footprint();
		if p.x < 0 || p.y < 0 || p.x + w > layout.width || p.y + h > layout.height {
			return Err(LayoutError::OutOfBounds(p.id));
		}
		let rect = CellRect::new(CellCoord::new(p.x, p.y), w, h);
		if let Some(other) = board.alive().find(|v| v.rect().overlaps(&rect)) {
			return Err(LayoutError::Overlap(other.id, p.id));
		}
		board.insert(Vehicle::new(p.id, p.kind, CellCoord::new(p.x, p.y)));
	}
	Ok(board)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn layout_json() -> serde_json::Value {
		json!({
			"version": 1,
			"width": 12,
			"height": 12,
			"vehicles": [
				{ "id": 0, "kind": "car", "x": 2, "y": 3 },
				{ "id": 1, "kind": "bus", "x": 5, "y": 5 },
				{ "id": 2, "kind": "rickshaw", "x": 0, "y": 0 }
			]
		})
	}

	#[test]
	fn parse_and_build() {
		let layout: LevelLayout = serde_json::from_value(layout_json()).unwrap();
		let board = build_board(&layout).unwrap();
		assert_eq!(board.alive_count(), 3);
		assert_eq!(board.vehicle(0).unwrap().kind, VehicleKind::Car);
		assert_eq!(board.vehicle(1).unwrap().pos, CellCoord::new(5, 5));
		assert_eq!(board.vehicle_at(CellCoord::new(6, 5)), Some(1));
	}

	#[test]
	fn rejects_unknown_version() {
		let mut layout: LevelLayout = serde_json::from_value(layout_json()).unwrap();
		layout.version = 2;
		assert!(matches!(
			build_board(&layout),
			Err(LayoutError::UnsupportedVersion(2))
		));
	}

	#[test]
	fn rejects_out_of_bounds_placement() {
		let layout = LevelLayout {
			version: 1,
			width: 12,
			height: 12,
			// Bus is 2 wide; x = 11 hangs over the right edge.
			vehicles: vec![VehiclePlacement { id: 7, kind: VehicleKind::Bus, x: 11, y: 0 }],
		};
		assert!(matches!(build_board(&layout), Err(LayoutError::OutOfBounds(7))));
	}

	#[test]
	fn rejects_overlapping_placements() {
		let layout = LevelLayout {
			version: 1,
			width: 12,
			height: 12,
			vehicles: vec![
				VehiclePlacement { id: 0, kind: VehicleKind::Car, x: 4, y: 4 },
				VehiclePlacement { id: 1, kind: VehicleKind::Rickshaw, x: 4, y: 5 },
			],
		};
		assert!(matches!(build_board(&layout), Err(LayoutError::Overlap(0, 1))));
	}

	#[test]
	fn rejects_duplicate_ids() {
		let layout = LevelLayout {
			version: 1,
			width: 12,
			height: 12,
			vehicles: vec![
				VehiclePlacement { id: 3, kind: VehicleKind::Rickshaw, x: 1, y: 1 },
				VehiclePlacement { id: 3, kind: VehicleKind::Rickshaw, x: 5, y: 5 },
			],
		};
		assert!(matches!(build_board(&layout), Err(LayoutError::DuplicateId(3))));
	}

	#[test]
	fn unknown_kind_fails_at_parse_time() {
		let value = json!({
			"version": 1,
			"width": 12,
			"height": 12,
			"vehicles": [{ "id": 0, "kind": "tram", "x": 0, "y": 0 }]
		});
		assert!(serde_json::from_value::<LevelLayout>(value).is_err());
	}
}
