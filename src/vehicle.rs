use serde::{Deserialize, Serialize};

use crate::grid::{CellCoord, CellRect};

// Cleared vehicles are parked here, far outside any playable board.
pub const OFF_BOARD: CellCoord = CellCoord { x: -1000, y: -1000 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
	Car,
	Rickshaw,
	Bus,
}

impl VehicleKind {
	// Footprint in cells, (width, height).
	pub fn footprint(self) -> (i32, i32) {
		match self {
			VehicleKind::Car => (1, 2),
			VehicleKind::Rickshaw => (1, 1),
			VehicleKind::Bus => (2, 1),
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			VehicleKind::Car => "Car",
			VehicleKind::Rickshaw => "Rickshaw",
			VehicleKind::Bus => "Bus",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
	pub id: u32,
	pub pos: CellCoord,
	pub kind: VehicleKind,
	pub alive: bool,
}

impl Vehicle {
	pub fn new(id: u32, kind: VehicleKind, pos: CellCoord) -> Self {
		Self { id, pos, kind, alive: true }
	}

	pub fn rect(&self) -> CellRect {
		let (w, h) = self.kind.footprint();
		CellRect::new(self.pos, w, h)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn footprints() {
		assert_eq!(VehicleKind::Car.footprint(), (1, 2));
		assert_eq!(VehicleKind::Rickshaw.footprint(), (1, 1));
		assert_eq!(VehicleKind::Bus.footprint(), (2, 1));
	}

	#[test]
	fn vehicle_init() {
		let v = Vehicle::new(3, VehicleKind::Bus, CellCoord::new(4, 5));
		assert_eq!(v.id, 3);
		assert!(v.alive);
		assert_eq!(v.rect(), CellRect::new(CellCoord::new(4, 5), 2, 1));
	}

	#[test]
	fn kind_labels() {
		assert_eq!(VehicleKind::Rickshaw.label(), "Rickshaw");
		assert_eq!(VehicleKind::Car.label(), "Car");
	}
}
