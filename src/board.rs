use rand::{Rng, rngs::StdRng};

use crate::grid::{CellCoord, CellRect};
use crate::vehicle::{Vehicle, VehicleKind};

// Random placements tried per vehicle before it is dropped from the level.
pub const PLACEMENT_BUDGET: u32 = 50;

#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    vehicles: Vec<Vehicle>,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "Invalid board extent");
        Self {
            width,
            height,
            vehicles: Vec::new(),
        }
    }

    // Spawns never land flush against the right/bottom edge; the top/left
    // edge is allowed, so a fresh vehicle may clear on its first move.
    // A vehicle that finds no free spot within the budget is dropped.
    pub fn generate(width: i32, height: i32, count: u32, rng: &mut StdRng) -> Self {
        let mut board = Self::new(width, height);
        for i in 0..count {
            let kind = match rng.gen_range(0..3) {
                0 => VehicleKind::Car,
                1 => VehicleKind::Rickshaw,
                _ => VehicleKind::Bus,
            };
            let (w, h) = kind.footprint();
            if w >= width || h >= height {
                continue;
            }
            for _ in 0..PLACEMENT_BUDGET {
                let pos = CellCoord::new(rng.gen_range(0..width - w), rng.gen_range(0..height - h));
                let rect = CellRect::new(pos, w, h);
                if !board.overlaps_alive(&rect, None) {
                    board.vehicles.push(Vehicle::new(i, kind, pos));
                    break;
                }
            }
        }
        board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: u32) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub(crate) fn vehicle_mut(&mut self, id: u32) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == id)
    }

    pub(crate) fn insert(&mut self, v: Vehicle) {
        self.vehicles.push(v);
    }

    pub fn alive(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(|v| v.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn vehicle_at(&self, c: CellCoord) -> Option<u32> {
        self.alive().find(|v| v.rect().contains(c)).map(|v| v.id)
    }

    pub fn overlaps_alive(&self, rect: &CellRect, exclude: Option<u32>) -> bool {
        self.alive()
            .any(|v| Some(v.id) != exclude && v.rect().overlaps(rect))
    }
}
