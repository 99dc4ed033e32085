use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // One cell of travel; y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRect {
    pub pos: CellCoord, // top-left
    pub w: i32,
    pub h: i32,
}

impl CellRect {
    pub fn new(pos: CellCoord, w: i32, h: i32) -> Self {
        assert!(w > 0 && h > 0, "Invalid CellRect size");
        Self { pos, w, h }
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.h
    }

    pub fn contains(&self, c: CellCoord) -> bool {
        c.x >= self.pos.x && c.x < self.right() && c.y >= self.pos.y && c.y < self.bottom()
    }

    pub fn overlaps(&self, other: &CellRect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = CellRect::new(CellCoord::new(1, 2), 2, 3);
        assert!(r.contains(CellCoord::new(1, 2)));
        assert!(r.contains(CellCoord::new(2, 4)));
        assert!(!r.contains(CellCoord::new(3, 2)));
        assert!(!r.contains(CellCoord::new(1, 5)));
    }

    #[test]
    fn overlapping_rects() {
        let a = CellRect::new(CellCoord::new(0, 0), 2, 2);
        let b = CellRect::new(CellCoord::new(1, 1), 2, 2);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = CellRect::new(CellCoord::new(0, 0), 2, 2);
        let b = CellRect::new(CellCoord::new(2, 0), 1, 2);
        let c = CellRect::new(CellCoord::new(0, 2), 2, 1);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
