//! Cell codes and the wall flags packed into them

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// The sides of a cell that carry a wall.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const NORTH = 0b1000;
        const SOUTH = 0b0100;
        const EAST = 0b0010;
        const WEST = 0b0001;
    }
}

impl Walls {
    /// Every side, in the order walls are drawn
    pub const SIDES: [Walls; 4] = [Walls::NORTH, Walls::SOUTH, Walls::EAST, Walls::WEST];
}

/// Largest value a cell may hold (all four walls set)
pub const MAX_CELL_VALUE: u8 = 15;

/// A single maze cell: a value in `0..=15` whose bits select the walls to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellCode(u8);

impl CellCode {
    /// Wrap a raw value, rejecting anything above [`MAX_CELL_VALUE`]
    pub fn new(value: u8) -> Option<Self> {
        if value <= MAX_CELL_VALUE {
            Some(CellCode(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn walls(self) -> Walls {
        Walls::from_bits_truncate(self.0)
    }

    pub fn has_wall(self, side: Walls) -> bool {
        self.walls().contains(side)
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_values_above_fifteen() {
        assert!(CellCode::new(15).is_some());
        assert!(CellCode::new(16).is_none());
        assert!(CellCode::new(255).is_none());
    }

    #[test]
    fn test_wall_bits() {
        let code = CellCode::new(3).unwrap();
        assert_eq!(code.walls(), Walls::EAST | Walls::WEST);

        let code = CellCode::new(12).unwrap();
        assert!(code.has_wall(Walls::NORTH));
        assert!(code.has_wall(Walls::SOUTH));
        assert!(!code.has_wall(Walls::EAST));

        assert_eq!(CellCode::new(15).unwrap().walls(), Walls::all());
        assert!(CellCode::new(0).unwrap().walls().is_empty());
    }
}
