use serde::{Serialize, Deserialize};

/// A world coordinate (tile position plus floor level)
///
/// Items carry their own position, and teleporters additionally carry a
/// destination position that is independent of where the teleporter itself
/// stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    /// Creates a new position
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Position { x, y, z }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Position::default(), Position::new(0, 0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, -1, 7).to_string(), "(3, -1, 7)");
    }
}
