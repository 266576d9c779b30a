use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of block a world cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    Air = 0,
    Grass,
    Wood,
    Metal,
    Iron,
    Water,
    Lava,
    Fire,
    Stone,
}

impl Default for BlockType {
    fn default() -> Self {
        BlockType::Air
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockType::Air => write!(f, "Air"),
            BlockType::Grass => write!(f, "Grass"),
            BlockType::Wood => write!(f, "Wood"),
            BlockType::Metal => write!(f, "Metal"),
            BlockType::Iron => write!(f, "Iron"),
            BlockType::Water => write!(f, "Water"),
            BlockType::Lava => write!(f, "Lava"),
            BlockType::Fire => write!(f, "Fire"),
            BlockType::Stone => write!(f, "Stone"),
        }
    }
}

impl BlockType {
    /// Flat RGBA color applied to every vertex of this block's faces
    pub fn color(self) -> [f32; 4] {
        match self {
            BlockType::Grass => [0.2, 0.7, 0.2, 1.0],
            BlockType::Wood => [0.55, 0.35, 0.2, 1.0],
            BlockType::Metal => [0.6, 0.6, 0.7, 1.0],
            BlockType::Iron => [0.7, 0.7, 0.75, 1.0],
            BlockType::Water => [0.2, 0.5, 0.8, 0.8],
            BlockType::Lava => [1.0, 0.3, 0.0, 1.0],
            BlockType::Fire => [1.0, 0.5, 0.0, 1.0],
            BlockType::Stone => [0.5, 0.5, 0.5, 1.0],
            _ => [1.0, 1.0, 1.0, 1.0],
        }
    }

    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    /// Transparent blocks do not occlude the faces of their neighbors
    pub fn is_transparent(self) -> bool {
        matches!(self, BlockType::Air | BlockType::Water)
    }

    /// Solid enough to stand on
    pub fn is_solid(self) -> bool {
        !self.is_transparent()
    }
}
