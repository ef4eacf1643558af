//! Static catalog of placeable blocks and the eraser marker
//!
//! Block identifiers stored in grids are keys into this catalog. The catalog
//! carries presentation attributes only; the editing engine treats ids as
//! opaque strings.

use std::fmt;

/// Palette grouping for a block definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCategory {
    /// Natural ground blocks
    Terrain,
    /// Logs, planks and foliage
    Wood,
    /// Stone and brick variants
    Stone,
    /// Ores and metal blocks
    Mineral,
    /// Glass, wool and furniture
    Decoration,
    /// Light sources and utility markers (includes the eraser)
    Utility,
    /// Water and lava
    Fluid,
    /// Doors, windows and other structure markers
    Special,
}

impl BlockCategory {
    /// Every category, in palette order
    pub const ALL: [Self; 8] = [
        Self::Terrain,
        Self::Wood,
        Self::Stone,
        Self::Mineral,
        Self::Decoration,
        Self::Utility,
        Self::Fluid,
        Self::Special,
    ];

    /// Human readable palette heading
    pub const fn label(self) -> &'static str {
        match self {
            Self::Terrain => "Terrain & Natural",
            Self::Wood => "Wood & Organics",
            Self::Stone => "Stone & Bricks",
            Self::Mineral => "Minerals & Metals",
            Self::Decoration => "Decoration & Glass",
            Self::Utility => "Utility & Lighting",
            Self::Fluid => "Fluids",
            Self::Special => "Markers & Structures",
        }
    }
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation attributes for one block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDefinition {
    /// Identifier stored in grid cells
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// RGBA fill color used for rendering
    pub color: [u8; 4],
    /// Short symbol drawn on the cell in text renderings
    pub icon_symbol: &'static str,
    /// Palette grouping
    pub category: BlockCategory,
}

const fn block(
    id: &'static str,
    name: &'static str,
    color: [u8; 4],
    icon_symbol: &'static str,
    category: BlockCategory,
) -> BlockDefinition {
    BlockDefinition {
        id,
        name,
        color,
        icon_symbol,
        category,
    }
}

/// Identifier of the eraser marker
pub const ERASER_ID: &str = "eraser";

/// The eraser marker; placing it clears a cell instead of storing its id
pub static ERASER_BLOCK: BlockDefinition = block(
    ERASER_ID,
    "Eraser / Air",
    [0xCB, 0xD5, 0xE1, 0xFF],
    "X",
    BlockCategory::Utility,
);

/// Every placeable block, in palette order
pub static BLOCK_DEFINITIONS: [BlockDefinition; 33] = [
    // Terrain
    block(
        "grass",
        "Grass Block",
        [0x16, 0xA3, 0x4A, 0xFF],
        "G",
        BlockCategory::Terrain,
    ),
    block(
        "dirt",
        "Dirt",
        [0x85, 0x4D, 0x0E, 0xFF],
        "D",
        BlockCategory::Terrain,
    ),
    block(
        "sand",
        "Sand",
        [0xFD, 0xE0, 0x47, 0xFF],
        "S",
        BlockCategory::Terrain,
    ),
    block(
        "gravel",
        "Gravel",
        [0x9C, 0xA3, 0xAF, 0xFF],
        "Gr",
        BlockCategory::Terrain,
    ),
    // Wood
    block(
        "oak_log",
        "Oak Log",
        [0xB4, 0x53, 0x09, 0xFF],
        "OL",
        BlockCategory::Wood,
    ),
    block(
        "oak_planks",
        "Oak Planks",
        [0xF5, 0x9E, 0x0B, 0xFF],
        "OP",
        BlockCategory::Wood,
    ),
    block(
        "spruce_planks",
        "Spruce Planks",
        [0xC2, 0x41, 0x0C, 0xFF],
        "SP",
        BlockCategory::Wood,
    ),
    block(
        "birch_planks",
        "Birch Planks",
        [0xFE, 0xF0, 0x8A, 0xFF],
        "BP",
        BlockCategory::Wood,
    ),
    block(
        "leaves",
        "Leaves",
        [0x22, 0xC5, 0x5E, 0xFF],
        "Lf",
        BlockCategory::Wood,
    ),
    // Stone
    block(
        "stone",
        "Stone",
        [0x6B, 0x72, 0x80, 0xFF],
        "St",
        BlockCategory::Stone,
    ),
    block(
        "cobblestone",
        "Cobblestone",
        [0x73, 0x73, 0x73, 0xFF],
        "Cb",
        BlockCategory::Stone,
    ),
    block(
        "stone_bricks",
        "Stone Bricks",
        [0x64, 0x74, 0x8B, 0xFF],
        "SB",
        BlockCategory::Stone,
    ),
    block(
        "mossy_stone_bricks",
        "Mossy Stone Bricks",
        [0x04, 0x78, 0x57, 0xFF],
        "MS",
        BlockCategory::Stone,
    ),
    // Minerals and metals
    block(
        "coal_ore",
        "Coal Ore",
        [0x57, 0x53, 0x4E, 0xFF],
        "CO",
        BlockCategory::Mineral,
    ),
    block(
        "iron_ore",
        "Iron Ore",
        [0x78, 0x71, 0x6C, 0xFF],
        "IO",
        BlockCategory::Mineral,
    ),
    block(
        "gold_ore",
        "Gold Ore",
        [0x78, 0x71, 0x6C, 0xFF],
        "GO",
        BlockCategory::Mineral,
    ),
    block(
        "diamond_ore",
        "Diamond Ore",
        [0x78, 0x71, 0x6C, 0xFF],
        "DO",
        BlockCategory::Mineral,
    ),
    block(
        "iron_block",
        "Iron Block",
        [0xCB, 0xD5, 0xE1, 0xFF],
        "Fe",
        BlockCategory::Mineral,
    ),
    block(
        "gold_block",
        "Gold Block",
        [0xFA, 0xCC, 0x15, 0xFF],
        "Au",
        BlockCategory::Mineral,
    ),
    block(
        "diamond_block",
        "Diamond Block",
        [0x22, 0xD3, 0xEE, 0xFF],
        "Dm",
        BlockCategory::Mineral,
    ),
    block(
        "copper_block",
        "Copper Block",
        [0xF9, 0x73, 0x16, 0xFF],
        "Cu",
        BlockCategory::Mineral,
    ),
    // Decoration
    block(
        "glass_block",
        "Glass Block",
        [0xBA, 0xE6, 0xFD, 0xFF],
        "Gb",
        BlockCategory::Decoration,
    ),
    block(
        "glass_pane",
        "Glass Pane",
        [0xE0, 0xF2, 0xFE, 0xFF],
        "Gp",
        BlockCategory::Decoration,
    ),
    block(
        "bookshelf",
        "Bookshelf",
        [0xD9, 0x77, 0x06, 0xFF],
        "Bk",
        BlockCategory::Decoration,
    ),
    block(
        "wool_white",
        "White Wool",
        [0xF3, 0xF4, 0xF6, 0xFF],
        "WW",
        BlockCategory::Decoration,
    ),
    // Utility and light
    block(
        "torch",
        "Torch",
        [0xFA, 0xCC, 0x15, 0xFF],
        "T",
        BlockCategory::Utility,
    ),
    block(
        "lantern",
        "Lantern",
        [0xEA, 0xB3, 0x08, 0xFF],
        "L",
        BlockCategory::Utility,
    ),
    block(
        "glowstone",
        "Glowstone",
        [0xFD, 0xE0, 0x47, 0xFF],
        "Gs",
        BlockCategory::Utility,
    ),
    // Fluids
    block(
        "water",
        "Water",
        [0x3B, 0x82, 0xF6, 0xFF],
        "~",
        BlockCategory::Fluid,
    ),
    block(
        "lava",
        "Lava",
        [0xEA, 0x58, 0x0C, 0xFF],
        "!",
        BlockCategory::Fluid,
    ),
    // Structure markers
    block(
        "door_wood",
        "Wooden Door",
        [0xB4, 0x53, 0x09, 0xFF],
        "D",
        BlockCategory::Special,
    ),
    block(
        "door_iron",
        "Iron Door",
        [0x94, 0xA3, 0xB8, 0xFF],
        "ID",
        BlockCategory::Special,
    ),
    block(
        "window_marker",
        "Window Area",
        [0x38, 0xBD, 0xF8, 0xFF],
        "W",
        BlockCategory::Special,
    ),
];

/// Look up a block definition by id, including the eraser
pub fn find_block(id: &str) -> Option<&'static BlockDefinition> {
    if id == ERASER_ID {
        return Some(&ERASER_BLOCK);
    }
    BLOCK_DEFINITIONS.iter().find(|block| block.id == id)
}

/// Whether `id` names a block that can be written into a grid cell
pub fn is_placeable(id: &str) -> bool {
    id != ERASER_ID && find_block(id).is_some()
}

/// The block selected when nothing else is: the first palette entry
pub fn default_block() -> &'static BlockDefinition {
    &BLOCK_DEFINITIONS[0]
}

/// Iterate the placeable blocks belonging to one palette category
pub fn blocks_in(category: BlockCategory) -> impl Iterator<Item = &'static BlockDefinition> {
    BLOCK_DEFINITIONS
        .iter()
        .filter(move |block| block.category == category)
}
