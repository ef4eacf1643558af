//! Editor constants and runtime configuration defaults

// Grid dimensions
/// Rows of a freshly started project
pub const GRID_DEFAULT_ROWS: usize = 32;
/// Columns of a freshly started project
pub const GRID_DEFAULT_COLS: usize = 48;
/// Largest accepted row or column count for a new project
pub const MAX_GRID_DIMENSION: usize = 200;

/// Number of recently used blocks remembered
pub const MAX_RECENT_BLOCKS: usize = 5;

// Notifications
/// Display time applied when a notification does not specify one
pub const NOTIFICATION_DEFAULT_DURATION_MS: u64 = 4000;
/// Notifications kept by the bounded notification log
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 5;

// Naming
/// Name used when a project is created or saved without one
pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";
/// Stem used for JSON exports of unnamed projects
pub const DEFAULT_EXPORT_STEM: &str = "minecraft_project";
/// Stem used for PNG exports of unnamed projects
pub const DEFAULT_IMAGE_STEM: &str = "minecraft_blueprint";

// Persistence
/// Store key holding the ordered list of saved projects
pub const STORE_PROJECTS_KEY: &str = "minecraftPlannerProjects_v1";
/// Store key holding the recently used block ids
pub const STORE_RECENT_BLOCKS_KEY: &str = "minecraftPlannerRecentBlocks_v1";
/// Directory used by the CLI when `--store` is not given
pub const DEFAULT_STORE_DIR: &str = ".blueprint";

// Rendering
/// Edge length of one grid cell in exported images
pub const CELL_SIZE_DEFAULT: u32 = 20;
/// Largest accepted cell size for exported images
pub const MAX_CELL_SIZE: u32 = 128;
/// Background behind empty cells in exported images (`#37474F`)
pub const BACKGROUND_COLOR: [u8; 4] = [0x37, 0x47, 0x4F, 0xFF];
/// Grid line color in exported images
pub const GRID_LINE_COLOR: [u8; 4] = [0x26, 0x32, 0x38, 0xFF];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
