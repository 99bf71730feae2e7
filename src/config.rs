use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces an anonymous `(u16, u16)` tuple for bounds, making width
/// vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// The fixed play field: 16 rows of 20 columns.
pub const BOARD_SIZE: GridSize = GridSize {
    width: 20,
    height: 16,
};

/// Number of segments the snake is seeded with.
///
/// Also the number of leading body cells skipped by the self-collision
/// check: the head's former cell and the segments directly behind it
/// cannot be re-entered within a single step.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Columns right of board center where the first fruit appears.
pub const FRUIT_START_COL_OFFSET: i32 = 6;

/// Simulation tick interval in milliseconds (10 ticks per second).
pub const TICK_INTERVAL_MS: u64 = 100;

/// Delay between render/input frames in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Columns of left margin before the play field.
pub const PLAY_AREA_MARGIN_X: u16 = 5;

/// Glyph drawn for every board cell.
pub const GLYPH_CELL: &str = "[]";

/// Terminal columns one board cell occupies.
pub const CELL_WIDTH: u16 = 2;

/// A color theme applied to all visual elements.
///
/// Snake and fruit cells render as solid background blocks; the
/// `snake_head`, `snake_body`, and `fruit` fields each specify the
/// block color for that entity.
#[derive(Debug)]
pub struct Theme {
    /// Solid block color for the snake head.
    pub snake_head: Color,
    /// Solid block color for body segments.
    pub snake_body: Color,
    /// Solid block color for the fruit.
    pub fruit: Color,
    /// Foreground for empty play-area cells.
    pub board_cell: Color,
    pub hud_score: Color,
    pub hud_message: Color,
    pub footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::LightGreen,
    fruit: Color::LightRed,
    board_cell: Color::DarkGray,
    hud_score: Color::White,
    hud_message: Color::Yellow,
    footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Cyan,
    fruit: Color::Yellow,
    board_cell: Color::DarkGray,
    hud_score: Color::Cyan,
    hud_message: Color::Yellow,
    footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN];
