use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub wall: Color,
    pub open: Color,
    pub path: Color,      // Cells on the candidate path
    pub head: Color,      // The exploration head
    pub dead_end: Color,  // A cell flagged dead-end, about to unwind
    pub abandoned: Color, // Cells backtracked out of
    pub endpoint: Color,  // Start/goal markers
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    wall: Color::Rgb(69, 71, 90),
    open: Color::Rgb(30, 30, 46),
    path: Color::Rgb(137, 180, 250),      // Blue trail
    head: Color::Rgb(249, 226, 175),      // Yellow head
    dead_end: Color::Rgb(243, 139, 168),  // Red flash before unwinding
    abandoned: Color::Rgb(88, 91, 112),   // Dim grey for discarded cells
    endpoint: Color::Rgb(166, 227, 161),  // Green S/G markers
};
