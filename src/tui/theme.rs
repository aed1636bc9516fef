use ratatui::style::Color;

/// Color set for the TUI, built once at startup and passed by reference
/// wherever rendering happens. There is no global style state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub done: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Reset,
            dim: Color::DarkGray,
            done: Color::Green,
            border: Color::DarkGray,
            border_focused: Color::Indexed(228),
            selection: Color::Gray,
            selection_focused: Color::Indexed(228),
        }
    }
}
