//! Rendering entry point for the TUI app.

use ratatui::Frame;

use crate::app::App;
use crate::ui::render::render_app;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        render_app(f, self);
    }
}
