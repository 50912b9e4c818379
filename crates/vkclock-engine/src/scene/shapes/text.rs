use crate::coords::Vec2;
use crate::paint::TextStyle;
use crate::scene::{DrawCmd, DrawList};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub content: String,
    /// Baseline anchor in pixels; the run is centered on it.
    pub position: Vec2,
    pub style: TextStyle,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, content: impl Into<String>, position: Vec2, style: TextStyle) {
        self.push(DrawCmd::Text(TextCmd {
            content: content.into(),
            position,
            style,
        }));
    }
}
