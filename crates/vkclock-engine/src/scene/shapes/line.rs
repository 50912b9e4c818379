use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList};

/// Line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub stroke: Stroke,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, stroke: Stroke) -> Self {
        Self { start, end, stroke }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(&mut self, start: Vec2, end: Vec2, stroke: Stroke) {
        self.push(DrawCmd::Line(LineCmd::new(start, end, stroke)));
    }
}
