use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList};

/// Stroked circle outline payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub stroke: Stroke,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, stroke: Stroke) -> Self {
        Self { center, radius, stroke }
    }
}

impl DrawList {
    /// Records a circle outline.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, stroke)));
    }
}
