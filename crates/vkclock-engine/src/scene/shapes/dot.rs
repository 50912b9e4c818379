use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList};

/// Single point payload, rendered as a round blob of `stroke.width` diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct DotCmd {
    pub position: Vec2,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a point.
    #[inline]
    pub fn push_dot(&mut self, position: Vec2, stroke: Stroke) {
        self.push(DrawCmd::Dot(DotCmd { position, stroke }));
    }
}
