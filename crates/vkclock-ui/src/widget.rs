use vkclock_engine::coords::{Rect, Vec2, Viewport};

use crate::constraints::Constraints;
use crate::painter::Painter;

/// A self-drawing view driven by its host.
///
/// The host owns the lifecycle: it calls [`on_attach`](Widget::on_attach)
/// when the view becomes visible, [`on_size_changed`](Widget::on_size_changed)
/// whenever its bounds change, [`paint`](Widget::paint) once per frame and
/// [`on_detach`](Widget::on_detach) when it goes away.
pub trait Widget {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    fn on_size_changed(&mut self, _size: Viewport) {}

    fn on_attach(&mut self) {}

    fn on_detach(&mut self) {}
}
