pub(crate) mod circle;
pub(crate) mod dot;
pub(crate) mod line;
pub(crate) mod text;

pub use circle::CircleCmd;
pub use dot::DotCmd;
pub use line::LineCmd;
pub use text::TextCmd;
