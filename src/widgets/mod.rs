pub mod square;
pub mod widget;

pub use square::{square, SquareStyle, SquareWidget};
pub use widget::{BoundingBox, Color, Padding, RectF, Widget};
