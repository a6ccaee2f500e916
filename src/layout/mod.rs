pub mod constraints;
pub mod measure;

pub use constraints::{Constraints, MeasuredSize, Size};
pub use measure::{resolve_square, MeasureMode, MeasureSpec};
