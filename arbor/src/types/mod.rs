mod enums;
mod style;
mod transform;

pub use enums::{Direction, Tag};
pub use style::{Style, TreeStyle};
pub use transform::Translate;
