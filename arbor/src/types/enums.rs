/// What an element stands for in the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Box,
    /// An ordered list of items (`ul`).
    List,
    /// One entry of a list (`li`).
    ListItem,
    /// A horizontal row, used by headers.
    Row,
    Text,
    /// A region whose children enter and leave with an animation.
    Transition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}
