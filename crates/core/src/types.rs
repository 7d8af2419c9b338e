#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Wall,
    Path,
    Start,
    End,
}

impl Cell {
    /// Anything an actor could stand on: floor plus the two endpoint markers.
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Path | Self::Start | Self::End)
    }
}
