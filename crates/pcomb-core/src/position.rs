use std::fmt;

/// An index into a [`Source`](crate::Source).
///
/// Positions are only meaningful for the source that produced them. For `str`
/// they are byte offsets on char boundaries, for slices they are element
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    pub const START: Position = Position(0);

    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
