use crate::Position;

/// A finite, immutable, randomly addressable sequence of elements.
///
/// Parsers never inspect a source except through this trait, and every
/// position it hands out lies in `[Position::START, self.end()]`.
pub trait Source {
    type Element;

    fn end(&self) -> Position;

    /// The element at `at` and the position right after it.
    fn element_at(&self, at: Position) -> Option<(Self::Element, Position)>;

    /// Number of elements between the start and `at`.
    fn offset(&self, at: Position) -> usize;

    /// The input remaining from `at`.
    fn rest(&self, at: Position) -> &Self;

    fn start(&self) -> Position {
        Position::START
    }

    fn is_start(&self, at: Position) -> bool {
        at == self.start()
    }

    fn is_end(&self, at: Position) -> bool {
        at >= self.end()
    }

    /// Moves `count` elements forward, stopping at the end.
    fn advance(&self, at: Position, count: usize) -> Position {
        let mut at = at;
        for _ in 0..count {
            match self.element_at(at) {
                Some((_, next)) => at = next,
                None => break,
            }
        }
        at
    }
}

impl Source for str {
    type Element = char;

    fn end(&self) -> Position {
        Position::new(self.len())
    }

    fn element_at(&self, at: Position) -> Option<(char, Position)> {
        let c = self.get(at.index()..)?.chars().next()?;
        Some((c, Position::new(at.index() + c.len_utf8())))
    }

    fn offset(&self, at: Position) -> usize {
        let at = at.index().min(self.len());
        self.get(..at).map_or(0, |s| s.chars().count())
    }

    fn rest(&self, at: Position) -> &str {
        self.get(at.index()..).unwrap_or("")
    }
}

impl<T: Clone> Source for [T] {
    type Element = T;

    fn end(&self) -> Position {
        Position::new(self.len())
    }

    fn element_at(&self, at: Position) -> Option<(T, Position)> {
        let item = self.get(at.index())?.clone();
        Some((item, Position::new(at.index() + 1)))
    }

    fn offset(&self, at: Position) -> usize {
        at.index().min(self.len())
    }

    fn rest(&self, at: Position) -> &[T] {
        self.get(at.index()..).unwrap_or(&[])
    }

    fn advance(&self, at: Position, count: usize) -> Position {
        Position::new(at.index().saturating_add(count).min(self.len()))
    }
}
