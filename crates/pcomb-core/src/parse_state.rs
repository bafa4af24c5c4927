use crate::{ParseResult, Position};
use std::ops::Range;

/// The payload of a successful parse: the output and the half-open range it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState<O> {
    pub output: O,
    pub range: Range<Position>,
}

impl<O> ParseState<O> {
    pub fn new(output: O, range: Range<Position>) -> Self {
        debug_assert!(range.start <= range.end);
        Self { output, range }
    }

    pub fn zero_width(output: O, at: Position) -> Self {
        Self::new(output, at..at)
    }

    pub fn start(&self) -> Position {
        self.range.start
    }

    pub fn end(&self) -> Position {
        self.range.end
    }

    pub fn is_zero_width(&self) -> bool {
        self.range.start == self.range.end
    }

    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> ParseState<U> {
        ParseState::new(f(self.output), self.range)
    }

    pub fn map_with_range<U>(self, f: impl FnOnce(O, Range<Position>) -> U) -> ParseState<U> {
        let range = self.range.clone();
        ParseState::new(f(self.output, self.range), range)
    }

    /// Continues at the end of this state. The resulting range starts where this one
    /// started and ends where the continuation ended; failures pass through untouched.
    pub fn bind<U>(self, f: impl FnOnce(O, Position) -> ParseResult<U>) -> ParseResult<U> {
        let start = self.range.start;
        let next = f(self.output, self.range.end)?;
        Ok(ParseState::new(next.output, start..next.range.end))
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod test {
    use super::ParseState;
    use crate::{done, fail, Reason, Source};

    #[test]
    fn bind_widens_range() {
        let source = "abcd";
        let a = source.advance(source.start(), 1);
        let c = source.advance(source.start(), 3);

        let state = ParseState::new('x', a..source.advance(a, 1));
        let result = state.bind(|x, at| done((x, 'y'), at..c)).unwrap();

        assert_eq!(result.output, ('x', 'y'));
        assert_eq!(result.range, a..c);
    }

    #[test]
    fn bind_propagates_failure() {
        let source = "ab";
        let state = ParseState::zero_width((), source.start());
        let result = state.bind(|_, at| fail::<()>(Reason::NoMatch, at));

        let err = result.unwrap_err();
        assert!(matches!(err.reason, Reason::NoMatch));
        assert_eq!(err.position, source.start());
    }
}
