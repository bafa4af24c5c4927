use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};

/// Succeeds with a zero-width match only at the end of input.
pub fn end() -> End {
    End
}

#[derive(Debug, Clone, Copy, Default)]
pub struct End;

impl<S: ?Sized + Source, X> Parser<S, X> for End {
    type Output = ();

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        if input.source().is_end(at) {
            done((), at..at)
        } else {
            fail(Reason::NoMatch, at)
        }
    }
}
