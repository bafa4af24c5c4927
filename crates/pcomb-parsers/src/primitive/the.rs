use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};

/// Matches one element equal to `element`.
pub fn the<T>(element: T) -> The<T> {
    The { element }
}

#[derive(Debug, Clone, Copy)]
pub struct The<T> {
    element: T,
}

impl<S, X, T> Parser<S, X> for The<T>
where
    S: ?Sized + Source<Element = T>,
    T: PartialEq,
{
    type Output = T;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match input.source().element_at(at) {
            Some((e, next)) if e == self.element => done(e, at..next),
            Some(_) => fail(Reason::NoMatch, at),
            None => fail(Reason::EndOfInput, at),
        }
    }
}
