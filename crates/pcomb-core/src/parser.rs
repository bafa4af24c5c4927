use crate::{Input, ParseResult, Position, Source};

pub trait Parser<S: ?Sized + Source, X = ()> {
    type Output;

    /// Runs the parser at `at`. On success the returned range starts at `at`.
    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParseResult<Self::Output>;
}

impl<S, X, O, F> Parser<S, X> for F
where
    S: ?Sized + Source,
    F: Fn(&mut Input<'_, S, X>, Position) -> ParseResult<O>,
{
    type Output = O;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParseResult<O> {
        self(input, at)
    }
}
