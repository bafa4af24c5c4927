use crate::Marker;
use pcomb_core::{Input, Parser, ParserResult, Position, Source};
use std::marker::PhantomData;

/// Borrows a parser so it can be composed without being moved or cloned.
#[derive(Debug)]
pub struct Ref<'a, S: ?Sized, X, P: ?Sized> {
    parser: &'a P,
    marker: Marker<S, X>,
}

impl<'a, S: ?Sized, X, P: ?Sized> Ref<'a, S, X, P> {
    pub fn new(parser: &'a P) -> Self {
        Self {
            parser,
            marker: PhantomData,
        }
    }
}

impl<S: ?Sized, X, P: ?Sized> Clone for Ref<'_, S, X, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, X, P: ?Sized> Copy for Ref<'_, S, X, P> {}

impl<S, X, P> Parser<S, X> for Ref<'_, S, X, P>
where
    S: ?Sized + Source,
    P: ?Sized + Parser<S, X>,
{
    type Output = P::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser.parse(input, at)
    }
}
