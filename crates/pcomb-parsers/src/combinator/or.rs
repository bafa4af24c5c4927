use crate::{clone_impl, Marker};
use pcomb_core::{Input, Parser, ParserResult, Position, Source};
use std::marker::PhantomData;

/// Ordered choice between two parsers with the same output.
///
/// `parser1` runs from the same position when `parser0` fails. When both fail
/// the error of `parser1` is reported.
#[derive(Debug)]
pub struct Or<S: ?Sized, X, P0, P1> {
    parser0: P0,
    parser1: P1,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P0, P1> Or<S, X, P0, P1> {
    pub fn new(parser0: P0, parser1: P1) -> Self {
        Self {
            parser0,
            parser1,
            marker: PhantomData,
        }
    }
}

clone_impl!(Or<P0, P1> { parser0, parser1 });

impl<S, X, P0, P1> Parser<S, X> for Or<S, X, P0, P1>
where
    S: ?Sized + Source,
    P0: Parser<S, X>,
    P1: Parser<S, X, Output = P0::Output>,
{
    type Output = P0::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match self.parser0.parse(input, at) {
            Ok(state) => Ok(state),
            Err(_) => self.parser1.parse(input, at),
        }
    }
}
