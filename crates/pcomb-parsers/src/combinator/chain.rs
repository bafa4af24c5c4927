use crate::Marker;
use pcomb_core::{done, Input, Parser, ParserResult, Position, Source};
use std::marker::PhantomData;

/// Runs `parsers` strictly left to right, each where the previous one left off,
/// collecting their outputs. Any failure fails the whole chain.
pub fn chain<S, X, P>(parsers: impl IntoIterator<Item = P>) -> Chain<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    Chain {
        parsers: parsers.into_iter().collect(),
        marker: PhantomData,
    }
}

#[derive(Debug)]
pub struct Chain<S: ?Sized, X, P> {
    parsers: Vec<P>,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P: Clone> Clone for Chain<S, X, P> {
    fn clone(&self) -> Self {
        Self {
            parsers: self.parsers.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, X, P> Parser<S, X> for Chain<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let mut outputs = Vec::with_capacity(self.parsers.len());
        let mut rest = at;

        for parser in &self.parsers {
            let state = parser.parse(input, rest)?;
            rest = state.end();
            outputs.push(state.output);
        }

        done(outputs, at..rest)
    }
}
