use crate::{clone_impl, Marker};
use pcomb_core::{Input, Parser, ParserResult, Position, Source};
use std::marker::PhantomData;

/// Runs `parser0` then `parser1` where the first left off, producing both outputs.
pub fn pair<S, X, P0, P1>(parser0: P0, parser1: P1) -> Then<S, X, P0, P1>
where
    S: ?Sized + Source,
    P0: Parser<S, X>,
    P1: Parser<S, X>,
{
    Then::new(parser0, parser1)
}

/// Three parsers in sequence, producing a flat triple.
pub fn triple<S, X, P0, P1, P2>(parser0: P0, parser1: P1, parser2: P2) -> Triple<S, X, P0, P1, P2>
where
    S: ?Sized + Source,
    P0: Parser<S, X>,
    P1: Parser<S, X>,
    P2: Parser<S, X>,
{
    Triple::new(parser0, parser1, parser2)
}

#[derive(Debug)]
pub struct Then<S: ?Sized, X, P0, P1> {
    parser0: P0,
    parser1: P1,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P0, P1> Then<S, X, P0, P1> {
    pub fn new(parser0: P0, parser1: P1) -> Self {
        Self {
            parser0,
            parser1,
            marker: PhantomData,
        }
    }
}

clone_impl!(Then<P0, P1> { parser0, parser1 });

impl<S, X, P0, P1> Parser<S, X> for Then<S, X, P0, P1>
where
    S: ?Sized + Source,
    P0: Parser<S, X>,
    P1: Parser<S, X>,
{
    type Output = (P0::Output, P1::Output);

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser0.parse(input, at)?.bind(|v0, next| {
            let state = self.parser1.parse(input, next)?;
            Ok(state.map(|v1| (v0, v1)))
        })
    }
}

/// Sequence keeping only the output of the first parser.
#[derive(Debug)]
pub struct ThenIgnore<S: ?Sized, X, P0, P1> {
    parser0: P0,
    parser1: P1,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P0, P1> ThenIgnore<S, X, P0, P1> {
    pub fn new(parser0: P0, parser1: P1) -> Self {
        Self {
            parser0,
            parser1,
            marker: PhantomData,
        }
    }
}

clone_impl!(ThenIgnore<P0, P1> { parser0, parser1 });

impl<S, X, P0, P1> Parser<S, X> for ThenIgnore<S, X, P0, P1>
where
    S: ?Sized + Source,
    P0: Parser<S, X>,
    P1: Parser<S, X>,
{
    type Output = P0::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser0.parse(input, at)?.bind(|v0, next| {
            let state = self.parser1.parse(input, next)?;
            Ok(state.map(|_| v0))
        })
    }
}

/// Sequence keeping only the output of the second parser.
#[derive(Debug)]
pub struct IgnoreThen<S: ?Sized, X, P0, P1> {
    parser0: P0,
    parser1: P1,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P0, P1> IgnoreThen<S, X, P0, P1> {
    pub fn new(parser0: P0, parser1: P1) -> Self {
        Self {
            parser0,
            parser1,
            marker: PhantomData,
        }
    }
}

clone_impl!(IgnoreThen<P0, P1> { parser0, parser1 });

impl<S, X, P0, P1> Parser<S, X> for IgnoreThen<S, X, P0, P1>
where
    S: ?Sized + Source,
    P0: Parser<S, X>,
    P1: Parser<S, X>,
{
    type Output = P1::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser0
            .parse(input, at)?
            .bind(|_, next| self.parser1.parse(input, next))
    }
}

#[derive(Debug)]
pub struct Triple<S: ?Sized, X, P0, P1, P2> {
    parser0: P0,
    parser1: P1,
    parser2: P2,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P0, P1, P2> Triple<S, X, P0, P1, P2> {
    pub fn new(parser0: P0, parser1: P1, parser2: P2) -> Self {
        Self {
            parser0,
            parser1,
            parser2,
            marker: PhantomData,
        }
    }
}

clone_impl!(Triple<P0, P1, P2> { parser0, parser1, parser2 });

impl<S, X, P0, P1, P2> Parser<S, X> for Triple<S, X, P0, P1, P2>
where
    S: ?Sized + Source,
    P0: Parser<S, X>,
    P1: Parser<S, X>,
    P2: Parser<S, X>,
{
    type Output = (P0::Output, P1::Output, P2::Output);

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser0.parse(input, at)?.bind(|v0, next| {
            self.parser1.parse(input, next)?.bind(|v1, next| {
                let state = self.parser2.parse(input, next)?;
                Ok(state.map(|v2| (v0, v1, v2)))
            })
        })
    }
}
