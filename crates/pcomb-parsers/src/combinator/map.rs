use crate::{clone_impl, Marker};
use pcomb_core::{BoxError, Input, ParseError, Parser, ParserResult, Position, Source};
use std::{marker::PhantomData, ops::Range};

/// Transforms the output, keeping the consumed range.
#[derive(Debug)]
pub struct Map<S: ?Sized, X, P, F> {
    parser: P,
    mapping: F,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P, F> Map<S, X, P, F> {
    pub fn new(parser: P, mapping: F) -> Self {
        Self {
            parser,
            mapping,
            marker: PhantomData,
        }
    }
}

clone_impl!(Map<P, F> { parser, mapping });

impl<S, X, P, U, F> Parser<S, X> for Map<S, X, P, F>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let state = self.parser.parse(input, at)?;
        Ok(state.map(&self.mapping))
    }
}

/// A mapping that may fail. A `ParseError` from the mapping is reported as is.
/// Any other failure is reported at the start of the consumed range, pointing
/// at the construct being interpreted.
#[derive(Debug)]
pub struct TryMap<S: ?Sized, X, P, F> {
    parser: P,
    mapping: F,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P, F> TryMap<S, X, P, F> {
    pub fn new(parser: P, mapping: F) -> Self {
        Self {
            parser,
            mapping,
            marker: PhantomData,
        }
    }
}

clone_impl!(TryMap<P, F> { parser, mapping });

impl<S, X, P, U, E, F> Parser<S, X> for TryMap<S, X, P, F>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Output = U;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let state = self.parser.parse(input, at)?;
        let start = state.start();
        let range = state.range;

        match (self.mapping)(state.output) {
            Ok(v) => pcomb_core::done(v, range),
            Err(e) => Err(ParseError::lift(e, start)),
        }
    }
}

/// A mapping that also sees the parse context.
#[derive(Debug)]
pub struct MapWithContext<S: ?Sized, X, P, F> {
    parser: P,
    mapping: F,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P, F> MapWithContext<S, X, P, F> {
    pub fn new(parser: P, mapping: F) -> Self {
        Self {
            parser,
            mapping,
            marker: PhantomData,
        }
    }
}

clone_impl!(MapWithContext<P, F> { parser, mapping });

impl<S, X, P, U, F> Parser<S, X> for MapWithContext<S, X, P, F>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    F: Fn(P::Output, &mut X) -> U,
{
    type Output = U;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let state = self.parser.parse(input, at)?;
        Ok(state.map(|v| (self.mapping)(v, input.context_mut())))
    }
}

/// Pairs the output with the range it was parsed from.
#[derive(Debug)]
pub struct WithRange<S: ?Sized, X, P> {
    parser: P,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> WithRange<S, X, P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            marker: PhantomData,
        }
    }
}

clone_impl!(WithRange<P> { parser });

impl<S, X, P> Parser<S, X> for WithRange<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = (P::Output, Range<Position>);

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let state = self.parser.parse(input, at)?;
        Ok(state.map_with_range(|v, range| (v, range)))
    }
}

/// Replaces the output with a fixed value.
#[derive(Debug)]
pub struct To<S: ?Sized, X, P, O> {
    parser: P,
    value: O,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P, O> To<S, X, P, O> {
    pub fn new(parser: P, value: O) -> Self {
        Self {
            parser,
            value,
            marker: PhantomData,
        }
    }
}

clone_impl!(To<P, O> { parser, value });

impl<S, X, P, O> Parser<S, X> for To<S, X, P, O>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    O: Clone,
{
    type Output = O;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let state = self.parser.parse(input, at)?;
        Ok(state.map(|_| self.value.clone()))
    }
}

/// Drops the output.
#[derive(Debug)]
pub struct Discard<S: ?Sized, X, P> {
    parser: P,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> Discard<S, X, P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            marker: PhantomData,
        }
    }
}

clone_impl!(Discard<P> { parser });

impl<S, X, P> Parser<S, X> for Discard<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = ();

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let state = self.parser.parse(input, at)?;
        Ok(state.map(|_| ()))
    }
}

/// Wraps the output in a one-element list.
#[derive(Debug)]
pub struct List<S: ?Sized, X, P> {
    parser: P,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> List<S, X, P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            marker: PhantomData,
        }
    }
}

clone_impl!(List<P> { parser });

impl<S, X, P> Parser<S, X> for List<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let state = self.parser.parse(input, at)?;
        Ok(state.map(|v| vec![v]))
    }
}
