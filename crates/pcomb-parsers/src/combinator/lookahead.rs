use super::{choice, Alternatives, Choice};
use crate::{clone_impl, Marker};
use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};
use std::marker::PhantomData;

/// Succeeds without consuming anything when `parser` would succeed here.
pub fn peek<S, X, P>(parser: P) -> Peek<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    Peek::new(parser)
}

/// Succeeds without consuming anything when `parser` would fail here.
pub fn not<S, X, P>(parser: P) -> Not<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    Not::new(parser)
}

/// Succeeds without consuming anything when none of `alternatives` would succeed.
pub fn not_any<S, X, A>(alternatives: A) -> Not<S, X, Choice<S, X, A>>
where
    S: ?Sized + Source,
    A: Alternatives<S, X>,
{
    Not::new(choice(alternatives))
}

/// Positive lookahead. Failures of the inner parser pass through unchanged.
#[derive(Debug)]
pub struct Peek<S: ?Sized, X, P> {
    parser: P,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> Peek<S, X, P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            marker: PhantomData,
        }
    }
}

clone_impl!(Peek<P> { parser });

impl<S, X, P> Parser<S, X> for Peek<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = ();

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser.parse(input, at)?;
        done((), at..at)
    }
}

/// Negative lookahead. The inner error is discarded; an inner success fails
/// with [`Reason::NoMatch`] at the current position.
#[derive(Debug)]
pub struct Not<S: ?Sized, X, P> {
    parser: P,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> Not<S, X, P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            marker: PhantomData,
        }
    }
}

clone_impl!(Not<P> { parser });

impl<S, X, P> Parser<S, X> for Not<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = ();

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match self.parser.parse(input, at) {
            Ok(_) => fail(Reason::NoMatch, at),
            Err(_) => done((), at..at),
        }
    }
}
