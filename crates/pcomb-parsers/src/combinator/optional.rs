use super::Or;
use crate::{
    clone_impl,
    primitive::{DefaultValue, Just},
    Marker,
};
use pcomb_core::{Input, ParseState, Parser, ParserResult, Position, Source};
use std::marker::PhantomData;

/// Falls back to `default` without consuming anything when `parser` fails.
pub fn optional<S, X, P>(parser: P, default: P::Output) -> Or<S, X, P, Just<P::Output>>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    P::Output: Clone,
{
    Or::new(parser, crate::primitive::just(default))
}

/// Falls back to `Default::default()` when `parser` fails.
pub fn or_default<S, X, P>(parser: P) -> Or<S, X, P, DefaultValue<P::Output>>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    P::Output: Default,
{
    Or::new(parser, crate::primitive::default_value())
}

/// `Some` output on success, a zero-width `None` on failure.
#[derive(Debug)]
pub struct Opt<S: ?Sized, X, P> {
    parser: P,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> Opt<S, X, P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            marker: PhantomData,
        }
    }
}

clone_impl!(Opt<P> { parser });

impl<S, X, P> Parser<S, X> for Opt<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match self.parser.parse(input, at) {
            Ok(state) => Ok(state.map(Some)),
            Err(_) => Ok(ParseState::zero_width(None, at)),
        }
    }
}
