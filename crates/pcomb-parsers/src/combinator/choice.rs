use crate::Marker;
use pcomb_core::{Input, ParseError, ParseResult, Parser, ParserResult, Position, Source};
use std::marker::PhantomData;

/// A fixed list of alternatives sharing one output type.
///
/// Implemented for arrays, `Vec`s and tuples of up to twelve parsers.
pub trait Alternatives<S: ?Sized + Source, X> {
    type Output;

    /// Tries every alternative at `at` in order and returns the first success,
    /// or the error of the last alternative.
    fn parse_first(&self, input: &mut Input<'_, S, X>, at: Position) -> ParseResult<Self::Output>;
}

/// Ordered choice over `alternatives`.
///
/// An empty list fails with `NoMatch` at the invocation position.
pub fn choice<S: ?Sized, X, A>(alternatives: A) -> Choice<S, X, A> {
    Choice {
        alternatives,
        marker: PhantomData,
    }
}

#[derive(Debug)]
pub struct Choice<S: ?Sized, X, A> {
    alternatives: A,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, A: Clone> Clone for Choice<S, X, A> {
    fn clone(&self) -> Self {
        choice(self.alternatives.clone())
    }
}

impl<S: ?Sized + Source, X, A: Alternatives<S, X>> Parser<S, X> for Choice<S, X, A> {
    type Output = A::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.alternatives.parse_first(input, at)
    }
}

fn parse_first_of<'p, S, X, P>(
    parsers: impl IntoIterator<Item = &'p P>,
    input: &mut Input<'_, S, X>,
    at: Position,
) -> ParseResult<P::Output>
where
    S: ?Sized + Source,
    P: 'p + Parser<S, X>,
{
    let mut last = ParseError::no_match(at);
    for parser in parsers {
        match parser.parse(input, at) {
            Ok(state) => return Ok(state),
            Err(e) => last = e,
        }
    }

    Err(last)
}

impl<S: ?Sized + Source, X, P: Parser<S, X>, const N: usize> Alternatives<S, X> for [P; N] {
    type Output = P::Output;

    fn parse_first(&self, input: &mut Input<'_, S, X>, at: Position) -> ParseResult<P::Output> {
        parse_first_of(self, input, at)
    }
}

impl<S: ?Sized + Source, X, P: Parser<S, X>> Alternatives<S, X> for Vec<P> {
    type Output = P::Output;

    fn parse_first(&self, input: &mut Input<'_, S, X>, at: Position) -> ParseResult<P::Output> {
        parse_first_of(self, input, at)
    }
}

macro_rules! tuple_impl {
    ($t:ident, $u:ident) => {
        tuple_impl!(@impl $t, $u);
    };

    ( $u:ident, $($t:ident),+ ) => {
        tuple_impl!(@impl $u, $($t),*);
        tuple_impl!($($t),*);
    };

    (@impl $p0:ident, $($p:ident),+) => {
        impl<S, X, $p0, $($p),*> Alternatives<S, X> for ($p0, $($p),*)
        where
            S: ?Sized + Source,
            $p0: Parser<S, X>,
            $($p: Parser<S, X, Output = <$p0 as Parser<S, X>>::Output>),*
        {
            type Output = <$p0 as Parser<S, X>>::Output;

            #[allow(non_snake_case)]
            fn parse_first(
                &self,
                input: &mut Input<'_, S, X>,
                at: Position,
            ) -> ParseResult<Self::Output> {
                let ($p0, $($p),*) = self;
                let mut last = match $p0.parse(input, at) {
                    Ok(state) => return Ok(state),
                    Err(e) => e,
                };
                $(
                    match $p.parse(input, at) {
                        Ok(state) => return Ok(state),
                        Err(e) => last = e,
                    }
                )*

                Err(last)
            }
        }
    };
}

tuple_impl!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);
