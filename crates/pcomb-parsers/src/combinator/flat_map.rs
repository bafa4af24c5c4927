use crate::{clone_impl, Marker};
use pcomb_core::{Input, Parser, ParserResult, Position, Source};
use std::marker::PhantomData;

/// Monadic bind: builds the next parser from the output of the first and runs
/// it where the first left off.
#[derive(Debug)]
pub struct FlatMap<S: ?Sized, X, P, F> {
    parser: P,
    next: F,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P, F> FlatMap<S, X, P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Self {
            parser,
            next,
            marker: PhantomData,
        }
    }
}

clone_impl!(FlatMap<P, F> { parser, next });

impl<S, X, P, Q, F> Parser<S, X> for FlatMap<S, X, P, F>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    Q: Parser<S, X>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser
            .parse(input, at)?
            .bind(|v, next| (self.next)(v).parse(input, next))
    }
}

/// Runs the parser produced by `parser` where `parser` left off.
pub type Flatten<S, X, P, Q> = FlatMap<S, X, P, fn(Q) -> Q>;

pub fn flatten<S, X, P, Q>(parser: P) -> Flatten<S, X, P, Q>
where
    S: ?Sized + Source,
    P: Parser<S, X, Output = Q>,
    Q: Parser<S, X>,
{
    FlatMap::new(parser, identity as fn(_) -> _)
}

fn identity<Q>(parser: Q) -> Q {
    parser
}
