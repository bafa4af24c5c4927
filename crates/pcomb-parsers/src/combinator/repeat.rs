use crate::{clone_impl, Marker};
use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};
use std::{
    marker::PhantomData,
    ops::{Bound, RangeBounds},
};

/// Between `from` and `to` matches of `parser`, inclusive on both ends.
pub fn repeat<S, X, P>(from: usize, to: usize, parser: P) -> Repeat<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    Repeat::new(parser, from, to)
}

/// Zero or more matches. Never fails.
pub fn many<S, X, P>(parser: P) -> Repeat<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    Repeat::new(parser, 0, usize::MAX)
}

/// One or more matches. Fails with the first attempt's error when there are none.
pub fn many1<S, X, P>(parser: P) -> Repeat<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    Repeat::new(parser, 1, usize::MAX)
}

/// Greedy bounded repetition, the primitive beneath every counted combinator.
///
/// Matches are collected until `to` are found or `parser` fails. A failure
/// before `from` matches fails the whole repetition with that attempt's error;
/// after it, the failed attempt is dropped and the collected matches are
/// returned. When `to` is unbounded, an attempt that succeeds without
/// consuming anything ends the loop once `from` is reached. `from > to` fails with [`Reason::OutOfBounds`].
#[derive(Debug)]
pub struct Repeat<S: ?Sized, X, P> {
    parser: P,
    from: usize,
    to: usize,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> Repeat<S, X, P> {
    pub fn new(parser: P, from: usize, to: usize) -> Self {
        Self {
            parser,
            from,
            to,
            marker: PhantomData,
        }
    }

    pub fn from_range(parser: P, range: impl RangeBounds<usize>) -> Self {
        let (from, to) = bounds(range);
        Self::new(parser, from, to)
    }
}

clone_impl!(Repeat<P> { parser, from, to });

impl<S, X, P> Parser<S, X> for Repeat<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        if self.from > self.to {
            return fail(Reason::OutOfBounds, at);
        }

        let mut outputs = Vec::new();
        let mut rest = at;

        while outputs.len() < self.to {
            match self.parser.parse(input, rest) {
                Ok(state) => {
                    let stalled = state.is_zero_width();
                    rest = state.end();
                    outputs.push(state.output);

                    if stalled && self.to == usize::MAX && outputs.len() >= self.from {
                        break;
                    }
                }
                Err(e) if outputs.len() < self.from => return Err(e),
                Err(_) => break,
            }
        }

        done(outputs, at..rest)
    }
}

/// Converts a range of counts into inclusive `(from, to)` bounds. An empty
/// range yields `from > to`.
pub(crate) fn bounds(range: impl RangeBounds<usize>) -> (usize, usize) {
    let from = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let to = match range.end_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&0) => return (from.max(1), 0),
        Bound::Excluded(&n) => n - 1,
        Bound::Unbounded => usize::MAX,
    };

    (from, to)
}
