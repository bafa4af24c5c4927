use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};
use std::marker::PhantomData;

/// Matches one element and projects it through `get`; `None` is a mismatch.
///
/// Mostly useful over token sources, to pull the payload out of one enum variant.
pub fn extract<E, T, F: Fn(E) -> Option<T>>(get: F) -> Extract<E, F> {
    Extract {
        get,
        marker: PhantomData,
    }
}

#[derive(Debug)]
pub struct Extract<E, F> {
    get: F,
    marker: PhantomData<fn(E)>,
}

impl<E, F: Clone> Clone for Extract<E, F> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, X, E, T, F> Parser<S, X> for Extract<E, F>
where
    S: ?Sized + Source<Element = E>,
    F: Fn(E) -> Option<T>,
{
    type Output = T;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let Some((e, next)) = input.source().element_at(at) else {
            return fail(Reason::EndOfInput, at);
        };

        match (self.get)(e) {
            Some(v) => done(v, at..next),
            None => fail(Reason::NoMatch, at),
        }
    }
}
