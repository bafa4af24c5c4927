use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};
use std::marker::PhantomData;

/// Matches one element for which `predicate` holds.
pub fn satisfy<T, F: Fn(&T) -> bool>(predicate: F) -> Satisfy<T, F> {
    Satisfy::new(predicate)
}

#[derive(Debug)]
pub struct Satisfy<T, F> {
    predicate: F,
    marker: PhantomData<fn(&T)>,
}

impl<T, F: Fn(&T) -> bool> Satisfy<T, F> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            marker: PhantomData,
        }
    }
}

impl<T, F: Clone> Clone for Satisfy<T, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, X, T, F> Parser<S, X> for Satisfy<T, F>
where
    S: ?Sized + Source<Element = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match input.source().element_at(at) {
            Some((e, next)) if (self.predicate)(&e) => done(e, at..next),
            Some(_) => fail(Reason::NoMatch, at),
            None => fail(Reason::EndOfInput, at),
        }
    }
}
