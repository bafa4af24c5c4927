use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};
use std::marker::PhantomData;

/// Matches any single element. Fails only at the end of input.
pub fn any_element<T>() -> AnyElement<T> {
    AnyElement(PhantomData)
}

#[derive(Debug)]
pub struct AnyElement<T>(PhantomData<fn() -> T>);

impl<T> Clone for AnyElement<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AnyElement<T> {}

impl<S: ?Sized + Source<Element = T>, X, T> Parser<S, X> for AnyElement<T> {
    type Output = T;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match input.source().element_at(at) {
            Some((e, next)) => done(e, at..next),
            None => fail(Reason::EndOfInput, at),
        }
    }
}

/// Matches one element contained in `elements`.
pub fn one_of<T>(elements: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf {
        elements: elements.into_iter().collect(),
    }
}

#[derive(Debug, Clone)]
pub struct OneOf<T> {
    elements: Vec<T>,
}

impl<S, X, T> Parser<S, X> for OneOf<T>
where
    S: ?Sized + Source<Element = T>,
    T: PartialEq,
{
    type Output = T;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match input.source().element_at(at) {
            Some((e, next)) if self.elements.iter().any(|t| e == *t) => done(e, at..next),
            Some(_) => fail(Reason::NoMatch, at),
            None => fail(Reason::EndOfInput, at),
        }
    }
}

/// Matches one element not contained in `elements`.
pub fn none_of<T>(elements: impl IntoIterator<Item = T>) -> NoneOf<T> {
    NoneOf {
        elements: elements.into_iter().collect(),
    }
}

#[derive(Debug, Clone)]
pub struct NoneOf<T> {
    elements: Vec<T>,
}

impl<S, X, T> Parser<S, X> for NoneOf<T>
where
    S: ?Sized + Source<Element = T>,
    T: PartialEq,
{
    type Output = T;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        match input.source().element_at(at) {
            Some((e, next)) if !self.elements.iter().any(|t| e == *t) => done(e, at..next),
            Some(_) => fail(Reason::NoMatch, at),
            None => fail(Reason::EndOfInput, at),
        }
    }
}
