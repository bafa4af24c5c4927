use crate::{Input, ParseResult, Parser, Position, Source};
use std::{fmt, sync::Arc};

/// A type-erased parser. Clones share the same underlying parser.
pub struct Boxed<'a, S: ?Sized, X, O> {
    parser: Arc<dyn Parser<S, X, Output = O> + Send + Sync + 'a>,
}

impl<'a, S: ?Sized + Source, X, O> Boxed<'a, S, X, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<S, X, Output = O> + Send + Sync + 'a,
    {
        Self {
            parser: Arc::new(parser),
        }
    }
}

impl<S: ?Sized, X, O> Clone for Boxed<'_, S, X, O> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<S: ?Sized, X, O> fmt::Debug for Boxed<'_, S, X, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed").finish_non_exhaustive()
    }
}

impl<S: ?Sized + Source, X, O> Parser<S, X> for Boxed<'_, S, X, O> {
    type Output = O;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParseResult<O> {
        self.parser.parse(input, at)
    }
}
