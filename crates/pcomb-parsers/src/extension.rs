use crate::{
    combinator::{
        delimited_by, flatten, separated_by, separated_by1, surrounded_by, Delimited, Discard,
        FlatMap, Flatten, IgnoreThen, List, Map, MapWithContext, Not, Opt, Or, Peek, Ref, Repeat,
        SeparatedBy, SeparatedBy1, Then, ThenIgnore, To, TryMap, WithRange,
    },
    primitive::{default_value, just, DefaultValue, Just},
    run::run_in,
};
use pcomb_core::{BoxError, Boxed, ParseError, Parser, Source};
use std::ops::RangeBounds;

/// Method-style constructors for every combinator, available on all parsers.
pub trait ParserExtension<S: ?Sized + Source, X = ()>: Parser<S, X> {
    fn map<U, F>(self, mapping: F) -> Map<S, X, Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapping)
    }

    /// Like [`map`](Self::map), but `mapping` may reject the output. The error
    /// is reported at the start of the consumed range.
    fn try_map<U, E, F>(self, mapping: F) -> TryMap<S, X, Self, F>
    where
        Self: Sized,
        E: Into<BoxError>,
        F: Fn(Self::Output) -> Result<U, E>,
    {
        TryMap::new(self, mapping)
    }

    fn map_with_context<U, F>(self, mapping: F) -> MapWithContext<S, X, Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output, &mut X) -> U,
    {
        MapWithContext::new(self, mapping)
    }

    fn with_range(self) -> WithRange<S, X, Self>
    where
        Self: Sized,
    {
        WithRange::new(self)
    }

    fn to<O: Clone>(self, value: O) -> To<S, X, Self, O>
    where
        Self: Sized,
    {
        To::new(self, value)
    }

    fn discard(self) -> Discard<S, X, Self>
    where
        Self: Sized,
    {
        Discard::new(self)
    }

    fn list(self) -> List<S, X, Self>
    where
        Self: Sized,
    {
        List::new(self)
    }

    fn flat_map<Q, F>(self, next: F) -> FlatMap<S, X, Self, F>
    where
        Self: Sized,
        Q: Parser<S, X>,
        F: Fn(Self::Output) -> Q,
    {
        FlatMap::new(self, next)
    }

    fn flatten(self) -> Flatten<S, X, Self, Self::Output>
    where
        Self: Sized,
        Self::Output: Parser<S, X>,
    {
        flatten(self)
    }

    fn then<P: Parser<S, X>>(self, other: P) -> Then<S, X, Self, P>
    where
        Self: Sized,
    {
        Then::new(self, other)
    }

    fn then_ignore<P: Parser<S, X>>(self, other: P) -> ThenIgnore<S, X, Self, P>
    where
        Self: Sized,
    {
        ThenIgnore::new(self, other)
    }

    fn ignore_then<P: Parser<S, X>>(self, other: P) -> IgnoreThen<S, X, Self, P>
    where
        Self: Sized,
    {
        IgnoreThen::new(self, other)
    }

    fn or<P>(self, other: P) -> Or<S, X, Self, P>
    where
        Self: Sized,
        P: Parser<S, X, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Between `from` and `to` matches, inclusive.
    fn repeat(self, from: usize, to: usize) -> Repeat<S, X, Self>
    where
        Self: Sized,
    {
        Repeat::new(self, from, to)
    }

    fn repeat_exact(self, count: usize) -> Repeat<S, X, Self>
    where
        Self: Sized,
    {
        Repeat::new(self, count, count)
    }

    fn repeat_range(self, range: impl RangeBounds<usize>) -> Repeat<S, X, Self>
    where
        Self: Sized,
    {
        Repeat::from_range(self, range)
    }

    fn many(self) -> Repeat<S, X, Self>
    where
        Self: Sized,
    {
        Repeat::new(self, 0, usize::MAX)
    }

    fn many1(self) -> Repeat<S, X, Self>
    where
        Self: Sized,
    {
        Repeat::new(self, 1, usize::MAX)
    }

    fn optional(self, default: Self::Output) -> Or<S, X, Self, Just<Self::Output>>
    where
        Self: Sized,
        Self::Output: Clone,
    {
        Or::new(self, just(default))
    }

    fn or_default(self) -> Or<S, X, Self, DefaultValue<Self::Output>>
    where
        Self: Sized,
        Self::Output: Default,
    {
        Or::new(self, default_value())
    }

    fn opt(self) -> Opt<S, X, Self>
    where
        Self: Sized,
    {
        Opt::new(self)
    }

    fn peek(self) -> Peek<S, X, Self>
    where
        Self: Sized,
    {
        Peek::new(self)
    }

    fn not(self) -> Not<S, X, Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    fn delimited_by<Open, Close>(self, open: Open, close: Close) -> Delimited<S, X, Open, Self, Close>
    where
        Self: Sized,
        Open: Parser<S, X>,
        Close: Parser<S, X>,
    {
        delimited_by(open, self, close)
    }

    fn surrounded_by<D>(self, delimiter: D) -> Delimited<S, X, D, Self, D>
    where
        Self: Sized,
        D: Parser<S, X> + Clone,
    {
        surrounded_by(self, delimiter)
    }

    fn separated_by<Sep>(self, separator: Sep) -> SeparatedBy<S, X, Self, Sep, Self::Output>
    where
        Self: Sized + Clone,
        Sep: Parser<S, X>,
    {
        separated_by(self, separator)
    }

    fn separated_by1<Sep>(self, separator: Sep) -> SeparatedBy1<S, X, Self, Sep, Self::Output>
    where
        Self: Sized + Clone,
        Sep: Parser<S, X>,
    {
        separated_by1(self, separator)
    }

    fn by_ref(&self) -> Ref<'_, S, X, Self> {
        Ref::new(self)
    }

    fn boxed<'a>(self) -> Boxed<'a, S, X, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Boxed::new(self)
    }

    #[cfg(feature = "tracing")]
    fn traced(self, tag: impl Into<String>) -> crate::combinator::Traced<S, X, Self>
    where
        Self: Sized,
    {
        crate::combinator::Traced::new(self, tag)
    }

    /// Invokes the parser at the start of `source` with `context` available to
    /// every combinator for the duration of the parse.
    fn run_with(&self, source: &S, context: &mut X) -> Result<Self::Output, ParseError> {
        run_in(self, source, context)
    }
}

impl<S: ?Sized + Source, X, P: Parser<S, X>> ParserExtension<S, X> for P {}
