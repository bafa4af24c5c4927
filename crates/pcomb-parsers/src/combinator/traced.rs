use crate::{clone_impl, Marker};
use pcomb_core::{Input, Parser, ParserResult, Position, Source};
use std::{fmt::Debug, marker::PhantomData};
use tracing::{debug, trace};

/// Reports every invocation of `parser` under `tag`.
pub fn traced<S, X, P>(parser: P, tag: impl Into<String>) -> Traced<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    Traced::new(parser, tag)
}

/// Emits a `trace` event before each invocation and a `debug` event with the
/// outcome. The parse itself is unaffected.
#[derive(Debug)]
pub struct Traced<S: ?Sized, X, P> {
    parser: P,
    tag: String,
    marker: Marker<S, X>,
}

impl<S: ?Sized, X, P> Traced<S, X, P> {
    pub fn new(parser: P, tag: impl Into<String>) -> Self {
        Self {
            parser,
            tag: tag.into(),
            marker: PhantomData,
        }
    }
}

clone_impl!(Traced<P> { parser, tag });

impl<S, X, P> Parser<S, X> for Traced<S, X, P>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    P::Output: Debug,
{
    type Output = P::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let source = input.source();
        trace!(tag = %self.tag, offset = source.offset(at), "invoking parser");

        let result = self.parser.parse(input, at);
        match &result {
            Ok(state) => debug!(
                tag = %self.tag,
                consumed = source.offset(state.end()) - source.offset(at),
                output = ?state.output,
                "parser succeeded"
            ),
            Err(e) => debug!(
                tag = %self.tag,
                offset = e.offset(source),
                reason = %e.reason,
                "parser failed"
            ),
        }

        result
    }
}
