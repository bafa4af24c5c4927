//! Generic parser combinators over in-memory sources.
//!
//! Parsers are plain values built by composing primitives ([`the`](primitive::the),
//! [`satisfy`](primitive::satisfy), ...) with combinators, mostly through the
//! [`ParserExtension`] methods. They are immutable and may be shared across
//! threads; per-parse mutable state lives in the context passed to
//! [`parse_with`].
//!
//! ```
//! use pcomb::prelude::*;
//!
//! let digit = satisfy(|c: &char| c.is_ascii_digit());
//! let number = digit
//!     .many1()
//!     .try_map(|cs| cs.into_iter().collect::<String>().parse::<u32>());
//! let list = number.separated_by(the(',')).delimited_by(the('['), the(']'));
//!
//! assert_eq!(parse("[1,20,300]", &list).unwrap(), vec![1, 20, 300]);
//! ```

pub use pcomb_core::*;
pub use pcomb_parsers as parsers;
pub use pcomb_parsers::{combinator, predicate, primitive, ParserExtension, Run};

pub mod prelude {
    pub use crate::{parse, parse_with};
    pub use pcomb_core::{Boxed, Input, ParseError, ParseState, Parser, Position, Reason, Source};
    pub use pcomb_parsers::{
        combinator::{
            append, chain, choice, concat, deferred, delimited_by, flatten, many, many1, not,
            not_any, optional, or_default, pair, peek, prepend, repeat, separated_by, separated_by1,
            surrounded_by, triple,
        },
        predicate::{all_of, any_of, in_set, negate, only, PredicateExt},
        primitive::*,
        ParserExtension, Run,
    };

    #[cfg(feature = "tracing")]
    pub use pcomb_parsers::combinator::traced;
}

/// Runs `parser` over the whole of `source` without a context.
pub fn parse<S, P>(source: &S, parser: &P) -> Result<P::Output, ParseError>
where
    S: ?Sized + Source,
    P: Parser<S>,
{
    parse_with(source, parser, &mut ())
}

/// Runs `parser` over `source`, giving every combinator access to `context`.
///
/// The context is not rolled back when an alternative fails, so anything a
/// failed branch recorded stays recorded.
pub fn parse_with<S, X, P>(source: &S, parser: &P, context: &mut X) -> Result<P::Output, ParseError>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("parse", len = source.offset(source.end())).entered();

    parser.run_with(source, context)
}
