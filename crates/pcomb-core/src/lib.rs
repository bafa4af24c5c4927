mod boxed;
mod input;
mod parse_state;
mod parser;
mod position;
mod source;

pub mod parse_error;

pub use boxed::Boxed;
pub use input::Input;
pub use parse_error::{BoxError, ParseError, Reason, SharedError};
pub use parse_state::ParseState;
pub use parser::Parser;
pub use position::Position;
pub use source::Source;

use std::ops::Range;

pub type ParseResult<O> = Result<ParseState<O>, ParseError>;

pub type ParserResult<S, X, P> = ParseResult<<P as Parser<S, X>>::Output>;

pub fn done<O>(output: O, range: Range<Position>) -> ParseResult<O> {
    Ok(ParseState::new(output, range))
}

pub fn fail<O>(reason: Reason, at: Position) -> ParseResult<O> {
    Err(ParseError::new(reason, at))
}
