use crate::{Position, Source};
use std::{fmt::Debug, sync::Arc};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Why a parser failed.
#[derive(Debug, Clone, Error)]
pub enum Reason {
    /// A predicate or every alternative did not hold.
    #[error("no match")]
    NoMatch,
    /// The source was exhausted where an element was required.
    #[error("unexpected end of input")]
    EndOfInput,
    /// A repetition was configured with `from > to`.
    #[error("repetition bounds out of range")]
    OutOfBounds,
    /// An error raised while interpreting a matched value.
    #[error("{0}")]
    Wrapped(#[source] SharedError),
}

impl Reason {
    pub fn wrap(error: impl Into<BoxError>) -> Self {
        let error: BoxError = error.into();
        Reason::Wrapped(Arc::from(error))
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Reason::NoMatch)
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Reason::EndOfInput)
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Reason::OutOfBounds)
    }

    /// The wrapped error, if it is of type `E`.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Reason::Wrapped(e) => e.downcast_ref(),
            _ => None,
        }
    }
}

/// A failure and where it happened.
///
/// `Display` prints the raw position index, which is a byte offset for `str`
/// sources. Use [`describe`](ParseError::describe) for element offsets.
#[derive(Debug, Clone, Error)]
#[error("{reason} at index {position}")]
pub struct ParseError {
    pub reason: Reason,
    pub position: Position,
    #[source]
    cause: Option<Box<ParseError>>,
}

impl ParseError {
    pub fn new(reason: Reason, position: Position) -> Self {
        Self {
            reason,
            position,
            cause: None,
        }
    }

    pub fn no_match(position: Position) -> Self {
        Self::new(Reason::NoMatch, position)
    }

    pub fn end_of_input(position: Position) -> Self {
        Self::new(Reason::EndOfInput, position)
    }

    pub fn out_of_bounds(position: Position) -> Self {
        Self::new(Reason::OutOfBounds, position)
    }

    pub fn wrap(error: impl Into<BoxError>, position: Position) -> Self {
        Self::new(Reason::wrap(error), position)
    }

    /// Anchors an error raised while interpreting a match. A `ParseError`
    /// passes through unchanged and a bare `Reason` is placed at `position`.
    /// Any other error is wrapped.
    pub fn lift(error: impl Into<BoxError>, position: Position) -> Self {
        let error: BoxError = error.into();
        let error = match error.downcast::<ParseError>() {
            Ok(e) => return *e,
            Err(e) => e,
        };

        match error.downcast::<Reason>() {
            Ok(reason) => Self::new(*reason, position),
            Err(e) => Self::wrap(e, position),
        }
    }

    /// Attaches an inner failure. The engine itself never does this.
    pub fn caused_by(mut self, cause: ParseError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn cause(&self) -> Option<&ParseError> {
        self.cause.as_deref()
    }

    pub fn offset<S: ?Sized + Source>(&self, source: &S) -> usize {
        source.offset(self.position)
    }

    pub fn remaining<'s, S: ?Sized + Source>(&self, source: &'s S) -> &'s S {
        source.rest(self.position)
    }

    pub fn unexpected<S: ?Sized + Source>(&self, source: &S) -> Option<S::Element> {
        source.element_at(self.position).map(|(e, _)| e)
    }

    /// Renders a message such as `unexpected 'x' at offset 12`.
    pub fn describe<S>(&self, source: &S) -> String
    where
        S: ?Sized + Source,
        S::Element: Debug,
    {
        let offset = self.offset(source);
        match (&self.reason, self.unexpected(source)) {
            (Reason::Wrapped(e), _) => format!("{e} at offset {offset}"),
            (Reason::OutOfBounds, _) => format!("{} at offset {offset}", self.reason),
            (_, Some(e)) => format!("unexpected {e:?} at offset {offset}"),
            (_, None) => format!("unexpected end of input at offset {offset}"),
        }
    }

    /// Up to `max` characters of the text remaining at the failure.
    pub fn snippet<'s>(&self, source: &'s str, max: usize) -> &'s str {
        let rest = source.rest(self.position);
        match rest.char_indices().nth(max) {
            Some((i, _)) => &rest[..i],
            None => rest,
        }
    }
}
