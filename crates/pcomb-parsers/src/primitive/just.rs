use pcomb_core::{done, BoxError, Input, ParseError, Parser, ParserResult, Position, Reason, Source};
use std::marker::PhantomData;

/// Succeeds without consuming anything, producing `value`.
pub fn just<O: Clone>(value: O) -> Just<O> {
    Just { value }
}

#[derive(Debug, Clone, Copy)]
pub struct Just<O> {
    value: O,
}

impl<S: ?Sized + Source, X, O: Clone> Parser<S, X> for Just<O> {
    type Output = O;

    fn parse(&self, _: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        done(self.value.clone(), at..at)
    }
}

/// Succeeds without consuming anything, producing `O::default()`.
pub fn default_value<O: Default>() -> DefaultValue<O> {
    DefaultValue(PhantomData)
}

#[derive(Debug)]
pub struct DefaultValue<O>(PhantomData<fn() -> O>);

impl<O> Clone for DefaultValue<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for DefaultValue<O> {}

impl<S: ?Sized + Source, X, O: Default> Parser<S, X> for DefaultValue<O> {
    type Output = O;

    fn parse(&self, _: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        done(O::default(), at..at)
    }
}

/// Always fails with `reason` at the invocation position.
///
/// Placed last in a [`choice`](crate::choice), it replaces the otherwise
/// surfaced error of the last alternative with a descriptive one.
pub fn fail<O>(reason: Reason) -> Fail<O> {
    Fail {
        reason,
        marker: PhantomData,
    }
}

/// Always fails, wrapping `error`.
pub fn fail_with<O>(error: impl Into<BoxError>) -> Fail<O> {
    fail(Reason::wrap(error))
}

#[derive(Debug)]
pub struct Fail<O> {
    reason: Reason,
    marker: PhantomData<fn() -> O>,
}

impl<O> Clone for Fail<O> {
    fn clone(&self) -> Self {
        Self {
            reason: self.reason.clone(),
            marker: PhantomData,
        }
    }
}

impl<S: ?Sized + Source, X, O> Parser<S, X> for Fail<O> {
    type Output = O;

    fn parse(&self, _: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        Err(ParseError::new(self.reason.clone(), at))
    }
}

/// Produces the current position without consuming anything.
pub fn position() -> CurrentPosition {
    CurrentPosition
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentPosition;

impl<S: ?Sized + Source, X> Parser<S, X> for CurrentPosition {
    type Output = Position;

    fn parse(&self, _: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        done(at, at..at)
    }
}

#[cfg(test)]
mod test {
    use super::{default_value, fail, fail_with, just, position};
    use crate::{ParserExtension, Run};
    use pcomb_core::Reason;

    #[derive(Debug, thiserror::Error)]
    #[error("expected a value")]
    struct ExpectedValue;

    #[test]
    fn just_consumes_nothing() {
        let parser = just(42).then_ignore(crate::primitive::end());

        assert_eq!(parser.run("").unwrap(), 42);
        assert!(parser.run("x").is_err());
    }

    #[test]
    fn default_value_is_produced() {
        assert_eq!(default_value::<Vec<u8>>().run("abc").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn fail_reports_its_reason_at_invocation() {
        let err = fail::<()>(Reason::OutOfBounds).run("abc").unwrap_err();
        assert!(err.reason.is_out_of_bounds());
        assert_eq!(err.position.index(), 0);

        let err = fail_with::<()>(ExpectedValue).run("abc").unwrap_err();
        assert!(err.reason.downcast_ref::<ExpectedValue>().is_some());
    }

    #[test]
    fn position_tracks_progress() {
        let parser = crate::primitive::the('a').ignore_then(position());

        assert_eq!(parser.run("ab").unwrap().index(), 1);
    }
}
