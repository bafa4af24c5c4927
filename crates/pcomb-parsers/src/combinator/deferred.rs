use pcomb_core::{Input, Parser, ParserResult, Position, Source};
use std::{fmt, sync::OnceLock};

/// Builds the inner parser from `thunk` on first invocation and reuses it
/// afterwards.
///
/// This is what makes recursive grammars expressible: a rule may refer to
/// itself (or to a rule that refers back to it) through `deferred` without
/// being constructed endlessly.
///
/// ```ignore
/// fn list() -> Boxed<'static, str, (), usize> {
///     the('(')
///         .ignore_then(deferred(list).many())
///         .then_ignore(the(')'))
///         .map(|inner| inner.len())
///         .boxed()
/// }
/// ```
pub fn deferred<F, P>(thunk: F) -> Deferred<F, P>
where
    F: Fn() -> P,
{
    Deferred {
        thunk,
        parser: OnceLock::new(),
    }
}

pub struct Deferred<F, P> {
    thunk: F,
    parser: OnceLock<P>,
}

impl<F, P> Deferred<F, P> {
    pub fn is_built(&self) -> bool {
        self.parser.get().is_some()
    }
}

impl<F: Clone, P> Clone for Deferred<F, P> {
    fn clone(&self) -> Self {
        Self {
            thunk: self.thunk.clone(),
            parser: OnceLock::new(),
        }
    }
}

impl<F, P> fmt::Debug for Deferred<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("built", &self.is_built())
            .finish_non_exhaustive()
    }
}

impl<S, X, F, P> Parser<S, X> for Deferred<F, P>
where
    S: ?Sized + Source,
    F: Fn() -> P,
    P: Parser<S, X>,
{
    type Output = P::Output;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        self.parser.get_or_init(&self.thunk).parse(input, at)
    }
}

#[cfg(test)]
mod test {
    use super::deferred;
    use crate::{primitive::the, ParserExtension, Run};
    use pcomb_core::Boxed;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn nesting() -> Boxed<'static, str, (), usize> {
        the('(')
            .ignore_then(deferred(nesting).opt())
            .then_ignore(the(')'))
            .map(|inner| inner.map_or(1, |depth| depth + 1))
            .boxed()
    }

    #[test]
    fn recursive_rule() {
        assert_eq!(nesting().run("()").unwrap(), 1);
        assert_eq!(nesting().run("((()))").unwrap(), 3);

        let err = nesting().run("(()").unwrap_err();
        assert!(err.reason.is_end_of_input());
        assert_eq!(err.position.index(), 3);
    }

    #[test]
    fn thunk_runs_once_on_first_use() {
        static BUILT: AtomicUsize = AtomicUsize::new(0);

        let parser = deferred(|| {
            BUILT.fetch_add(1, Ordering::SeqCst);
            the('a')
        });
        assert!(!parser.is_built());
        assert_eq!(BUILT.load(Ordering::SeqCst), 0);

        parser.run("a").unwrap();
        parser.run("a").unwrap();
        assert!(parser.is_built());
        assert_eq!(BUILT.load(Ordering::SeqCst), 1);
    }
}
