use pcomb_core::{Input, ParseError, Parser, Source};

/// Runs a context-free parser over a whole source.
pub trait Run<S: ?Sized + Source>: Parser<S> {
    /// Invokes the parser at the start of `source`, discarding the consumed range.
    fn run(&self, source: &S) -> Result<Self::Output, ParseError> {
        run_in(self, source, &mut ())
    }
}

impl<S: ?Sized + Source, P: Parser<S>> Run<S> for P {}

pub(crate) fn run_in<S, X, P>(parser: &P, source: &S, context: &mut X) -> Result<P::Output, ParseError>
where
    S: ?Sized + Source,
    P: ?Sized + Parser<S, X>,
{
    let mut input = Input::new(source, context);
    let result = parser.parse(&mut input, source.start());

    #[cfg(feature = "tracing")]
    match &result {
        Ok(state) => tracing::trace!(consumed = source.offset(state.end()), "parse succeeded"),
        Err(e) => tracing::trace!(offset = e.offset(source), reason = %e.reason, "parse failed"),
    }

    result.map(|state| state.output)
}
