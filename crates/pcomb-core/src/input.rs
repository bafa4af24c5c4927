use crate::Source;

/// What a parser sees during one top-level parse: the borrowed source and the
/// caller's context.
///
/// The context lives exactly as long as the parse. It is not rolled back on
/// backtracking; grammars that record into it must tolerate entries from
/// alternatives that later failed.
#[derive(Debug)]
pub struct Input<'a, S: ?Sized, X = ()> {
    source: &'a S,
    context: &'a mut X,
}

impl<'a, S: ?Sized + Source, X> Input<'a, S, X> {
    pub fn new(source: &'a S, context: &'a mut X) -> Self {
        Self { source, context }
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    pub fn context(&self) -> &X {
        self.context
    }

    pub fn context_mut(&mut self) -> &mut X {
        self.context
    }
}
