use super::{IgnoreThen, ThenIgnore};
use pcomb_core::{Parser, Source};

pub type Delimited<S, X, Open, P, Close> = IgnoreThen<S, X, Open, ThenIgnore<S, X, P, Close>>;

/// `parser` between `open` and `close`, keeping only its output.
pub fn delimited_by<S, X, Open, P, Close>(open: Open, parser: P, close: Close) -> Delimited<S, X, Open, P, Close>
where
    S: ?Sized + Source,
    Open: Parser<S, X>,
    P: Parser<S, X>,
    Close: Parser<S, X>,
{
    IgnoreThen::new(open, ThenIgnore::new(parser, close))
}

/// `parser` with the same delimiter on both sides.
pub fn surrounded_by<S, X, P, D>(parser: P, delimiter: D) -> Delimited<S, X, D, P, D>
where
    S: ?Sized + Source,
    P: Parser<S, X>,
    D: Parser<S, X> + Clone,
{
    delimited_by(delimiter.clone(), parser, delimiter)
}
