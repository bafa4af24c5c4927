use super::{Map, Then};
use pcomb_core::{Parser, Source};

/// Two list parsers in sequence, producing one list.
pub type Concat<S, X, P0, P1, T> = Map<S, X, Then<S, X, P0, P1>, fn((Vec<T>, Vec<T>)) -> Vec<T>>;

/// A list parser followed by a single-element parser.
pub type Append<S, X, P0, P1, T> = Map<S, X, Then<S, X, P0, P1>, fn((Vec<T>, T)) -> Vec<T>>;

/// A single-element parser followed by a list parser.
pub type Prepend<S, X, P0, P1, T> = Map<S, X, Then<S, X, P0, P1>, fn((T, Vec<T>)) -> Vec<T>>;

pub fn concat<S, X, T, P0, P1>(parser0: P0, parser1: P1) -> Concat<S, X, P0, P1, T>
where
    S: ?Sized + Source,
    P0: Parser<S, X, Output = Vec<T>>,
    P1: Parser<S, X, Output = Vec<T>>,
{
    Map::new(Then::new(parser0, parser1), join as fn(_) -> _)
}

pub fn append<S, X, T, P0, P1>(parser0: P0, parser1: P1) -> Append<S, X, P0, P1, T>
where
    S: ?Sized + Source,
    P0: Parser<S, X, Output = Vec<T>>,
    P1: Parser<S, X, Output = T>,
{
    Map::new(Then::new(parser0, parser1), push as fn(_) -> _)
}

pub fn prepend<S, X, T, P0, P1>(parser0: P0, parser1: P1) -> Prepend<S, X, P0, P1, T>
where
    S: ?Sized + Source,
    P0: Parser<S, X, Output = T>,
    P1: Parser<S, X, Output = Vec<T>>,
{
    Map::new(Then::new(parser0, parser1), cons as fn(_) -> _)
}

fn join<T>((mut head, tail): (Vec<T>, Vec<T>)) -> Vec<T> {
    head.extend(tail);
    head
}

fn push<T>((mut init, last): (Vec<T>, T)) -> Vec<T> {
    init.push(last);
    init
}

fn cons<T>((first, rest): (T, Vec<T>)) -> Vec<T> {
    let mut all = Vec::with_capacity(rest.len() + 1);
    all.push(first);
    all.extend(rest);
    all
}
