//! Element predicates for [`satisfy`](crate::primitive::satisfy).
//!
//! A predicate is any `Fn(&T) -> bool`. The helpers here only combine
//! predicates; what counts as a digit or whitespace is up to the caller.

/// Holds for elements equal to `model`.
pub fn only<T: PartialEq + Clone>(model: T) -> impl Fn(&T) -> bool + Clone {
    move |e: &T| *e == model
}

/// Holds for elements contained in `set`.
pub fn in_set<T: PartialEq + Clone>(set: impl IntoIterator<Item = T>) -> impl Fn(&T) -> bool + Clone {
    let set: Vec<T> = set.into_iter().collect();
    move |e: &T| set.contains(e)
}

/// Holds when at least one of `predicates` holds. Empty means never.
pub fn any_of<T, P>(predicates: impl IntoIterator<Item = P>) -> impl Fn(&T) -> bool + Clone
where
    P: Fn(&T) -> bool + Clone,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |e: &T| predicates.iter().any(|p| p(e))
}

/// Holds when all of `predicates` hold. Empty means always.
pub fn all_of<T, P>(predicates: impl IntoIterator<Item = P>) -> impl Fn(&T) -> bool + Clone
where
    P: Fn(&T) -> bool + Clone,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |e: &T| predicates.iter().all(|p| p(e))
}

pub fn negate<T, P>(predicate: P) -> impl Fn(&T) -> bool + Clone
where
    P: Fn(&T) -> bool + Clone,
{
    move |e: &T| !predicate(e)
}

/// Combinators on predicates of differing types.
pub trait PredicateExt<T>: Fn(&T) -> bool + Clone {
    fn either<P>(self, other: P) -> impl Fn(&T) -> bool + Clone
    where
        P: Fn(&T) -> bool + Clone,
    {
        move |e: &T| self(e) || other(e)
    }

    fn both<P>(self, other: P) -> impl Fn(&T) -> bool + Clone
    where
        P: Fn(&T) -> bool + Clone,
    {
        move |e: &T| self(e) && other(e)
    }

    fn negated(self) -> impl Fn(&T) -> bool + Clone {
        negate(self)
    }
}

impl<T, F: Fn(&T) -> bool + Clone> PredicateExt<T> for F {}
