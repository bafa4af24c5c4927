pub mod combinator;
pub mod predicate;
pub mod primitive;

mod extension;
mod run;

pub use combinator::*;
pub use extension::ParserExtension;
pub use primitive::*;
pub use run::Run;

use std::marker::PhantomData;

/// Ties a combinator to the source and context types it parses, so extension
/// methods can be chained before either is known.
pub(crate) type Marker<S, X> = PhantomData<fn(&S, &mut X)>;

/// Derives `Clone` for a combinator without requiring `S: Clone` or `X: Clone`.
macro_rules! clone_impl {
    ($name:ident < $($p:ident),* > { $($field:ident),* }) => {
        impl<S: ?Sized, X, $($p: Clone),*> Clone for $name<S, X, $($p),*> {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)*
                    marker: std::marker::PhantomData,
                }
            }
        }
    };
}

pub(crate) use clone_impl;
