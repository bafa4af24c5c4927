pub mod chain;
pub mod choice;
pub mod concat;
pub mod deferred;
pub mod delimited;
pub mod flat_map;
pub mod lookahead;
pub mod map;
pub mod optional;
pub mod or;
pub mod reference;
pub mod repeat;
pub mod separated;
pub mod then;
#[cfg(feature = "tracing")]
pub mod traced;

pub use chain::{chain, Chain};
pub use choice::{choice, Alternatives, Choice};
pub use concat::{append, concat, prepend, Append, Concat, Prepend};
pub use deferred::{deferred, Deferred};
pub use delimited::{delimited_by, surrounded_by, Delimited};
pub use flat_map::{flatten, FlatMap, Flatten};
pub use lookahead::{not, not_any, peek, Not, Peek};
pub use map::{Discard, List, Map, MapWithContext, To, TryMap, WithRange};
pub use optional::{optional, or_default, Opt};
pub use or::Or;
pub use reference::Ref;
pub use repeat::{many, many1, repeat, Repeat};
pub use separated::{separated_by, separated_by1, SeparatedBy, SeparatedBy1};
pub use then::{pair, triple, IgnoreThen, Then, ThenIgnore, Triple};
#[cfg(feature = "tracing")]
pub use traced::{traced, Traced};
