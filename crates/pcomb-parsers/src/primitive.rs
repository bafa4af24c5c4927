pub mod any;
pub mod end;
pub mod extract;
pub mod just;
pub mod satisfy;
pub mod sequence;
pub mod the;

pub use any::{any_element, none_of, one_of, AnyElement, NoneOf, OneOf};
pub use end::{end, End};
pub use extract::{extract, Extract};
pub use just::{default_value, fail, fail_with, just, position, CurrentPosition, DefaultValue, Fail, Just};
pub use satisfy::{satisfy, Satisfy};
pub use sequence::{sequence, Sequence};
pub use the::{the, The};
