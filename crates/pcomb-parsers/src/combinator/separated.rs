use super::{prepend, IgnoreThen, Or, Prepend, Repeat};
use crate::primitive::{default_value, DefaultValue};
use pcomb_core::{Parser, Source};

pub type SeparatedBy1<S, X, P, Sep, T> = Prepend<S, X, P, Repeat<S, X, IgnoreThen<S, X, Sep, P>>, T>;

pub type SeparatedBy<S, X, P, Sep, T> = Or<S, X, SeparatedBy1<S, X, P, Sep, T>, DefaultValue<Vec<T>>>;

/// One or more `parser` matches with `separator` between them.
///
/// A trailing separator is left unconsumed.
pub fn separated_by1<S, X, P, Sep>(parser: P, separator: Sep) -> SeparatedBy1<S, X, P, Sep, P::Output>
where
    S: ?Sized + Source,
    P: Parser<S, X> + Clone,
    Sep: Parser<S, X>,
{
    let rest = Repeat::new(IgnoreThen::new(separator, parser.clone()), 0, usize::MAX);
    prepend(parser, rest)
}

/// Zero or more `parser` matches with `separator` between them. Never fails.
pub fn separated_by<S, X, P, Sep>(parser: P, separator: Sep) -> SeparatedBy<S, X, P, Sep, P::Output>
where
    S: ?Sized + Source,
    P: Parser<S, X> + Clone,
    Sep: Parser<S, X>,
{
    Or::new(separated_by1(parser, separator), default_value())
}

#[cfg(test)]
mod test {
    use super::{separated_by, separated_by1};
    use crate::{
        primitive::{end, satisfy, the},
        ParserExtension, Run,
    };

    #[test]
    fn one_or_more() {
        let digit = satisfy(|c: &char| c.is_ascii_digit());
        let parser = separated_by1(digit, the(','));

        assert_eq!(parser.run("1,2,3").unwrap(), vec!['1', '2', '3']);
        assert_eq!(parser.run("1").unwrap(), vec!['1']);
        assert!(parser.run("").unwrap_err().reason.is_end_of_input());
    }

    #[test]
    fn trailing_separator_is_left_over() {
        let digit = satisfy(|c: &char| c.is_ascii_digit());
        let parser = separated_by(digit, the(',')).then_ignore(the(',')).then_ignore(end());

        assert_eq!(parser.run("1,2,").unwrap(), vec!['1', '2']);
    }

    #[test]
    fn zero_or_more() {
        let parser = separated_by(the('a'), the(';'));

        assert_eq!(parser.run("").unwrap(), Vec::<char>::new());
        assert_eq!(parser.run("a;a").unwrap(), vec!['a', 'a']);
    }
}
