use pcomb_core::{done, fail, Input, Parser, ParserResult, Position, Reason, Source};

/// Matches `elements` in order, consuming all of them or nothing.
pub fn sequence<T>(elements: impl IntoIterator<Item = T>) -> Sequence<T> {
    Sequence {
        elements: elements.into_iter().collect(),
    }
}

#[derive(Debug, Clone)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<S, X, T> Parser<S, X> for Sequence<T>
where
    S: ?Sized + Source<Element = T>,
    T: PartialEq,
{
    type Output = Vec<T>;

    fn parse(&self, input: &mut Input<'_, S, X>, at: Position) -> ParserResult<S, X, Self> {
        let source = input.source();
        let mut matched = Vec::with_capacity(self.elements.len());
        let mut rest = at;

        for expected in &self.elements {
            match source.element_at(rest) {
                Some((e, next)) if e == *expected => {
                    matched.push(e);
                    rest = next;
                }
                Some(_) => return fail(Reason::NoMatch, rest),
                None => return fail(Reason::EndOfInput, rest),
            }
        }

        done(matched, at..rest)
    }
}

#[cfg(test)]
mod test {
    use super::sequence;
    use crate::Run;

    #[test]
    fn matches_whole_run() {
        let parser = sequence("null".chars());

        assert_eq!(parser.run("null,").unwrap(), vec!['n', 'u', 'l', 'l']);
    }

    #[test]
    fn reports_first_mismatching_element() {
        let parser = sequence("null".chars());

        let err = parser.run("nul!").unwrap_err();
        assert!(err.reason.is_no_match());
        assert_eq!(err.position.index(), 3);

        let err = parser.run("nu").unwrap_err();
        assert!(err.reason.is_end_of_input());
        assert_eq!(err.position.index(), 2);
    }

    #[test]
    fn works_over_bytes() {
        let parser = sequence(*b"GET");

        assert_eq!(parser.run(b"GET /".as_slice()).unwrap(), b"GET".to_vec());
    }
}
