use pcomb::prelude::*;

fn digit() -> impl Parser<str, Output = char> + Clone {
    satisfy(|c: &char| c.is_ascii_digit())
}

fn state_of<P: Parser<str>>(parser: &P, source: &str) -> Result<ParseState<P::Output>, ParseError> {
    let mut context = ();
    let mut input = Input::new(source, &mut context);
    parser.parse(&mut input, source.start())
}

#[test]
fn one_or_more_digits() {
    let number = digit().many1().map(|cs| cs.into_iter().collect::<String>());

    let state = state_of(&number, "123abc").unwrap();
    assert_eq!(state.output, "123");
    assert_eq!(state.end().index(), 3);

    let err = parse("abc", &number).unwrap_err();
    assert!(err.reason.is_no_match());
    assert_eq!(err.position.index(), 0);
}

#[test]
fn alternation_picks_second() {
    assert_eq!(parse("b", &choice([the('a'), the('b')])).unwrap(), 'b');
}

#[test]
fn bounded_repetition() {
    assert_eq!(parse("xxx", &repeat(2, 4, the('x'))).unwrap().len(), 3);

    let err = parse("xx", &repeat(3, 5, the('x'))).unwrap_err();
    assert!(err.reason.is_end_of_input());
}

#[test]
fn negative_lookahead_after_element() {
    let parser = the('a').then_ignore(not(the(',')));
    let err = parse("a,", &parser).unwrap_err();

    assert_eq!(err.position.index(), 1);
}

#[test]
fn many_never_fails() {
    let sources = ["", "abc", "123", "1a2", "\u{1F600}1"];

    for source in sources {
        let state = state_of(&digit().many(), source).unwrap();
        if state.output.is_empty() {
            assert!(state.is_zero_width());
        }
    }
}

#[test]
fn many1_agrees_with_many() {
    let sources = ["", "abc", "123", "1a2", "x9"];

    for source in sources {
        let many = parse(source, &digit().many()).unwrap();
        match parse(source, &digit().many1()) {
            Ok(outputs) => assert_eq!(outputs, many),
            Err(e) => {
                assert!(many.is_empty());
                let first = parse(source, &digit()).unwrap_err();
                assert_eq!(e.reason.to_string(), first.reason.to_string());
                assert_eq!(e.position, first.position);
            }
        }
    }
}

#[test]
fn bounded_count_correctness() {
    for k in 0..6 {
        let source = "x".repeat(k) + "y";
        for (a, b) in [(0, 0), (0, 3), (2, 4), (3, 3), (1, 10)] {
            let result = parse(source.as_str(), &repeat(a, b, the('x')));
            if k >= a {
                assert_eq!(result.unwrap().len(), k.min(b), "k={k} a={a} b={b}");
            } else {
                assert!(result.is_err(), "k={k} a={a} b={b}");
            }
        }
    }
}

#[test]
fn alternation_is_deterministic() {
    let first = the('a').to(1);
    let second = the('a').then(the('b')).to(2);

    assert_eq!(parse("ab", &choice((first.clone(), second.clone()))).unwrap(), 1);
    assert_eq!(parse("ab", &choice((second, first))).unwrap(), 2);
}

#[test]
fn lookahead_never_advances() {
    let inner = the('a').then(the('b'));

    for source in ["ab", "ax", "", "b"] {
        for state in [state_of(&peek(inner.clone()), source), state_of(&not(inner.clone()), source)]
            .into_iter()
            .flatten()
        {
            assert!(state.is_zero_width());
        }
    }

    let err = state_of(&peek(inner.clone()), "ax").unwrap_err();
    assert_eq!(err.position.index(), 1);
    let err = state_of(&not(inner), "ab").unwrap_err();
    assert_eq!(err.position.index(), 0);
}

#[test]
fn failed_attempt_leaves_no_trace() {
    let failing = the('a').then(the('a')).then(the('x'));
    let other = the('a').many();

    let source = "aab";
    assert!(state_of(&failing, source).is_err());

    let state = state_of(&other, source).unwrap();
    assert_eq!(state.output, vec!['a', 'a']);
    assert_eq!(state.end().index(), 2);

    let state = state_of(&failing.opt().then(other), source).unwrap();
    assert_eq!(state.output, (None, vec!['a', 'a']));
}
