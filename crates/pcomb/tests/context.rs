use pcomb::prelude::*;

/// Tallies kept by the grammar while it runs.
#[derive(Debug, Default)]
struct Tally {
    numbers: usize,
    attempts: Vec<&'static str>,
}

fn number() -> impl Parser<str, Tally, Output = u64> + Clone {
    satisfy(|c: &char| c.is_ascii_digit())
        .many1()
        .try_map(|cs| cs.into_iter().collect::<String>().parse::<u64>())
        .map_with_context(|n, tally: &mut Tally| {
            tally.numbers += 1;
            n
        })
}

#[test]
fn context_is_threaded_through() {
    let parser = number().separated_by(the('+')).map(|ns| ns.into_iter().sum::<u64>());
    let mut tally = Tally::default();

    assert_eq!(parse_with("1+22+333", &parser, &mut tally).unwrap(), 356);
    assert_eq!(tally.numbers, 3);
}

#[test]
fn context_is_not_rolled_back() {
    let record = |name: &'static str| {
        move |_: (), tally: &mut Tally| {
            tally.attempts.push(name);
        }
    };
    let long = the('a').then(the('b')).discard().map_with_context(record("ab"));
    let short = the('a').discard().map_with_context(record("a"));
    let parser = long.then_ignore(the('!')).or(short.then_ignore(end()));

    let mut tally = Tally::default();
    parse_with("ab", &parser, &mut tally).unwrap_err();

    // "ab" was recorded even though its branch failed afterwards
    assert_eq!(tally.attempts, ["ab", "a"]);

    let mut tally = Tally::default();
    parse_with("a", &parser, &mut tally).unwrap();
    assert_eq!(tally.attempts, ["a"]);
}

#[test]
fn each_parse_gets_its_own_context() {
    let parser = number().many1();
    let mut first = Tally::default();
    let mut second = Tally::default();

    parse_with("1", &parser, &mut first).unwrap();
    parse_with("2", &parser, &mut second).unwrap();
    parse_with("3", &parser, &mut second).unwrap();

    assert_eq!((first.numbers, second.numbers), (1, 2));
}
