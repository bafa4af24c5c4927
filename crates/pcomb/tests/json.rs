use pcomb::{prelude::*, BoxError};

#[derive(Debug, Clone, PartialEq)]
enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

#[derive(Debug, thiserror::Error)]
#[error("invalid code point {0:#x}")]
struct InvalidCodePoint(u32);

fn ws() -> impl Parser<str, Output = ()> + Clone + Send + Sync {
    satisfy(|c: &char| c.is_whitespace()).many().discard()
}

fn token<P>(parser: P) -> impl Parser<str, Output = P::Output> + Clone + Send + Sync
where
    P: Parser<str> + Clone + Send + Sync,
{
    parser.then_ignore(ws())
}

fn keyword(word: &str) -> Sequence<char> {
    sequence(word.chars())
}

fn escape() -> impl Parser<str, Output = char> + Clone + Send + Sync {
    let hex = satisfy(|c: &char| c.is_ascii_hexdigit()).repeat_exact(4);
    let unicode = the('u')
        .ignore_then(hex)
        .try_map(|digits| -> Result<char, BoxError> {
            let code = u32::from_str_radix(&digits.into_iter().collect::<String>(), 16)?;
            char::from_u32(code).ok_or_else(|| InvalidCodePoint(code).into())
        });

    the('\\').ignore_then(choice((
        the('"'),
        the('\\'),
        the('/'),
        the('b').to('\u{8}'),
        the('f').to('\u{c}'),
        the('n').to('\n'),
        the('r').to('\r'),
        the('t').to('\t'),
        unicode,
    )))
}

fn string() -> impl Parser<str, Output = String> + Clone + Send + Sync {
    choice((none_of(['"', '\\']), escape()))
        .many()
        .delimited_by(the('"'), the('"'))
        .map(|cs| cs.into_iter().collect::<String>())
}

fn number() -> impl Parser<str, Output = f64> + Clone + Send + Sync {
    let digits = satisfy(|c: &char| c.is_ascii_digit()).many1();
    let sign = the('-').list().or_default();
    let fraction = prepend(the('.'), digits.clone()).or_default();
    let exponent = concat(one_of(['e', 'E']).list(), concat(one_of(['+', '-']).list().or_default(), digits.clone()))
        .or_default();

    concat(concat(sign, digits), concat(fraction, exponent))
        .try_map(|cs| cs.into_iter().collect::<String>().parse::<f64>())
}

fn value() -> Boxed<'static, str, (), Json> {
    let null = keyword("null").to(Json::Null);
    let boolean = choice((keyword("true").to(true), keyword("false").to(false))).map(Json::Bool);
    let array = deferred(value)
        .separated_by(token(the(',')))
        .delimited_by(token(the('[')), the(']'))
        .map(Json::Array);
    let member = token(string()).then_ignore(token(the(':'))).then(deferred(value));
    let object = member
        .separated_by(token(the(',')))
        .delimited_by(token(the('{')), the('}'))
        .map(Json::Object);

    token(choice((
        null,
        boolean,
        number().map(Json::Number),
        string().map(Json::String),
        array,
        object,
    )))
    .boxed()
}

fn document() -> impl Parser<str, Output = Json> {
    ws().ignore_then(value()).then_ignore(end())
}

#[test]
fn scalars() {
    assert_eq!(parse("null", &document()).unwrap(), Json::Null);
    assert_eq!(parse(" true ", &document()).unwrap(), Json::Bool(true));
    assert_eq!(parse("-12.5e1", &document()).unwrap(), Json::Number(-125.0));
    assert_eq!(parse("0.25", &document()).unwrap(), Json::Number(0.25));
    assert_eq!(
        parse(r#""a\"b\\c\u0041\n""#, &document()).unwrap(),
        Json::String("a\"b\\cA\n".into())
    );
}

#[test]
fn nested_document() {
    let source = r#"
        {
            "name": "pcomb",
            "tags": ["parser", "combinator"],
            "nested": { "depth": [[1], [2, [3]]], "empty": {} },
            "ok": false
        }
    "#;

    let expected = Json::Object(vec![
        ("name".into(), Json::String("pcomb".into())),
        (
            "tags".into(),
            Json::Array(vec![Json::String("parser".into()), Json::String("combinator".into())]),
        ),
        (
            "nested".into(),
            Json::Object(vec![
                (
                    "depth".into(),
                    Json::Array(vec![
                        Json::Array(vec![Json::Number(1.0)]),
                        Json::Array(vec![Json::Number(2.0), Json::Array(vec![Json::Number(3.0)])]),
                    ]),
                ),
                ("empty".into(), Json::Object(vec![])),
            ]),
        ),
        ("ok".into(), Json::Bool(false)),
    ]);

    assert_eq!(parse(source, &document()).unwrap(), expected);
}

#[test]
fn only_last_alternative_error_survives() {
    // the array alternative fails at the end, but objects are tried last
    let source = "[1, 2";
    let err = parse(source, &document()).unwrap_err();

    assert!(err.reason.is_no_match());
    assert_eq!(err.describe(source), "unexpected '[' at offset 0");
}

#[test]
fn unterminated_string_is_end_of_input() {
    let source = "\"abc";
    let err = parse(source, &string()).unwrap_err();

    assert!(err.reason.is_end_of_input());
    assert_eq!(err.describe(source), "unexpected end of input at offset 4");
}

#[test]
fn trailing_garbage_is_reported() {
    let source = "[1] x";
    let err = parse(source, &document()).unwrap_err();

    assert!(err.reason.is_no_match());
    assert_eq!(err.describe(source), "unexpected 'x' at offset 4");
    assert_eq!(err.snippet(source, 3), "x");
}

#[test]
fn invalid_code_point_is_wrapped() {
    let source = r"\ud800";
    let err = parse(source, &escape()).unwrap_err();

    let cause = err.reason.downcast_ref::<InvalidCodePoint>().unwrap();
    assert_eq!(cause.0, 0xd800);
    assert_eq!(err.offset(source), 1);
    assert_eq!(err.describe(source), "invalid code point 0xd800 at offset 1");
}

#[test]
fn grammar_is_shareable_across_threads() {
    let grammar = document();
    let grammar = &grammar;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|n| scope.spawn(move || parse(format!("[{n}, {{\"n\": {n}}}]").as_str(), grammar)))
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let json = handle.join().unwrap().unwrap();
            let n = n as f64;
            assert_eq!(
                json,
                Json::Array(vec![
                    Json::Number(n),
                    Json::Object(vec![("n".into(), Json::Number(n))])
                ])
            );
        }
    });
}
