use crate::node::{GenericNode, GenericNumber};
use crate::reader::ParseError;
use bytes::Bytes;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till, take_while_m_n};
use nom::character::complete::{char, multispace1, none_of, one_of};
use nom::combinator::{cut, eof, fail, map, map_opt, opt, peek, recognize, value, verify};
use nom::error::{context, VerboseError, VerboseErrorKind};
use nom::multi::{fold_many0, many0, many0_count, many1_count};
use nom::number::complete::recognize_float;
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;
use std::str::FromStr;

type Result<'a, O, E = &'a str> = IResult<&'a str, O, VerboseError<E>>;

const DELIMITERS: &str = " \t\r\n()\";";

/// How many characters of the input a [ParseError] keeps
const EXCERPT_LEN: usize = 32;

/// Parses at most one datum, with any surrounding whitespace and comments.
///
/// Produces `None` if there was only insignificant text.
pub fn parse_top_level(
    src: &str,
    max_depth: usize,
) -> IResult<&str, Option<GenericNode>, ParseError> {
    let mut main_parser = context(
        "top level",
        delimited(
            parse_insignificant,
            alt((value(None, eof), map(datum(0, max_depth), Some))),
            parse_insignificant,
        ),
    );
    main_parser(src).map_err(|e| e.map(|e| to_parse_error(src, e)))
}

/// Replaces the remaining input nom kept for every unwinding parser with its offset
fn to_parse_error(src: &str, e: VerboseError<&str>) -> ParseError {
    let offset_of = |rest: &str| src.len() - rest.len();
    let trace: Vec<(usize, String)> = e
        .errors
        .iter()
        .map(|(rest, kind)| (offset_of(*rest), describe(kind)))
        .collect();
    let rest = e.errors.first().map_or("", |(rest, _)| *rest);
    let reason = e
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(context) => Some(context.to_string()),
            _ => None,
        })
        .or_else(|| trace.first().map(|(_, what)| what.clone()))
        .unwrap_or_else(|| "invalid input".to_string());
    ParseError {
        offset: offset_of(rest),
        excerpt: rest
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(EXCERPT_LEN)
            .collect(),
        reason,
        trace,
    }
}

fn describe(kind: &VerboseErrorKind) -> String {
    match kind {
        VerboseErrorKind::Context(context) => context.to_string(),
        VerboseErrorKind::Char(c) => format!("expected {c:?}"),
        VerboseErrorKind::Nom(kind) => kind.description().to_string(),
    }
}

fn datum<'a>(depth: usize, max_depth: usize) -> impl FnMut(&'a str) -> Result<'a, GenericNode> {
    move |input| {
        context(
            "datum",
            alt((
                list(depth, max_depth),
                map(parse_string_value, |s| GenericNode::String(Bytes::from(s))),
                parse_number,
                parse_atom,
            )),
        )(input)
    }
}

fn list<'a>(depth: usize, max_depth: usize) -> impl FnMut(&'a str) -> Result<'a, GenericNode> {
    move |input| parse_list(input, depth, max_depth)
}

fn parse_list(input: &str, depth: usize, max_depth: usize) -> Result<GenericNode> {
    let (input, _) = char('(')(input)?;
    if depth >= max_depth {
        return context("list nested too deeply", cut(fail))(input);
    }
    let (input, _) = parse_insignificant(input)?;
    let (input, items) = many0(terminated(datum(depth + 1, max_depth), parse_insignificant))(input)?;
    let (input, tail) = opt(delimited(
        terminated(char('.'), peek(parse_delimiter)),
        preceded(parse_insignificant, cut(datum(depth + 1, max_depth))),
        parse_insignificant,
    ))(input)?;
    let (input, _) = context("closing paren", cut(char(')')))(input)?;
    Ok((
        input,
        GenericNode::list_with_tail(items, tail.unwrap_or_default()),
    ))
}

fn parse_delimiter(input: &str) -> Result<&str> {
    alt((recognize(one_of(DELIMITERS)), eof))(input)
}

fn parse_number(input: &str) -> Result<GenericNode> {
    let (rest, text) = terminated(recognize_float, peek(parse_delimiter))(input)?;
    let number = if text.contains(['.', 'e', 'E']) {
        f64::from_str(text).ok().map(GenericNumber::Real)
    } else {
        u64::from_str(text).ok().map(GenericNumber::Integer)
    };
    match number {
        Some(number) => Ok((rest, GenericNode::Number(number))),
        None if text.starts_with('-') => context("negative exact integer", cut(fail))(input),
        None => context("exact integer out of range", cut(fail))(input),
    }
}

fn parse_atom(input: &str) -> Result<GenericNode> {
    context(
        "atom",
        map(
            verify(recognize(many1_count(none_of(DELIMITERS))), |s: &str| {
                s != "."
            }),
            GenericNode::symbol,
        ),
    )(input)
}

enum Piece<'a> {
    Run(&'a str),
    Escaped(char),
}

/// `u{41}`, up to six hex digits naming a unicode scalar value
fn parse_code_point(input: &str) -> Result<char> {
    context(
        "unicode escape",
        preceded(
            tag("u{"),
            cut(map_opt(
                terminated(
                    take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
                    char('}'),
                ),
                |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
            )),
        ),
    )(input)
}

fn parse_escape(input: &str) -> Result<char> {
    context(
        "escape sequence",
        alt((
            parse_code_point,
            value('\n', char('n')),
            value('\r', char('r')),
            value('\t', char('t')),
            value('\\', char('\\')),
            value('"', char('"')),
        )),
    )(input)
}

fn parse_piece(input: &str) -> Result<Piece> {
    alt((
        map(is_not("\"\\"), Piece::Run),
        map(preceded(char('\\'), cut(parse_escape)), Piece::Escaped),
    ))(input)
}

fn parse_string_value(input: &str) -> Result<String> {
    let contents = fold_many0(parse_piece, String::new, |mut string, piece| {
        match piece {
            Piece::Run(run) => string.push_str(run),
            Piece::Escaped(c) => string.push(c),
        }
        string
    });
    context("string", delimited(char('"'), contents, cut(char('"'))))(input)
}

fn parse_insignificant(src: &str) -> Result<()> {
    context(
        "insignificant",
        value(
            (),
            many0_count(alt((
                context("whitespace", multispace1),
                context(
                    "line comment",
                    recognize(pair(char(';'), take_till(|c| c == '\n'))),
                ),
            ))),
        ),
    )(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::combinator::all_consuming;
    use nom::Finish;
    use test_log::test;

    fn parse(src: &str) -> GenericNode {
        let (rest, node) = all_consuming(datum(0, 64))(src)
            .finish()
            .unwrap_or_else(|e| panic!("{}", to_parse_error(src, e)));
        assert_eq!(rest, "", "should be empty but got {rest:?}");
        node
    }

    #[test]
    fn test_insignificant() {
        let src = "  ; a comment\n\t; another";
        let (rest, ()) = all_consuming(parse_insignificant)(src)
            .finish()
            .unwrap_or_else(|e| panic!("{}", to_parse_error(src, e)));
        assert_eq!(rest, "", "should be empty but got {rest:?}");
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse("42"), GenericNode::integer(42));
        assert_eq!(parse("18446744073709551615"), GenericNode::integer(u64::MAX));
        assert_eq!(parse("1.5"), GenericNode::real(1.5));
        assert_eq!(parse("-2e3"), GenericNode::real(-2000.0));
    }

    fn failure(src: &str) -> ParseError {
        match all_consuming(datum(0, 64))(src) {
            Err(nom::Err::Failure(e)) => to_parse_error(src, e),
            other => panic!("expected {src:?} to fail, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_overflow_is_failure() {
        assert_eq!(
            failure("18446744073709551616").reason,
            "exact integer out of range"
        );
    }

    #[test]
    fn test_negative_integer_is_failure() {
        let error = failure("(1 -5)");
        assert_eq!(error.reason, "negative exact integer");
        assert_eq!(error.offset, 3);
        assert_eq!(error.excerpt, "-5)");
    }

    #[test]
    fn test_bad_escapes_are_failures() {
        let error = failure(r#""a\q""#);
        assert_eq!(error.reason, "escape sequence");
        assert_eq!(error.offset, 3);
        assert_eq!(failure(r#""\u{zz}""#).reason, "unicode escape");
        assert_eq!(failure(r#""\u{d800}""#).reason, "unicode escape");
    }

    #[test]
    fn test_parse_string_escapes() {
        assert_eq!(
            parse(r#""a \"quoted\"\n\u{41}""#),
            GenericNode::string("a \"quoted\"\nA")
        );
        assert_eq!(parse(r#""""#), GenericNode::string(""));
    }

    #[test]
    fn test_parse_atoms() {
        assert_eq!(parse("..."), GenericNode::symbol("..."));
        assert_eq!(parse("1x"), GenericNode::symbol("1x"));
        assert_eq!(parse("-"), GenericNode::symbol("-"));
    }

    #[test]
    fn test_parse_lists() {
        assert_eq!(parse("()"), GenericNode::Null);
        assert_eq!(
            parse(r#"("call" "+" 1 2)"#),
            GenericNode::list([
                GenericNode::string("call"),
                GenericNode::string("+"),
                GenericNode::integer(1),
                GenericNode::integer(2),
            ])
        );
        assert_eq!(
            parse("(1 ( 2 ) ; trailing\n)"),
            GenericNode::list([
                GenericNode::integer(1),
                GenericNode::list([GenericNode::integer(2)])
            ])
        );
    }

    #[test]
    fn test_parse_dotted_pair() {
        assert_eq!(
            parse("(1 . 2)"),
            GenericNode::cons(GenericNode::integer(1), GenericNode::integer(2))
        );
    }

    #[test]
    fn test_depth_limit() {
        let nested = format!("{}{}", "(".repeat(65), ")".repeat(65));
        let result = all_consuming(datum(0, 64))(nested.as_str());
        assert!(matches!(result, Err(nom::Err::Failure(_))));
        let nested = format!("{}{}", "(".repeat(64), ")".repeat(64));
        assert!(all_consuming(datum(0, 64))(nested.as_str()).is_ok());
    }

    #[test]
    fn test_unclosed_list_is_failure() {
        let result = datum(0, 64)("(1 2");
        assert!(matches!(result, Err(nom::Err::Failure(_))));
    }
}
