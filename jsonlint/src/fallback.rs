//! A second, independent JSON grammar written with parser combinators. It only runs over
//! documents the hand-written validator accepted, as a backstop: if it still finds a problem,
//! that problem is reported as an error.

use chumsky::prelude::*;

pub type FallbackError<'a> = Rich<'a, char>;

/// Adapted from: <https://github.com/zesterer/chumsky/blob/main/examples/json.rs>, with the
/// value construction stripped out since we only care whether the document parses.
pub fn parser<'a>() -> impl Parser<'a, &'a str, (), extra::Err<FallbackError<'a>>> {
    recursive(|value| {
        let digits = text::digits(10).to_slice();

        let frac = just('.').then(digits);

        let exp = just('e')
            .or(just('E'))
            .then(one_of("+-").or_not())
            .then(digits)
            .labelled("exponent");

        let number = just('-')
            .or_not()
            .then(text::int(10))
            .then(frac.or_not())
            .then(exp.or_not())
            .ignored()
            .boxed()
            .labelled("number");

        let escape = just('\\')
            .then(
                one_of("\\/\"bfnrt")
                    .ignored()
                    .or(just('u').then(text::digits(16).exactly(4)).ignored()),
            )
            .ignored()
            .boxed()
            .labelled("escape character");

        let string = any()
            .filter(|c: &char| *c >= ' ' && *c != '"' && *c != '\\')
            .ignored()
            .or(escape)
            .repeated()
            .delimited_by(just('"'), just('"'))
            .boxed()
            .labelled("string");

        let array = value
            .clone()
            .separated_by(just(',').padded())
            .collect::<Vec<()>>()
            .padded()
            .delimited_by(just('['), just(']'))
            .ignored()
            .boxed()
            .labelled("array");

        let member = string
            .clone()
            .padded()
            .then_ignore(just(':'))
            .then(value)
            .ignored()
            .labelled("object member");
        let object = member
            .separated_by(just(','))
            .collect::<Vec<()>>()
            .padded()
            .delimited_by(just('{'), just('}'))
            .ignored()
            .boxed()
            .labelled("object");

        choice((
            just("null").ignored().labelled("null"),
            just("true").ignored().labelled("true"),
            just("false").ignored().labelled("false"),
            number,
            string,
            array,
            object,
        ))
        .padded()
    })
    .labelled("JSON document")
}

/// Run the fallback grammar over `src`, returning every error it reports.
pub fn check(src: &str) -> Vec<FallbackError<'_>> {
    parser().parse(src).into_errors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strict_json() {
        assert!(check(r#"{"a": [1, -2.5e3, "xé"], "b": {"c": null}}"#).is_empty());
        assert!(check(" true ").is_empty());
    }

    #[test]
    fn rejects_what_the_grammar_forbids() {
        assert!(!check("[1,]").is_empty());
        assert!(!check("{a: 1}").is_empty());
        assert!(!check("\"a\nb\"").is_empty());
        assert!(!check("").is_empty());
    }
}
