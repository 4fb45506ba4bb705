//! Tokenizer: decomposes one raw argument into prefix, key, separator and value.

use crate::grammar::{
    match_prefix, Separator, DISABLE_SUFFIX, ENABLE_SUFFIX, FALSE_TEXT, QUOTE, TERMINATOR,
    TRUE_TEXT, VALUE_SEPARATORS,
};

/// The structural shape of a recognized option token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub prefix: &'static str,
    pub key: &'a str,
    pub separator: Separator,
    /// `None` when the token carried no value at all.
    pub value: Option<&'a str>,
}

/// Classification of a single raw argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Option(Split<'a>),
    /// The bare `--` token.
    Terminator,
    /// Anything that does not match the option grammar, passed through verbatim.
    Argument(&'a str),
}

/// Classify and decompose `token`.
///
/// Only the first `=` or `:` splits key from value; everything after it is
/// kept literally. A trailing `+`/`-` is a boolean suffix only when no value
/// separator occurs earlier. An empty key makes the whole token an argument.
pub fn split(token: &str) -> Token<'_> {
    if token == TERMINATOR {
        return Token::Terminator;
    }

    let Some(prefix) = match_prefix(token) else {
        return Token::Argument(token);
    };

    let (key, separator, value) = split_key_value(&token[prefix.len()..]);
    if key.is_empty() {
        return Token::Argument(token);
    }

    Token::Option(Split {
        prefix,
        key,
        separator,
        value,
    })
}

fn split_key_value(rest: &str) -> (&str, Separator, Option<&str>) {
    if let Some(idx) = rest.find(|c: char| VALUE_SEPARATORS.contains(&c)) {
        // Both value separators are ASCII, so idx + 1 is a char boundary.
        let separator = Separator::from_char(char::from(rest.as_bytes()[idx]))
            .unwrap_or(Separator::None);
        return (&rest[..idx], separator, Some(unquote(&rest[idx + 1..])));
    }

    match rest.chars().last() {
        Some(ENABLE_SUFFIX) => (&rest[..rest.len() - 1], Separator::Plus, Some(TRUE_TEXT)),
        Some(DISABLE_SUFFIX) => (&rest[..rest.len() - 1], Separator::Minus, Some(FALSE_TEXT)),
        _ => (rest, Separator::None, None),
    }
}

/// Strip one pair of enclosing quote delimiters, if present.
pub fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with(QUOTE) && value.ends_with(QUOTE) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
