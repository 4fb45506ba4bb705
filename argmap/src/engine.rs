//! Parsing engine: runs the tokenizer over a whole argument list.

use tracing::{debug, trace};

use crate::result::ParseResult;
use crate::splitter::{split, Token};

/// Parse `args` into options and additional arguments.
///
/// Never fails. Tokens that do not match the option grammar, and every token
/// after a bare `--`, are kept in order as additional arguments. A repeated
/// key keeps its first position but takes the last value.
pub fn parse<I>(args: I) -> ParseResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut result = ParseResult::new();
    let mut args = args.into_iter();

    for arg in args.by_ref() {
        let arg = arg.as_ref();
        match split(arg) {
            Token::Option(s) => {
                trace!(arg, key = s.key, separator = ?s.separator, "option");
                if let Some(previous) = result.insert(s.key, s.value) {
                    debug!(
                        key = s.key,
                        previous = ?previous.value(),
                        value = ?s.value,
                        "repeated option, last value wins"
                    );
                }
            }
            Token::Argument(text) => {
                trace!(arg, "additional argument");
                result.push_additional(text);
            }
            Token::Terminator => {
                trace!("terminator, remaining arguments passed through");
                break;
            }
        }
    }

    for arg in args {
        result.push_additional(arg.as_ref());
    }

    result
}

/// Like [`parse`], treating a missing list as an empty one.
pub fn parse_optional<I>(args: Option<I>) -> ParseResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    parse(args.into_iter().flatten())
}

/// Parse the current process's arguments, without the program name.
///
/// Arguments that are not valid UTF-8 are converted lossily.
pub fn parse_env() -> ParseResult {
    parse(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    )
}
