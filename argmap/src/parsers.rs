//! Type parsers: convert an option's text (or its absence) into a typed value.
//!
//! Every parser offers the same pair of operations. `parse` only promises to
//! succeed when `can_parse` returned true for the same input.

use std::str::FromStr;

use crate::error::FormatError;

pub trait ValueParser<T> {
    /// Whether `value` can be converted. `None` means no value was supplied.
    fn can_parse(&self, value: Option<&str>) -> bool;

    fn parse(&self, value: Option<&str>) -> Result<T, FormatError>;
}

/// Types with a default parser.
pub trait OptionValue: Sized {
    type Parser: ValueParser<Self> + Default;

    fn parser() -> Self::Parser {
        Self::Parser::default()
    }
}

/// The default parser for `T`.
pub fn parser_for<T: OptionValue>() -> T::Parser {
    T::parser()
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// bool
// ---------------------------------------------------------------------------

/// Parser for flags.
///
/// The value is optional: an absent or blank value means the flag was given
/// on its own and parses to `true`. Otherwise only `true`/`false` are
/// accepted, in any ASCII case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolParser;

fn bool_literal(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl ValueParser<bool> for BoolParser {
    fn can_parse(&self, value: Option<&str>) -> bool {
        is_blank(value) || value.and_then(bool_literal).is_some()
    }

    fn parse(&self, value: Option<&str>) -> Result<bool, FormatError> {
        match value {
            Some(text) if !is_blank(value) => {
                bool_literal(text).ok_or_else(|| FormatError::not_convertible("bool", text))
            }
            _ => Ok(true),
        }
    }
}

impl OptionValue for bool {
    type Parser = BoolParser;
}

// ---------------------------------------------------------------------------
// String
// ---------------------------------------------------------------------------

/// Parser for free text. A value must be present and not blank; it is
/// returned verbatim, surrounding whitespace included.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringParser;

impl ValueParser<String> for StringParser {
    fn can_parse(&self, value: Option<&str>) -> bool {
        !is_blank(value)
    }

    fn parse(&self, value: Option<&str>) -> Result<String, FormatError> {
        match value {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            Some(text) => Err(FormatError::not_convertible("string", text)),
            None => Err(FormatError::MissingValue { target: "string" }),
        }
    }
}

impl OptionValue for String {
    type Parser = StringParser;
}

// ---------------------------------------------------------------------------
// numbers
// ---------------------------------------------------------------------------

fn parse_number<T: FromStr>(target: &'static str, value: Option<&str>) -> Result<T, FormatError> {
    let text = value.ok_or(FormatError::MissingValue { target })?;
    text.trim()
        .parse()
        .map_err(|_| FormatError::not_convertible(target, text))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Int32Parser;

impl ValueParser<i32> for Int32Parser {
    fn can_parse(&self, value: Option<&str>) -> bool {
        parse_number::<i32>("i32", value).is_ok()
    }

    fn parse(&self, value: Option<&str>) -> Result<i32, FormatError> {
        parse_number("i32", value)
    }
}

impl OptionValue for i32 {
    type Parser = Int32Parser;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Int64Parser;

impl ValueParser<i64> for Int64Parser {
    fn can_parse(&self, value: Option<&str>) -> bool {
        parse_number::<i64>("i64", value).is_ok()
    }

    fn parse(&self, value: Option<&str>) -> Result<i64, FormatError> {
        parse_number("i64", value)
    }
}

impl OptionValue for i64 {
    type Parser = Int64Parser;
}

/// Parser for floating point values; `.` is the only decimal point.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleParser;

impl ValueParser<f64> for DoubleParser {
    fn can_parse(&self, value: Option<&str>) -> bool {
        parse_number::<f64>("f64", value).is_ok()
    }

    fn parse(&self, value: Option<&str>) -> Result<f64, FormatError> {
        parse_number("f64", value)
    }
}

impl OptionValue for f64 {
    type Parser = DoubleParser;
}
