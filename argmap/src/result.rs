//! Engine output: options in first-occurrence order plus additional arguments.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, FormatError, Result};
use crate::grammar::{EQUALS, QUOTE};
use crate::parsers::{OptionValue, ValueParser};

/// One key and its (possibly absent) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    key: String,
    value: Option<String>,
}

impl ParsedOption {
    pub fn new(key: &str, value: Option<&str>) -> Self {
        ParsedOption {
            key: key.to_string(),
            value: value.map(str::to_string),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Render an argument that parses back to this key and value.
    ///
    /// Always uses the `--` prefix so keys starting with `-` or `/` survive,
    /// and re-quotes values that are themselves wrapped in quotes.
    pub fn to_token(&self) -> String {
        let mut token = format!("--{}", self.key);
        if let Some(value) = &self.value {
            token.push(EQUALS);
            let wrapped = value.len() >= 2 && value.starts_with(QUOTE) && value.ends_with(QUOTE);
            if wrapped {
                token.push(QUOTE);
                token.push_str(value);
                token.push(QUOTE);
            } else {
                token.push_str(value);
            }
        }
        token
    }
}

/// Output of one engine run.
///
/// Options keep the order in which each key first appeared; a repeated key
/// overwrites the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    options: Vec<ParsedOption>,
    index: HashMap<String, usize>,
    additional: Vec<String>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Returns the replaced option, if any.
    pub(crate) fn insert(&mut self, key: &str, value: Option<&str>) -> Option<ParsedOption> {
        let option = ParsedOption::new(key, value);
        match self.index.get(key) {
            Some(&idx) => Some(std::mem::replace(&mut self.options[idx], option)),
            None => {
                self.index.insert(key.to_string(), self.options.len());
                self.options.push(option);
                None
            }
        }
    }

    pub(crate) fn push_additional(&mut self, arg: &str) {
        self.additional.push(arg.to_string());
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when neither options nor additional arguments were found.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.additional.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn option(&self, key: &str) -> Option<&ParsedOption> {
        self.index.get(key).map(|&idx| &self.options[idx])
    }

    /// Raw value lookup: `None` if the key never appeared,
    /// `Some(None)` if it appeared without a value.
    pub fn value(&self, key: &str) -> Option<Option<&str>> {
        self.option(key).map(ParsedOption::value)
    }

    pub fn options(&self) -> impl Iterator<Item = &ParsedOption> {
        self.options.iter()
    }

    pub fn additional(&self) -> &[String] {
        &self.additional
    }

    pub fn into_parts(self) -> (Vec<ParsedOption>, Vec<String>) {
        (self.options, self.additional)
    }

    /// Convert the value of `key` with the default parser for `T`.
    ///
    /// `Ok(None)` when the key is not present.
    pub fn get<T: OptionValue>(&self, key: &str) -> Result<Option<T>> {
        self.get_with(key, &T::parser())
    }

    /// Convert the value of `key` with an explicit parser.
    ///
    /// A value rejected by `can_parse` is an error even if `parse` would
    /// have accepted it.
    pub fn get_with<T, P: ValueParser<T>>(&self, key: &str, parser: &P) -> Result<Option<T>> {
        let Some(option) = self.option(key) else {
            return Ok(None);
        };
        let value = option.value();
        let convert_error = |source| Error::Convert {
            key: key.to_string(),
            source,
        };

        if !parser.can_parse(value) {
            debug!(key, ?value, "value rejected by parser");
            let source = match parser.parse(value) {
                Err(e) => e,
                Ok(_) => rejected::<T>(value),
            };
            return Err(convert_error(source));
        }
        parser.parse(value).map(Some).map_err(convert_error)
    }
}

fn rejected<T>(value: Option<&str>) -> FormatError {
    let target = std::any::type_name::<T>();
    match value {
        Some(text) => FormatError::NotConvertible {
            target,
            value: text.to_string(),
        },
        None => FormatError::MissingValue { target },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts only digits in `can_parse`, but `parse` never fails.
    struct LenientParser;

    impl ValueParser<u32> for LenientParser {
        fn can_parse(&self, value: Option<&str>) -> bool {
            value.is_some_and(|v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()))
        }

        fn parse(&self, value: Option<&str>) -> std::result::Result<u32, FormatError> {
            Ok(value.and_then(|v| v.parse().ok()).unwrap_or(0))
        }
    }

    fn sample() -> ParseResult {
        let mut r = ParseResult::new();
        r.insert("flag", None);
        r.insert("name", Some("value"));
        r.insert("empty", Some(""));
        r.push_additional("file.txt");
        r
    }

    // -- mapping --

    #[test]
    fn keeps_first_occurrence_order() {
        let mut r = ParseResult::new();
        r.insert("b", Some("1"));
        r.insert("a", Some("2"));
        r.insert("b", Some("3"));
        let keys: Vec<&str> = r.options().map(ParsedOption::key).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(r.value("b"), Some(Some("3")));
    }

    #[test]
    fn insert_returns_replaced_option() {
        let mut r = ParseResult::new();
        assert_eq!(r.insert("k", Some("old")), None);
        let replaced = r.insert("k", None).unwrap();
        assert_eq!(replaced.value(), Some("old"));
        assert_eq!(r.value("k"), Some(None));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut r = ParseResult::new();
        r.insert("Opt", Some("1"));
        r.insert("opt", Some("2"));
        assert_eq!(r.len(), 2);
        assert_eq!(r.value("Opt"), Some(Some("1")));
    }

    #[test]
    fn absent_key_vs_absent_value() {
        let r = sample();
        assert_eq!(r.value("missing"), None);
        assert_eq!(r.value("flag"), Some(None));
        assert_eq!(r.value("empty"), Some(Some("")));
        assert!(!r.option("flag").unwrap().has_value());
        assert!(r.option("empty").unwrap().has_value());
    }

    #[test]
    fn empty_result() {
        let r = ParseResult::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(r.additional().is_empty());
    }

    #[test]
    fn additional_only_is_not_empty() {
        let mut r = ParseResult::new();
        r.push_additional("x");
        assert!(!r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn into_parts_preserves_order() {
        let (options, additional) = sample().into_parts();
        assert_eq!(options.len(), 3);
        assert_eq!(options[1], ParsedOption::new("name", Some("value")));
        assert_eq!(additional, vec!["file.txt".to_string()]);
    }

    // -- to_token --

    #[test]
    fn token_without_value() {
        assert_eq!(ParsedOption::new("flag", None).to_token(), "--flag");
    }

    #[test]
    fn token_with_value() {
        assert_eq!(ParsedOption::new("k", Some("a=b")).to_token(), "--k=a=b");
        assert_eq!(ParsedOption::new("k", Some("")).to_token(), "--k=");
    }

    #[test]
    fn token_requotes_wrapped_value() {
        assert_eq!(
            ParsedOption::new("k", Some("\"x\"")).to_token(),
            "--k=\"\"x\"\""
        );
    }

    // -- typed lookup --

    #[test]
    fn get_missing_key_is_none() {
        assert_eq!(sample().get::<bool>("missing"), Ok(None));
    }

    #[test]
    fn get_flag_without_value_is_true() {
        assert_eq!(sample().get::<bool>("flag"), Ok(Some(true)));
    }

    #[test]
    fn get_string() {
        assert_eq!(
            sample().get::<String>("name"),
            Ok(Some("value".to_string()))
        );
    }

    #[test]
    fn get_reports_key_on_failure() {
        let err = sample().get::<bool>("name").unwrap_err();
        assert_eq!(
            err,
            Error::Convert {
                key: "name".to_string(),
                source: FormatError::NotConvertible {
                    target: "bool",
                    value: "value".to_string(),
                },
            }
        );
        assert_eq!(
            err.to_string(),
            "option 'name': cannot convert \"value\" to bool"
        );
    }

    #[test]
    fn get_with_honours_can_parse() {
        let mut r = ParseResult::new();
        r.insert("n", Some("abc"));
        r.insert("m", Some("12"));
        r.insert("flag", None);

        assert_eq!(r.get_with("m", &LenientParser), Ok(Some(12)));
        assert_eq!(
            r.get_with("n", &LenientParser),
            Err(Error::Convert {
                key: "n".to_string(),
                source: FormatError::NotConvertible {
                    target: "u32",
                    value: "abc".to_string(),
                },
            })
        );
        assert_eq!(
            r.get_with("flag", &LenientParser),
            Err(Error::Convert {
                key: "flag".to_string(),
                source: FormatError::MissingValue { target: "u32" },
            })
        );
        assert_eq!(r.get_with("missing", &LenientParser), Ok(None));
    }

    #[test]
    fn failure_leaves_other_keys_usable() {
        let r = sample();
        assert!(r.get::<i32>("name").is_err());
        assert_eq!(r.get::<bool>("flag"), Ok(Some(true)));
    }
}
