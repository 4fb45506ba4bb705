//! Command-line argument engine.
//!
//! Turns a raw argument list into an ordered key/value mapping plus a list of
//! additional (unnamed) arguments:
//! - Prefixes `--`, `-` and `/` are equivalent
//! - `key=value` and `key:value` carry a value; only the first separator splits
//! - `key+` / `key-` store `"True"` / `"False"`
//! - `"quoted"` values lose their enclosing quotes
//! - Everything after a bare `--` is passed through untouched
//!
//! Values stay text until converted with a [`ValueParser`], usually through
//! [`ParseResult::get`].
//!
//! ```
//! let result = argmap::parse(["-verbose", "/level:3", "--color-", "input.txt"]);
//! assert_eq!(result.get::<bool>("verbose"), Ok(Some(true)));
//! assert_eq!(result.get::<i32>("level"), Ok(Some(3)));
//! assert_eq!(result.value("color"), Some(Some("False")));
//! assert_eq!(result.additional(), ["input.txt"]);
//! ```

pub mod engine;
pub mod error;
pub mod grammar;
pub mod parsers;
pub mod result;
pub mod splitter;

pub use engine::{parse, parse_env, parse_optional};
pub use error::{Error, FormatError, Result};
pub use grammar::Separator;
pub use parsers::{
    parser_for, BoolParser, DoubleParser, Int32Parser, Int64Parser, OptionValue, StringParser,
    ValueParser,
};
pub use result::{ParseResult, ParsedOption};
pub use splitter::{split, Split, Token};
