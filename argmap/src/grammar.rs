//! Lexical constants of the option grammar.
//!
//! ```text
//! argument        := prefixed-option | bare-token
//! prefixed-option := prefix key [ value-clause ]
//! prefix          := "--" | "-" | "/"
//! value-clause    := "=" value | ":" value | "+" | "-"
//! ```

/// Recognized prefixes, longest first so `--opt` never reads as `-` + `-opt`.
pub const PREFIXES: [&str; 3] = ["--", "-", "/"];

/// Separator for `key=value`.
pub const EQUALS: char = '=';

/// Separator for `key:value`.
pub const COLON: char = ':';

/// Characters that split a key from its value. Only the first one counts.
pub const VALUE_SEPARATORS: [char; 2] = [EQUALS, COLON];

/// Trailing character turning a bare key into an enabled flag.
pub const ENABLE_SUFFIX: char = '+';

/// Trailing character turning a bare key into a disabled flag.
pub const DISABLE_SUFFIX: char = '-';

/// Text stored for a key ending in [`ENABLE_SUFFIX`].
pub const TRUE_TEXT: &str = "True";

/// Text stored for a key ending in [`DISABLE_SUFFIX`].
pub const FALSE_TEXT: &str = "False";

/// Delimiter stripped from both ends of a quoted value.
pub const QUOTE: char = '"';

/// Bare token after which nothing is treated as an option.
pub const TERMINATOR: &str = "--";

/// How a key was separated from what followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    None,
    Plus,
    Minus,
    Equals,
    Colon,
}

impl Separator {
    pub fn from_char(c: char) -> Option<Separator> {
        match c {
            ENABLE_SUFFIX => Some(Separator::Plus),
            DISABLE_SUFFIX => Some(Separator::Minus),
            EQUALS => Some(Separator::Equals),
            COLON => Some(Separator::Colon),
            _ => None,
        }
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Separator::None => None,
            Separator::Plus => Some(ENABLE_SUFFIX),
            Separator::Minus => Some(DISABLE_SUFFIX),
            Separator::Equals => Some(EQUALS),
            Separator::Colon => Some(COLON),
        }
    }

    /// True for `=` and `:`, which carry an explicit value.
    pub fn is_value_separator(self) -> bool {
        matches!(self, Separator::Equals | Separator::Colon)
    }

    /// True for the `+`/`-` boolean suffixes.
    pub fn is_boolean_suffix(self) -> bool {
        matches!(self, Separator::Plus | Separator::Minus)
    }
}

/// The longest recognized prefix at the start of `token`, if any.
pub fn match_prefix(token: &str) -> Option<&'static str> {
    PREFIXES.iter().copied().find(|p| token.starts_with(p))
}
