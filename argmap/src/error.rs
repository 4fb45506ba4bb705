/// A value that a type parser could not convert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("cannot convert {value:?} to {target}")]
    NotConvertible { target: &'static str, value: String },

    #[error("a {target} value is required but none was supplied")]
    MissingValue { target: &'static str },
}

impl FormatError {
    pub(crate) fn not_convertible(target: &'static str, value: &str) -> Self {
        FormatError::NotConvertible {
            target,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("option '{key}': {source}")]
    Convert {
        key: String,
        #[source]
        source: FormatError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
