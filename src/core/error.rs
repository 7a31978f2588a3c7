use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    MissingKey,
    TypeMismatch,
    Malformed,
    Unmatched,
    InvalidFormat,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingKey => "missing key",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::Malformed => "malformed value",
            ErrorKind::Unmatched => "unmatched raw value",
            ErrorKind::InvalidFormat => "invalid format",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    key: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            key: None,
            source: None,
        }
    }

    pub fn missing(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingKey).with_key(key)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {key})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use std::error::Error as _;

    #[test]
    fn display_includes_message_and_key() {
        let err = Error::new(ErrorKind::TypeMismatch)
            .with_message("expected string")
            .with_key("user.name");
        assert_eq!(
            err.to_string(),
            "type mismatch: expected string (key: user.name)"
        );
    }

    #[test]
    fn missing_sets_kind_and_key() {
        let err = Error::missing("id");
        assert_eq!(err.kind(), ErrorKind::MissingKey);
        assert_eq!(err.key(), Some("id"));
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "missing key (key: id)");
    }

    #[test]
    fn source_is_chained() {
        let parse_err = url::Url::parse("").unwrap_err();
        let err = Error::new(ErrorKind::Malformed).with_source(parse_err);
        assert!(err.source().is_some());
    }
}
