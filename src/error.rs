use serde_json::Value;
use simple_error::SimpleError;
use std::fmt;

#[derive(Debug)]
/// Why a search or lookup did not produce podcasts.
pub enum Error {
    /// The request could not be completed: bad status, network failure or a non-JSON body.
    Transport(SimpleError),
    /// A result item that looks like a podcast could not be turned into one.
    Parse { message: String, item: Value },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(SimpleError::new(msg.into()))
    }

    pub fn parse(message: impl Into<String>, item: &Value) -> Self {
        Error::Parse {
            message: message.into(),
            item: item.clone(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "{}", e),
            Error::Parse { message, item } => write!(f, "{} in item {}", message, item),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            Error::Parse { .. } => None,
        }
    }
}

impl From<SimpleError> for Error {
    fn from(e: SimpleError) -> Self {
        Error::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_transport() {
        let e = Error::transport("HTTP error 503: Service Unavailable");
        assert!(e.is_transport());
        assert!(!e.is_parse());
        assert_eq!(e.to_string(), "HTTP error 503: Service Unavailable");
    }

    #[test]
    fn display_parse_names_item() {
        let item = json!({ "collectionId": 1 });
        let e = Error::parse("missing field `collectionName`", &item);
        assert!(e.is_parse());
        assert_eq!(
            e.to_string(),
            r#"missing field `collectionName` in item {"collectionId":1}"#
        );
        match e {
            Error::Parse { item: raw, .. } => assert_eq!(raw, item),
            _ => panic!("expected parse error"),
        }
    }
}
