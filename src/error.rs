/// Errors raised while registering a route.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("malformed pattern {pattern:?}: {reason}")]
    MalformedPattern { pattern: Box<str>, reason: Box<str> },

    #[error("invalid registration: {0}")]
    InvalidRegistration(&'static str),
}

impl RouterError {
    pub(crate) fn malformed(pattern: &str, reason: impl Into<Box<str>>) -> Self {
        Self::MalformedPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of a dispatch that did not reach a handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("no route matches the request")]
    NotFound,

    #[error("route {pattern:?} captured {captured} values for {expected} parameters")]
    BadMatch {
        pattern: Box<str>,
        expected: usize,
        captured: usize,
    },
}

impl DispatchError {
    /// The HTTP status a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadMatch { .. } => 400,
        }
    }
}

#[test]
fn error_messages() {
    let e = RouterError::malformed("/users/:/posts", "capture name can not be empty");
    assert_eq!(
        e.to_string(),
        "malformed pattern \"/users/:/posts\": capture name can not be empty"
    );

    let e = DispatchError::BadMatch {
        pattern: "/u/:id".into(),
        expected: 1,
        captured: 0,
    };
    assert_eq!(e.status_code(), 400);
    assert_eq!(
        e.to_string(),
        "route \"/u/:id\" captured 0 values for 1 parameters"
    );
    assert_eq!(DispatchError::NotFound.status_code(), 404);
}
