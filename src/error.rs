use std::fmt;

/// Why a line of input was rejected. The machine is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The main menu got something other than buy/fill/take/remaining/exit.
    InvalidAction(String),
    /// A coffee id or fill amount was not a usable number.
    InvalidNumber(String),
    /// Input arrived after the session was already over.
    InvalidState,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidAction(token) => write!(f, "unknown action '{}'", token),
            SessionError::InvalidNumber(token) => write!(f, "invalid number '{}'", token),
            SessionError::InvalidState => f.write_str("the machine is switched off"),
        }
    }
}

impl std::error::Error for SessionError {}

pub type Result<T> = core::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_token() {
        assert_eq!(
            SessionError::InvalidAction("brew".into()).to_string(),
            "unknown action 'brew'"
        );
        assert_eq!(
            SessionError::InvalidNumber("ten".into()).to_string(),
            "invalid number 'ten'"
        );
        assert_eq!(
            SessionError::InvalidState.to_string(),
            "the machine is switched off"
        );
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SessionError::InvalidState);
        assert!(err.to_string().contains("switched off"));
    }
}
