use payloads::ClientError;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Superseded by a newer fetch or the owner went away. Never shown.
    #[error("Request was cancelled")]
    Cancelled,
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Every fallback attempt failed; `last` is the final attempt's error.
    #[error("{last} (gave up after {attempts} attempts)")]
    Exhausted {
        attempts: u32,
        last: Box<FetchError>,
    },
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        match self {
            FetchError::Cancelled => true,
            FetchError::Exhausted { last, .. } => last.is_cancelled(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_message_names_last_failure() {
        let error = FetchError::Exhausted {
            attempts: 2,
            last: Box::new(FetchError::Timeout(Duration::from_millis(250))),
        };
        assert_eq!(
            error.to_string(),
            "Request timed out after 250ms (gave up after 2 attempts)"
        );
        assert!(!error.is_cancelled());
        assert!(FetchError::Cancelled.is_cancelled());
    }
}
