use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The server is gone, or the store dropped the responder unanswered.
    #[error("Dispatcher channel disconnected")]
    Disconnected,
    #[error("Action timed out waiting for a reply")]
    Timeout,
}
