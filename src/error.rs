/// Failures surfaced by the fetch layer. `Display` is the bare message so
/// the error banner can render it directly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed, or completed with an unusable body.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx status with a server-supplied error message.
    #[error("{0}")]
    Server(String),
    /// 2xx response whose payload encodes a logical error.
    #[error("{0}")]
    Application(String),
}
