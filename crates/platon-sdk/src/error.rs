//! SDK error taxonomy

use thiserror::Error;

/// Error type for every fallible SDK operation.
///
/// Per-call failures (`Request`, `Connection`, `Decoding`, `Server`) come
/// back through the method's `Result` and leave the client usable.
/// `Encoding` is raised only while deriving system-contract addresses during
/// construction and aborts building the client: a codec that cannot encode a
/// compile-time constant address is misconfigured, not transient.
#[derive(Debug, Error)]
pub enum Web3Error {
    /// A typed argument failed a local precondition; nothing was sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The transport could not complete the exchange.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The wire response did not match the expected result type.
    #[error("response decoding failed: {0}")]
    Decoding(String),

    /// The node answered with a JSON-RPC error member.
    #[error("node returned error {code}: {message}")]
    Server {
        /// JSON-RPC error code
        code: i64,
        /// JSON-RPC error message
        message: String,
    },

    /// Display-address encoding failed (construction-time only).
    #[error("address encoding failed: {0}")]
    Encoding(String),
}
