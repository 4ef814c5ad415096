use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign a JWT
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign {token_type} token: {source}")]
    TokenSigning {
        /// `access` or `refresh`
        token_type: &'static str,
        /// The underlying jsonwebtoken error
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// Failure to hash a password with argon2
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Failure to render a PDF document
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to render receipt PDF for ledger entry {entry_id}: {reason}")]
    PdfRender {
        /// Ledger entry the receipt was requested for
        entry_id: i32,
        /// The reason for the rendering failure
        reason: String,
    },
}
