//! Error types for the currency service.

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Acronym value not valid: {0}")]
    InvalidAcronym(String),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Reference price cannot be negative")]
    NegativePrice,

    #[error("Arithmetic overflow while converting")]
    ArithmeticOverflow,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Cache store failures. Never fatal for a conversion.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// Quote provider failures.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The provider answered with a non-200 status.
    #[error("Quote provider answered with status {status}")]
    InvalidResponse { status: u16 },

    #[error("Quote provider unreachable: {0}")]
    Transport(String),

    #[error("Malformed quote payload: {0}")]
    Malformed(String),

    #[error("No bid for {0} in quote payload")]
    MissingBid(String),
}

/// CRUD operation that failed at the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyOperation {
    Create,
    Update,
    Delete,
}

impl CurrencyOperation {
    pub fn message(&self) -> &'static str {
        match self {
            CurrencyOperation::Create => "Error to create currency",
            CurrencyOperation::Update => "Error to update currency",
            CurrencyOperation::Delete => "Error to delete currency",
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Acronym value not valid")]
    InvalidAcronym(String),

    /// The external quote provider rejected the pair.
    #[error("Invalid values for the api")]
    ApiInvalidResponse,

    #[error("{}", .0.message())]
    CurrencyService(CurrencyOperation),

    /// Detail is logged, never sent to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidAcronym(raw) => AppError::InvalidAcronym(raw),
            DomainError::ArithmeticOverflow => AppError::Internal(err.to_string()),
            e => AppError::BadRequest(e.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::Transaction(e) => AppError::Internal(e),
            RepoError::Conflict(e) => AppError::BadRequest(e),
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::InvalidResponse { .. } => AppError::ApiInvalidResponse,
            e => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_acronym_maps_to_dedicated_error() {
        let err: AppError = DomainError::InvalidAcronym("TEST-ACRONYNM".into()).into();
        assert!(matches!(err, AppError::InvalidAcronym(_)));
        assert_eq!(err.to_string(), "Acronym value not valid");
    }

    #[test]
    fn test_non_200_quote_maps_to_api_invalid_response() {
        let err: AppError = QuoteError::InvalidResponse { status: 400 }.into();
        assert!(matches!(err, AppError::ApiInvalidResponse));
        assert_eq!(err.to_string(), "Invalid values for the api");
    }

    #[test]
    fn test_malformed_quote_is_internal() {
        let err: AppError = QuoteError::MissingBid("USDBRL".into()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_currency_service_messages() {
        assert_eq!(
            AppError::CurrencyService(CurrencyOperation::Delete).to_string(),
            "Error to delete currency"
        );
    }
}
