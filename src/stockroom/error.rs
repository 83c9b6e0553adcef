use thiserror::Error;

pub type Result<T> = std::result::Result<T, StockroomError>;

/// All the ways a catalog operation can fail.
///
/// Every variant is a recoverable signal for the caller to branch on; the
/// store itself never panics or aborts. Validation and not-found conditions
/// leave the catalog and its backing store untouched.
#[derive(Debug, Error)]
pub enum StockroomError {
    /// Required fields were absent or blank on `add`.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Price was negative or not a finite number.
    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    /// Another product already carries this code.
    #[error("duplicate product code: {0}")]
    DuplicateCode(String),

    /// No product with the given id exists in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(u64),

    /// The backing store could not be read or written.
    #[error("IO error: {0}")]
    Io(std::io::Error),

    /// The backing store's content could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
}
