pub mod contact;
pub mod payment;
pub mod response;

pub use contact::*;
pub use payment::*;
pub use response::*;

/// Trims a string field, treating whitespace-only values as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
