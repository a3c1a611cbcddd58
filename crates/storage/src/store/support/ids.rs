#![forbid(unsafe_code)]

use ulid::Ulid;

/// Ids are minted by the store, not the caller; the request contract
/// addresses rows by bare id, so they must be globally unique.
pub(crate) fn new_id() -> String {
    Ulid::new().to_string()
}
