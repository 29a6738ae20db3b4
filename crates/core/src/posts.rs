//! Constants and validation functions for the posts domain.

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Default number of rows returned by the list endpoint.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum number of rows a single list request may ask for.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Default row offset for the list endpoint.
pub const DEFAULT_LIST_OFFSET: i64 = 0;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the `limit` query parameter: must not exceed [`MAX_LIST_LIMIT`].
///
/// There is no lower bound; out-of-range negative values are passed through
/// to the store and surface as a store-level failure.
pub fn validate_list_limit(limit: i64) -> Result<(), String> {
    if limit > MAX_LIST_LIMIT {
        return Err(format!(
            "limit must be less than or equal to {MAX_LIST_LIMIT}"
        ));
    }
    Ok(())
}
