//! Redirect code generation.

use rand::{distr::Alphanumeric, Rng};

/// Length of generated redirect codes.
pub const CODE_LENGTH: usize = 6;

/// Generates a random redirect code.
///
/// Codes are 6 characters drawn uniformly from the 62-symbol alphanumeric
/// alphabet (`a-z`, `A-Z`, `0-9`). Generation is not collision-free; the
/// store's uniqueness constraint rejects duplicates.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
