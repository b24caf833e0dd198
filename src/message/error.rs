//! Error types for payload validation.

use thiserror::Error;

/// Error type for local payload validation.
///
/// Raised the instant a caller supplies an oversized string or exceeds a
/// count limit. These errors never reach the network: the offending mutation
/// is rejected and the prior state is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A string exceeds its documented length limit.
    #[error("{field} is too long: {actual} > {limit}")]
    TooLong {
        /// Which limit was violated (e.g. `"content"`, `"embed.title"`).
        field: &'static str,
        /// The documented upper bound, in UTF-16 code units.
        limit: usize,
        /// The rejected length.
        actual: usize,
    },

    /// An embed already holds the maximum number of fields.
    #[error("too many fields (max {limit})")]
    TooManyFields {
        /// Maximum field count per embed.
        limit: usize,
    },

    /// The payload already holds the maximum number of embeds.
    #[error("too many embeds (max {limit})")]
    TooManyEmbeds {
        /// Maximum embed count per payload.
        limit: usize,
    },

    /// The embeds would exceed the aggregate character budget.
    #[error("embed text exceeds the total budget: {actual} > {limit}")]
    TotalTooLarge {
        /// Aggregate budget across all embed text.
        limit: usize,
        /// The combined length that was rejected.
        actual: usize,
    },
}

impl ValidationError {
    /// Checks a string against a length limit.
    ///
    /// Length is measured in UTF-16 code units, matching how the platform
    /// counts.
    pub(crate) fn check_len(
        field: &'static str,
        value: &str,
        limit: usize,
    ) -> Result<(), Self> {
        let actual = crate::limits::utf16_len(value);
        if actual > limit {
            return Err(Self::TooLong {
                field,
                limit,
                actual,
            });
        }
        Ok(())
    }
}
