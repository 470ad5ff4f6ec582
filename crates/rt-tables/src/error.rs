//! Error types for roll tables.

use rt_dice::DiceError;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while rolling or registering tables.
///
/// A draw that matches no item is not an error; rolling returns an empty
/// string in that case.
#[derive(Debug, Error)]
pub enum TableError {
    /// A table's dice or reroll dice could not be parsed.
    #[error("table \"{table}\": {source}")]
    MalformedDiceExpression {
        /// ID of the table being rolled.
        table: String,
        /// The underlying parse failure.
        #[source]
        source: DiceError,
    },

    /// A weighted table's total weight is zero, or a uniform table is empty.
    #[error("table \"{0}\" has nothing to select from")]
    EmptySelectionSpace(String),

    /// A table with the same ID is already in the registry.
    #[error("table {0} already registered")]
    AlreadyRegistered(String),

    /// No table with the given ID is in the registry.
    #[error("table {0} is not registered")]
    NotRegistered(String),

    /// Sub-table actions nested deeper than the configured limit.
    #[error("rolling table \"{table}\" exceeded the action depth limit of {depth}")]
    RecursionLimit {
        /// ID of the table whose roll was refused.
        table: String,
        /// The configured limit.
        depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            TableError::AlreadyRegistered("loot".to_string()).to_string(),
            "table loot already registered"
        );
        assert_eq!(
            TableError::NotRegistered("loot".to_string()).to_string(),
            "table loot is not registered"
        );
        let err = TableError::MalformedDiceExpression {
            table: "loot".to_string(),
            source: DiceError::Malformed("2x6".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "table \"loot\": malformed dice expression: \"2x6\""
        );
    }
}
