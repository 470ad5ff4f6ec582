//! Error types for dice expressions.

/// Errors that can occur when parsing a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The input is not valid dice notation.
    #[error("malformed dice expression: \"{0}\"")]
    Malformed(String),

    /// The number of dice is zero or above the supported maximum.
    #[error("dice count must be between 1 and {max}, got {count}")]
    InvalidCount {
        /// The requested number of dice.
        count: u32,
        /// The largest supported number of dice.
        max: u32,
    },

    /// The flat modifier is larger in magnitude than supported.
    #[error("dice modifier must be within ±{max}, got {modifier}")]
    InvalidModifier {
        /// The requested modifier.
        modifier: i64,
        /// The largest supported magnitude.
        max: i64,
    },

    /// A die was declared with zero sides.
    #[error("a die needs at least one side")]
    InvalidSides,
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
