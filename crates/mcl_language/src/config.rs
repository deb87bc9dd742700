//! Configuration for the parse and evaluate pipeline.

use mcl_foundation::IntegerType;

/// Configuration for parsing and evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Type assigned to every integer literal.
    ///
    /// Literals and intermediate results must fit this type. Evaluation
    /// itself works in `u64`, so results never exceed `u64::MAX` and never
    /// go below zero even for signed types.
    pub literal_type: IntegerType,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            literal_type: IntegerType::U64,
        }
    }
}

impl PipelineConfig {
    /// Builder method to set the literal type.
    #[must_use]
    pub fn with_literal_type(mut self, literal_type: IntegerType) -> Self {
        self.literal_type = literal_type;
        self
    }

    /// Returns the largest value a literal or result may take.
    #[must_use]
    pub fn max_value(&self) -> u64 {
        u64::try_from(self.literal_type.max_value()).unwrap_or(u64::MAX)
    }
}
