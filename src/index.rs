//! The inverted index: term to posting list mapping and boolean evaluation.

pub mod inverted;
pub mod posting;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Boolean operator for multi-term queries.
///
/// Only [`Operator::And`] is evaluated; a query naming any other operator
/// fails with an unsupported-operator error before its terms are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Conjunction: a document matches if it contains every term.
    And,
    /// Disjunction. Not evaluated.
    Or,
    /// Negation. Not evaluated.
    Not,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => write!(f, "AND"),
            Operator::Or => write!(f, "OR"),
            Operator::Not => write!(f, "NOT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::And.to_string(), "AND");
        assert_eq!(Operator::Or.to_string(), "OR");
        assert_eq!(Operator::Not.to_string(), "NOT");
    }
}
