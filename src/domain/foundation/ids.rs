//! Strongly-typed identifier value objects.
//!
//! Dataset identifiers are positive integers declared by the dataset author.
//! They are keys, not offsets: gaps and arbitrary ordering are allowed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::ValidationError;

macro_rules! positive_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Creates an identifier, rejecting zero.
            pub fn new(value: u32) -> Result<Self, ValidationError> {
                NonZeroU32::new(value)
                    .map(Self)
                    .ok_or_else(|| ValidationError::out_of_range($field, 1, i64::from(u32::MAX), 0))
            }

            /// Returns the raw integer value.
            pub fn get(&self) -> u32 {
                self.0.get()
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                u32::try_from(value)
                    .ok()
                    .and_then(NonZeroU32::new)
                    .map(Self)
                    .ok_or_else(|| {
                        ValidationError::out_of_range($field, 1, i64::from(u32::MAX), value)
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::invalid_format($field, "expected an integer"))?;
                Self::try_from(value)
            }
        }
    };
}

positive_id!(
    /// Identifier of a question prompt.
    QuestionId,
    "question_id"
);

positive_id!(
    /// Identifier of a node in the decision graph.
    StepId,
    "step_id"
);

positive_id!(
    /// Identifier of a terminal match result.
    ResultId,
    "result_id"
);
