use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Addition,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
        }
    }

    pub fn apply(&self, lhs: u32, rhs: u32) -> u32 {
        match self {
            Operation::Addition => lhs + rhs,
        }
    }
}

/// A single arithmetic problem. Fields are read-only outside this module so
/// `expected_answer` can never drift from the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[readonly::make]
pub struct MathProblem {
    pub num1: u32,
    pub num2: u32,
    pub operation: Operation,
    pub expected_answer: u32,
}

impl MathProblem {
    pub fn addition(num1: u32, num2: u32) -> Self {
        let operation = Operation::Addition;
        Self {
            num1,
            num2,
            operation,
            expected_answer: operation.apply(num1, num2),
        }
    }

    /// Identity used to keep operand pairs unique within a batch
    pub fn key(&self) -> String {
        format!("{}{}{}", self.num1, self.operation.symbol(), self.num2)
    }
}

impl Display for MathProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.num1, self.operation.symbol(), self.num2)
    }
}
