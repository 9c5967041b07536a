/*!
Error handling for the stack container.

Every failed precondition is reported as a [`ContractViolation`]. The
panicking operations never return it; they hand it to
[`enforce`](crate::core::contract::enforce), which stops the program. The
`try_*` operations return it unchanged so callers can inspect it.
*/

use std::fmt;
use thiserror::Error;

/// Result type for checked stack operations
pub type Result<T> = std::result::Result<T, ContractViolation>;

/// Operation that was being performed when a contract check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Copy assignment
    CopyAssignment,
    /// Move assignment
    MoveAssignment,
    /// Read or write of the top element
    Top,
    /// Logical size query
    Size,
    /// Overwrite of the top element
    Push,
    /// Growth by one slot
    Emplace,
    /// Removal of the top element
    Pop,
    /// Exchange of two buffers
    Swap,
    /// Serialization of the live elements
    Serialize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CopyAssignment => "copy assignment",
            Operation::MoveAssignment => "move assignment",
            Operation::Top => "top",
            Operation::Size => "size",
            Operation::Push => "push",
            Operation::Emplace => "emplace",
            Operation::Pop => "pop",
            Operation::Swap => "swap",
            Operation::Serialize => "serialize",
        };
        f.write_str(name)
    }
}

/// A precondition of a stack operation did not hold.
///
/// These are programming errors rather than runtime conditions, which is why
/// the plain operations treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A stack was requested with no elements
    #[error("Unable to construct Stack instance")]
    ZeroSize,

    /// Copy or move source has been released or emptied
    #[error("Unable to construct Stack instance from invalid source")]
    InvalidSource,

    /// Left-hand side of an assignment is released or emptied
    #[error("Invalid lvalue for the {operation}")]
    InvalidTarget {
        operation: Operation,
    },

    /// Right-hand side of an assignment is released or emptied
    #[error("Invalid rvalue for the {operation}")]
    InvalidOperand {
        operation: Operation,
    },

    /// The origin of a move still owns a buffer afterwards
    #[error("Move operation is non-destructive for move origin")]
    MoveNotDestructive,

    /// The stack is released or has no elements left
    #[error("Unable to perform {operation} command")]
    Unavailable {
        operation: Operation,
    },
}

impl ContractViolation {
    /// Operation the violation was raised for, when it has one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ContractViolation::InvalidTarget { operation }
            | ContractViolation::InvalidOperand { operation }
            | ContractViolation::Unavailable { operation } => Some(*operation),
            _ => None,
        }
    }
}
