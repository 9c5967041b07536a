/*!
Validity checks shared by the container operations.
*/

use crate::core::contract::verify;
use crate::core::error::{ContractViolation, Operation, Result};

/// State queries every checked operation is built on.
pub trait Integrity {
    /// The object still owns its buffer
    fn is_valid(&self) -> bool;

    /// The object has no live elements
    fn is_empty(&self) -> bool;

    /// Valid and holding at least one element
    fn is_usable(&self) -> bool {
        self.is_valid() && !self.is_empty()
    }

    /// Fail with [`ContractViolation::Unavailable`] unless usable
    fn check_integrity(&self, operation: Operation) -> Result<()> {
        verify(self.is_usable(), ContractViolation::Unavailable { operation })
    }
}
