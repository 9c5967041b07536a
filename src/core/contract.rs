/*!
Runtime contract checks.

[`verify`] is the single check used at every operation boundary of the
stack. It turns a failed condition into a [`ContractViolation`]; [`enforce`]
then decides, according to the [`ViolationPolicy`], how the program stops.
*/

use log::error;

use crate::core::config::ViolationPolicy;
use crate::core::error::{ContractViolation, Result};

/// Check a precondition, producing `violation` when it does not hold.
#[inline]
pub fn verify(condition: bool, violation: ContractViolation) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(violation)
    }
}

/// Unwrap the outcome of a checked operation, stopping on a violation.
#[inline]
#[track_caller]
pub fn enforce<T>(result: Result<T>, policy: ViolationPolicy) -> T {
    match result {
        Ok(value) => value,
        Err(violation) => fail(violation, policy),
    }
}

/// Report a violation and stop according to `policy`.
#[cold]
#[track_caller]
pub fn fail(violation: ContractViolation, policy: ViolationPolicy) -> ! {
    error!("Stack contract violation: {}", violation);

    match policy {
        ViolationPolicy::Panic => panic!("{}", violation),
        ViolationPolicy::Abort => {
            eprintln!("FATAL: {}. Aborting.", violation);
            std::process::abort();
        }
    }
}
