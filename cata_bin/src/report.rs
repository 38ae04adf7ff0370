use core::fmt::Debug;

use cata::FoldErrors;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CheckError {
    #[error("{name}: expected {expected}, got {actual}")]
    #[diagnostic(code(cata::mismatch))]
    Mismatch {
        name: &'static str,
        expected: String,
        actual: String,
    },

    #[error("{name}: fold failed")]
    Fold {
        name: &'static str,
        #[source]
        #[diagnostic_source]
        err: FoldErrors,
    },
}

#[derive(Error, Diagnostic, Debug)]
#[error("{} check(s) failed", .0.len())]
pub struct CheckErrors(#[related] pub Vec<CheckError>);

/// Collects check outcomes, printing one line per check as it goes.
#[derive(Default)]
pub struct Report {
    passed: usize,
    failures: Vec<CheckError>,
}

impl Report {
    pub fn expect<T: Debug + PartialEq>(&mut self, name: &'static str, expected: T, actual: T) {
        if expected == actual {
            println!("ok   {name} = {actual:?}");
            self.passed += 1;
        } else {
            println!("FAIL {name}");
            self.failures.push(CheckError::Mismatch {
                name,
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }
    }

    /// A fold that was supposed to succeed.
    pub fn expect_ok<T: Debug + PartialEq>(
        &mut self,
        name: &'static str,
        expected: T,
        actual: Result<T, FoldErrors>,
    ) {
        match actual {
            Ok(actual) => self.expect(name, expected, actual),
            Err(err) => {
                println!("FAIL {name}");
                self.failures.push(CheckError::Fold { name, err });
            }
        }
    }

    pub fn finish(self) -> Result<usize, CheckErrors> {
        if self.failures.is_empty() {
            Ok(self.passed)
        } else {
            Err(CheckErrors(self.failures))
        }
    }
}
