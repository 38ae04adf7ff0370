use miette::Diagnostic;
use shapes::{ControlFlow, Semigroup};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    #[error("Arithmetic overflow while folding the node with head {head}")]
    #[diagnostic(help("fold into a wider accumulator type"))]
    Overflow { head: String },
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("Fold errors")]
pub struct FoldErrors(#[related] pub Vec<FoldError>);

impl From<FoldError> for FoldErrors {
    fn from(value: FoldError) -> Self {
        Self(Vec::from([value]))
    }
}

impl Semigroup for FoldErrors {
    fn sconcat(self, other: Self) -> Self {
        Self(self.0.sconcat(other.0))
    }
}

impl ControlFlow for FoldErrors {
    fn cont(&self) -> bool {
        true
    }
}
