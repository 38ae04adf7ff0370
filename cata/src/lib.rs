pub mod annotated;
pub mod error;
pub mod list;
pub mod nat;
pub mod rose;


pub use annotated::{cata, try_cata, Annotated};
pub use error::{FoldError, FoldErrors};
