pub mod control_flow;
pub mod functor;
pub mod semigroup;
pub mod try_functor;

#[cfg(test)]
mod test_functor;
#[cfg(test)]
mod test_try_functor;

pub use control_flow::ControlFlow;
pub use functor::{Absent, Functor, Optional, Sequence};
pub use semigroup::Semigroup;
pub use try_functor::TryFunctor;
