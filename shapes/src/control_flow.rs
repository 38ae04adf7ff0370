pub trait ControlFlow {
    /// Whether mapping should keep visiting the remaining slots after this error, so later errors
    /// can be merged into it. Stops at the first error unless overridden.
    fn cont(&self) -> bool {
        false
    }
}

impl ControlFlow for () {}

/// Keeps going after an error so that every failure can be collected.
impl<T> ControlFlow for Vec<T> {
    fn cont(&self) -> bool {
        true
    }
}
