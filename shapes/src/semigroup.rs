/// Errors that can be merged, so one failed map can report every failing slot.
pub trait Semigroup {
    fn sconcat(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    fn sconcat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for () {
    fn sconcat(self, _other: Self) -> Self {}
}
