//! Natural numbers as chains of nodes with nothing in them but a successor.

use shapes::Optional;

use crate::Annotated;

pub type Nat = Annotated<Optional, ()>;

pub fn zero() -> Nat {
    Nat::leaf(())
}

pub fn succ(pred: Nat) -> Nat {
    Nat::new((), Some(Box::new(pred)))
}

/// A chain of exactly `n` nodes. There is no chain without any nodes, so `0` gives `None`.
pub fn from_depth(n: usize) -> Option<Nat> {
    if n == 0 {
        return None;
    }
    Some((1..n).fold(zero(), |nat, _| succ(nat)))
}

/// `v` successors stacked on top of `zero()`.
pub fn from_value(v: u64) -> Nat {
    (0..v).fold(zero(), |nat, _| succ(nat))
}

/// Counts nodes, so a lone `zero()` is 1.
pub fn depth(_: &(), child: Option<u64>) -> u64 {
    1 + child.unwrap_or(0)
}

/// Reads the chain as a number, with the innermost node standing for zero.
pub fn value(_: &(), child: Option<u64>) -> u64 {
    child.map_or(0, |c| c + 1)
}
