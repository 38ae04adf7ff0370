use crate::{Absent, ControlFlow, Optional, Semigroup, Sequence, TryFunctor};

#[derive(Debug, PartialEq)]
struct Stop(Vec<i32>);

impl Semigroup for Stop {
    fn sconcat(self, other: Self) -> Self {
        Stop(self.0.sconcat(other.0))
    }
}

impl ControlFlow for Stop {}

fn reject_odd(x: &i32) -> Result<i32, Vec<i32>> {
    if x % 2 == 0 {
        Ok(x / 2)
    } else {
        Err(vec![*x])
    }
}

#[test]
fn absent_always_succeeds() {
    let actual = Absent::try_fmap_ref(&(), &mut |_: &i32| -> Result<i32, ()> { Err(()) });
    assert_eq!(Ok(()), actual);
}

#[test]
fn optional_propagates_the_only_error() {
    assert_eq!(Ok(Some(2)), Optional::try_fmap_ref(&Some(4), &mut reject_odd));
    assert_eq!(Err(vec![3]), Optional::try_fmap_ref(&Some(3), &mut reject_odd));
    assert_eq!(Ok(None), Optional::try_fmap_ref(&None, &mut reject_odd));
}

#[test]
fn sequence_collects_every_error() {
    assert_eq!(Ok(vec![1, 2]), Sequence::try_fmap_ref(&vec![2, 4], &mut reject_odd));

    let mut visited = 0;
    let actual = Sequence::try_fmap_ref(&vec![1, 2, 3, 4, 5], &mut |x: &i32| {
        visited += 1;
        reject_odd(x)
    });
    assert_eq!(Err(vec![1, 3, 5]), actual);
    assert_eq!(5, visited);
}

#[test]
fn sequence_stops_when_error_says_so() {
    let mut visited = 0;
    let actual = Sequence::try_fmap_ref(&vec![2, 3, 5, 6], &mut |x: &i32| {
        visited += 1;
        reject_odd(x).map_err(Stop)
    });
    assert_eq!(Err(Stop(vec![3])), actual);
    assert_eq!(2, visited);
}
