use crate::{Absent, Functor, Optional, Sequence};

#[test]
fn absent_has_nothing_to_map() {
    let mut calls = 0;
    Absent::fmap((), &mut |x: i32| {
        calls += 1;
        x
    });
    Absent::fmap_ref(&(), &mut |x: &i32| {
        calls += 1;
        *x
    });
    assert_eq!(calls, 0);
}

#[test]
fn optional_maps_the_single_slot() {
    assert_eq!(Some(4), Optional::fmap(Some(2), &mut |x: i32| x * 2));
    assert_eq!(None, Optional::fmap(None, &mut |x: i32| x * 2));

    let original = Some(String::from("abc"));
    let lengths = Optional::fmap_ref(&original, &mut |s: &String| s.len());
    assert_eq!(Some(3), lengths);
    assert_eq!(Some(String::from("abc")), original);
}

#[test]
fn sequence_keeps_order_and_length() {
    let original = vec![3, 1, 2];
    let mut seen = Vec::new();
    let mapped = Sequence::fmap_ref(&original, &mut |x: &i32| {
        seen.push(*x);
        x * 10
    });
    assert_eq!(vec![30, 10, 20], mapped);
    assert_eq!(original, seen);

    let strings = Sequence::fmap(original, &mut |x: i32| x.to_string());
    assert_eq!(vec!["3", "1", "2"], strings);
}

#[test]
fn sequence_identity_law() {
    let original = vec!['a', 'b', 'c'];
    assert_eq!(original, Sequence::fmap(original.clone(), &mut |c| c));
    assert_eq!(Vec::<u8>::new(), Sequence::fmap(vec![], &mut |c: u8| c));
}

#[test]
fn sequence_composition_law() {
    let original = vec![1, 2, 3];
    let mut f = |x: i32| x + 1;
    let mut g = |x: i32| x * 3;
    let composed = Sequence::fmap(original.clone(), &mut |x| g(f(x)));
    let chained = Sequence::fmap(Sequence::fmap(original, &mut f), &mut g);
    assert_eq!(vec![6, 9, 12], composed);
    assert_eq!(composed, chained);
}

#[test]
fn optional_identity_law() {
    assert_eq!(Some('a'), Optional::fmap(Some('a'), &mut |c| c));
    assert_eq!(None::<char>, Optional::fmap(None, &mut |c: char| c));
}

#[test]
fn optional_composition_law() {
    let mut f = |x: i32| x + 1;
    let mut g = |x: i32| x * 3;
    for original in [Some(4), None] {
        let composed = Optional::fmap(original, &mut |x| g(f(x)));
        let chained = Optional::fmap(Optional::fmap(original, &mut f), &mut g);
        assert_eq!(composed, chained);
    }
    assert_eq!(Some(15), Optional::fmap(Some(4), &mut |x| g(f(x))));
}
