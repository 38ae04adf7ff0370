/// A shape of contents: how many slots a container has and how they are arranged.
///
/// Implementors are uninhabited marker types that only exist at the type level, the container
/// itself is `Self::Of<T>`. Mapping must keep the arrangement intact (same number of slots, same
/// order), and must visit slots in the same order every time it is called.
pub trait Functor {
    type Of<T>;

    fn fmap<A, B>(this: Self::Of<A>, f: &mut impl FnMut(A) -> B) -> Self::Of<B>;

    /// Like `fmap`, but leaves the original container alone.
    fn fmap_ref<'a, A: 'a, B>(
        this: &'a Self::Of<A>,
        f: &mut impl FnMut(&'a A) -> B,
    ) -> Self::Of<B>;
}

/// No slots at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absent {}

/// Zero or one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional {}

/// Any finite number of slots, kept in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {}

impl Functor for Absent {
    type Of<T> = ();

    fn fmap<A, B>(_this: (), _f: &mut impl FnMut(A) -> B) {}

    fn fmap_ref<'a, A: 'a, B>(_this: &'a (), _f: &mut impl FnMut(&'a A) -> B) {}
}

impl Functor for Optional {
    type Of<T> = Option<T>;

    fn fmap<A, B>(this: Option<A>, f: &mut impl FnMut(A) -> B) -> Option<B> {
        Option::map(this, f)
    }

    fn fmap_ref<'a, A: 'a, B>(this: &'a Option<A>, f: &mut impl FnMut(&'a A) -> B) -> Option<B> {
        this.as_ref().map(f)
    }
}

impl Functor for Sequence {
    type Of<T> = Vec<T>;

    fn fmap<A, B>(this: Vec<A>, f: &mut impl FnMut(A) -> B) -> Vec<B> {
        this.into_iter().map(f).collect()
    }

    fn fmap_ref<'a, A: 'a, B>(this: &'a Vec<A>, f: &mut impl FnMut(&'a A) -> B) -> Vec<B> {
        this.iter().map(f).collect()
    }
}
