use core::fmt::Debug;

use shapes::{Absent, ControlFlow, Functor, Optional, Semigroup, Sequence, TryFunctor};

/// One node of a recursive structure: a value, plus child nodes arranged by the shape `F`.
///
/// Children are boxed so that every shape gives a node of finite size. Nodes are never modified
/// after construction, the only way to get something different out of one is to fold it.
pub struct Annotated<F: Functor, A> {
    head: A,
    tail: F::Of<Box<Annotated<F, A>>>,
}

impl<F: Functor, A> Annotated<F, A> {
    pub fn new(head: A, tail: F::Of<Box<Annotated<F, A>>>) -> Self {
        Self { head, tail }
    }

    /// A node with no children.
    pub fn leaf(head: A) -> Self
    where
        F::Of<Box<Annotated<F, A>>>: Default,
    {
        Self::new(head, Default::default())
    }

    pub fn head(&self) -> &A {
        &self.head
    }

    pub fn tail(&self) -> &F::Of<Box<Annotated<F, A>>> {
        &self.tail
    }

    pub fn into_parts(self) -> (A, F::Of<Box<Annotated<F, A>>>) {
        (self.head, self.tail)
    }

    /// Collapses the structure bottom-up. Every child is folded first, and `reduce` then sees this
    /// node's head together with the folded children, still arranged by `F`.
    pub fn cata<B>(&self, reduce: &mut impl FnMut(&A, F::Of<B>) -> B) -> B {
        let children = F::fmap_ref::<Box<Self>, B>(&self.tail, &mut |child: &Box<Self>| {
            child.cata::<B>(&mut *reduce)
        });
        reduce(&self.head, children)
    }

    /// Same traversal as `cata`, for reducers that can fail. A failing child means the reducer
    /// never runs for its parent. Whether siblings of a failed child are still folded is up to
    /// `E::cont`.
    pub fn try_cata<B, E>(
        &self,
        reduce: &mut impl FnMut(&A, F::Of<B>) -> Result<B, E>,
    ) -> Result<B, E>
    where
        F: TryFunctor,
        E: Semigroup + ControlFlow,
    {
        let children = F::try_fmap_ref::<Box<Self>, B, E>(&self.tail, &mut |child: &Box<Self>| {
            child.try_cata::<B, E>(&mut *reduce)
        })?;
        reduce(&self.head, children)
    }
}

pub fn cata<F: Functor, A, B>(
    mut reduce: impl FnMut(&A, F::Of<B>) -> B,
    node: &Annotated<F, A>,
) -> B {
    node.cata::<B>(&mut reduce)
}

pub fn try_cata<F, A, B, E>(
    mut reduce: impl FnMut(&A, F::Of<B>) -> Result<B, E>,
    node: &Annotated<F, A>,
) -> Result<B, E>
where
    F: TryFunctor,
    E: Semigroup + ControlFlow,
{
    node.try_cata::<B, E>(&mut reduce)
}

// A derive would bound on `F::Of<Box<Self>>`, which is cyclic. Per shape, only `A` is bounded.
macro_rules! structural_impls {
    ($($shape:ident),+ $(,)?) => { $(
        impl<A: Clone> Clone for Annotated<$shape, A> {
            fn clone(&self) -> Self {
                Self {
                    head: self.head.clone(),
                    tail: self.tail.clone(),
                }
            }
        }

        impl<A: PartialEq> PartialEq for Annotated<$shape, A> {
            fn eq(&self, other: &Self) -> bool {
                self.head == other.head && self.tail == other.tail
            }
        }

        impl<A: Eq> Eq for Annotated<$shape, A> {}

        impl<A: Debug> Debug for Annotated<$shape, A> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(concat!("Annotated<", stringify!($shape), ">"))
                    .field("head", &self.head)
                    .field("tail", &self.tail)
                    .finish()
            }
        }
    )+ };
}

structural_impls!(Absent, Optional, Sequence);
