use crate::ControlFlow;
use crate::Functor;
use crate::Semigroup;

/// Follows the same pattern as Functor, though this time with the ability to collect all errors
/// that it encounters into one big error before returning a transformed output.
pub trait TryFunctor: Functor {
    fn try_fmap_ref<'a, A: 'a, B, E: Semigroup + ControlFlow>(
        this: &'a Self::Of<A>,
        f: &mut impl FnMut(&'a A) -> Result<B, E>,
    ) -> Result<Self::Of<B>, E>;
}

impl TryFunctor for crate::Absent {
    fn try_fmap_ref<'a, A: 'a, B, E: Semigroup + ControlFlow>(
        _this: &'a (),
        _f: &mut impl FnMut(&'a A) -> Result<B, E>,
    ) -> Result<(), E> {
        Ok(())
    }
}

impl TryFunctor for crate::Optional {
    fn try_fmap_ref<'a, A: 'a, B, E: Semigroup + ControlFlow>(
        this: &'a Option<A>,
        f: &mut impl FnMut(&'a A) -> Result<B, E>,
    ) -> Result<Option<B>, E> {
        match this {
            Some(v) => f(v).map(Some),
            None => Ok(None),
        }
    }
}

impl TryFunctor for crate::Sequence {
    fn try_fmap_ref<'a, A: 'a, B, E: Semigroup + ControlFlow>(
        this: &'a Vec<A>,
        f: &mut impl FnMut(&'a A) -> Result<B, E>,
    ) -> Result<Vec<B>, E> {
        // Strategy: collect all errors, return concatenation
        let mut err = Option::<E>::None;
        let mut output = Vec::with_capacity(this.len());

        for x in this.iter() {
            match f(x) {
                Ok(v) => output.push(v),
                Err(e) => {
                    let new_err = match err.take() {
                        Some(prev) => prev.sconcat(e),
                        None => e,
                    };
                    if !new_err.cont() {
                        return Err(new_err);
                    }
                    err = Some(new_err);
                }
            }
        }

        match err {
            Some(e) => Err(e),
            None => Ok(output),
        }
    }
}
