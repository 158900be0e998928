use crate::{Callable, ParamLimit};

use super::Decorated;

/// The second stage of a decoration: a payload bound to a decorator.
///
/// Wrapping a callable with [`wrap`](Decoration::wrap), or calling with a
/// one-element tuple holding the callable, produces the final [`Decorated`]
/// callable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoration<P, D> {
    payload: P,
    decorator: D,
}

impl<P, D> Decoration<P, D> {
    pub(crate) const fn new(payload: P, decorator: D) -> Self {
        Self { payload, decorator }
    }

    /// Wraps a callable, moving to the final stage.
    pub fn wrap<F>(self, function: F) -> Decorated<F, P, D> {
        Decorated::new(function, self.payload, self.decorator)
    }

    /// Returns the bound payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P, D, F> Callable<(F,)> for Decoration<P, D>
where
    P: Clone,
    D: Clone,
{
    type Output = Decorated<F, P, D>;
    const PARAM_LIMIT: ParamLimit = ParamLimit::Bounded(1);

    fn call(&self, (function,): (F,)) -> Self::Output {
        Decorated::new(function, self.payload.clone(), self.decorator.clone())
    }
}
