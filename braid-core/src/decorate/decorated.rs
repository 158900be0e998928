use typenum::B1;

use crate::{Callable, Layered, ParamLimit};

use super::Decorator;

/// The final stage of a decoration: a callable wrapped by a decorator.
///
/// Calling a `Decorated` with `args` calls the decorator with the payload,
/// the wrapped callable, and `args`, in that order. The call is well-formed
/// exactly when the decorator accepts that combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decorated<F, P, D> {
    function: F,
    payload: P,
    decorator: D,
}

impl<F, P, D> Decorated<F, P, D> {
    pub(crate) const fn new(function: F, payload: P, decorator: D) -> Self {
        Self {
            function,
            payload,
            decorator,
        }
    }

    /// Returns the wrapped callable.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Returns the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the adaptor and returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, P, D, Args> Callable<Args> for Decorated<F, P, D>
where
    D: Decorator<P, F, Args>,
{
    type Output = D::Output;
    const PARAM_LIMIT: ParamLimit = D::PARAM_LIMIT;

    fn call(&self, args: Args) -> Self::Output {
        self.decorator.decorate(&self.payload, &self.function, args)
    }
}

impl<F, P, D, Args> Layered<Args> for Decorated<F, P, D> {
    type Inner = F;
    type InnerArgs = Args;
    type Admits = B1;
}
