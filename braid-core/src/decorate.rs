mod decorated;
mod decoration;
#[cfg(feature = "tracing")]
mod traced;

pub use decorated::Decorated;
pub use decoration::Decoration;
#[cfg(feature = "tracing")]
pub use traced::{Trace, traced};

use crate::{Callable, ParamLimit};

/// The function that does the work behind a [`decorate`] adaptor.
///
/// A decorator is called with the payload bound at the second stage, a
/// reference to the wrapped callable bound at the third, and the arguments
/// of the final call. It decides if, when, and how the wrapped callable
/// runs.
///
/// Closures of shape `Fn(&P, &F, Args) -> R` are decorators. Decorators that
/// must accept any wrapped callable (most useful ones) are written as a type
/// with a generic implementation, since a closure cannot name an arbitrary
/// `F`.
///
/// # Example
///
/// ```
/// use braid_core::{Callable, Decorator, decorate};
///
/// /// Scales the wrapped function's result by the payload.
/// struct Scale;
///
/// impl<F, Args> Decorator<i32, F, Args> for Scale
/// where
///     F: Callable<Args, Output = i32>,
/// {
///     type Output = i32;
///
///     fn decorate(&self, factor: &i32, function: &F, args: Args) -> i32 {
///         factor * function.call(args)
///     }
/// }
///
/// let tripled_sum = decorate(Scale).with(3).wrap(|x: i32, y: i32| x + y);
///
/// assert_eq!(tripled_sum.call((1, 2)), 9);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot decorate `{F}` carrying payload `{P}` when called with `{Args}`",
    label = "decorator rejects this call",
    note = "a decorator is called with (payload, wrapped function, arguments); one of `{P}`, `{F}`, or `{Args}` is not accepted"
)]
pub trait Decorator<P, F, Args> {
    type Output;

    /// The parameter limit reported by callables this decorator produces.
    const PARAM_LIMIT: ParamLimit = ParamLimit::Unbounded;

    /// Runs the decorated call.
    fn decorate(&self, payload: &P, function: &F, args: Args) -> Self::Output;
}

impl<D, P, F, Args, Out> Decorator<P, F, Args> for D
where
    D: Fn(&P, &F, Args) -> Out,
{
    type Output = Out;

    fn decorate(&self, payload: &P, function: &F, args: Args) -> Out {
        self(payload, function, args)
    }
}

/// The first stage of a decoration: holds only the decorator.
///
/// Created by [`decorate`]. Binding a payload with [`with`](Decorate::with)
/// (or by calling it with a one-element tuple) moves to [`Decoration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decorate<D> {
    decorator: D,
}

/// Creates a decorator adaptor from a decorator function.
///
/// The result goes through three stages, each a distinct type:
///
/// 1. `decorate(d)` → [`Decorate`], holding the decorator.
/// 2. `.with(payload)` → [`Decoration`], holding payload and decorator.
/// 3. `.wrap(function)` → [`Decorated`], a callable where calling with
///    `args` is exactly `d.decorate(&payload, &function, args)`.
///
/// Each stage is also a [`Callable`] taking its single argument as a
/// one-element tuple, so stages 1 and 2 can be reused to build several
/// decorated callables.
#[must_use]
pub const fn decorate<D>(decorator: D) -> Decorate<D> {
    Decorate { decorator }
}

impl<D> Decorate<D> {
    /// Binds a payload, moving to the second stage.
    pub fn with<P>(self, payload: P) -> Decoration<P, D> {
        Decoration::new(payload, self.decorator)
    }

    /// Returns the decorator.
    pub fn decorator(&self) -> &D {
        &self.decorator
    }
}

impl<D, P> Callable<(P,)> for Decorate<D>
where
    D: Clone,
{
    type Output = Decoration<P, D>;
    const PARAM_LIMIT: ParamLimit = ParamLimit::Bounded(1);

    fn call(&self, (payload,): (P,)) -> Self::Output {
        Decoration::new(payload, self.decorator.clone())
    }
}
