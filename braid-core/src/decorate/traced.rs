use std::fmt::Display;

use crate::{ArgList, Callable, capability::short_type_name};

use super::{Decoration, Decorator, decorate};

/// A decorator that emits a `tracing` event before each call.
///
/// The event is recorded at `debug` level with the payload as `label`,
/// the wrapped callable's short type name as `component`, and the number of
/// arguments as `arity`. The call itself is forwarded unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trace;

impl<M, F, Args> Decorator<M, F, Args> for Trace
where
    M: Display,
    F: Callable<Args>,
    Args: ArgList,
{
    type Output = F::Output;

    fn decorate(&self, message: &M, function: &F, args: Args) -> Self::Output {
        tracing::debug!(
            label = %message,
            component = %short_type_name::<F>(),
            arity = Args::ARITY,
            "calling decorated function"
        );
        function.call(args)
    }
}

/// Binds a message to the [`Trace`] decorator.
///
/// Wrap a callable with the result to log every call through it.
///
/// ```
/// use braid_core::{Callable, traced};
///
/// let sum = traced("calling sum").wrap(|x: i32, y: i32| x + y);
///
/// assert_eq!(sum.call((1, 2)), 3);
/// ```
#[must_use]
pub fn traced<M: Display>(message: M) -> Decoration<M, Trace> {
    decorate(Trace).with(message)
}
