use std::marker::PhantomData;

use typenum::{IsLessOrEqual, True, Unsigned};

use crate::{ArgList, Callable, Layered, ParamLimit};

/// An argument tuple with at most `N` elements.
///
/// Implemented for every [`ArgList`] whose arity is no greater than `N`.
/// A [`Limit`] requires this of every call, so calling with too many
/// arguments is a compile-time error that names the limit.
#[diagnostic::on_unimplemented(
    message = "`{Self}` supplies more arguments than the limit `{N}` allows",
    label = "too many arguments for this limit",
    note = "a `Limit<{N}, _>` accepts only argument tuples with at most `{N}` elements"
)]
pub trait WithinLimit<N> {}

impl<Args, N> WithinLimit<N> for Args
where
    Args: ArgList,
    Args::Arity: IsLessOrEqual<N, Output = True>,
{
}

/// A callable that accepts at most `N` arguments.
///
/// Calls with up to `N` arguments are forwarded unchanged. Calls with more
/// are rejected while type checking, even if the wrapped callable would
/// accept them. A `Limit` reports [`ParamLimit::Bounded(N)`] as its
/// parameter limit.
///
/// # Example
///
/// ```
/// use braid_core::{Callable, limit_c, typenum::U2};
///
/// let sum = limit_c::<U2, _>(|x: i32, y: i32| x + y);
///
/// assert_eq!(sum.call((1, 2)), 3);
/// ```
///
/// A call with more arguments than the limit does not compile:
///
/// ```compile_fail
/// use braid_core::{Callable, limit_c, typenum::U2};
///
/// fn sum3(x: i32, y: i32, z: i32) -> i32 {
///     x + y + z
/// }
///
/// limit_c::<U2, _>(sum3).call((1, 2, 3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit<N, F> {
    function: F,
    limit: PhantomData<N>,
}

impl<N, F> Limit<N, F> {
    /// Wraps a callable with the limit `N`.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            limit: PhantomData,
        }
    }

    /// Returns the wrapped callable.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Consumes the adaptor and returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<N, F, Args> Callable<Args> for Limit<N, F>
where
    N: Unsigned,
    Args: WithinLimit<N>,
    F: Callable<Args>,
{
    type Output = F::Output;
    const PARAM_LIMIT: ParamLimit = ParamLimit::Bounded(N::USIZE);

    fn call(&self, args: Args) -> Self::Output {
        self.function.call(args)
    }
}

impl<N, F, Args> Layered<Args> for Limit<N, F>
where
    N: Unsigned,
    Args: ArgList,
    Args::Arity: IsLessOrEqual<N>,
{
    type Inner = F;
    type InnerArgs = Args;
    type Admits = <Args::Arity as IsLessOrEqual<N>>::Output;
}

/// Limits a callable to at most `N` arguments.
///
/// `N` is a `typenum` unsigned integer, usually given by turbofish:
/// `limit_c::<U2, _>(f)`.
#[must_use]
pub const fn limit_c<N: Unsigned, F>(function: F) -> Limit<N, F> {
    Limit::new(function)
}

/// Creates a limit adaptor from a limit value.
///
/// `limit(U2::new())` is the same adaptor as `limit_c::<U2, _>`, in a form
/// that can be stored, passed around, and applied to several callables.
///
/// ```
/// use braid_core::{Callable, limit, typenum::U1};
///
/// let unary = limit(U1::new());
/// let negate = unary.wrap(|x: i32| -x);
/// let length = unary.wrap(|s: &str| s.len());
///
/// assert_eq!(negate.call((4,)), -4);
/// assert_eq!(length.call(("four",)), 4);
/// ```
#[must_use]
pub const fn limit<N: Unsigned>(_limit: N) -> MakeLimit<N> {
    MakeLimit { limit: PhantomData }
}

/// A limit waiting for the callable it applies to.
///
/// Created by [`limit`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MakeLimit<N> {
    limit: PhantomData<N>,
}

impl<N> Clone for MakeLimit<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for MakeLimit<N> {}

impl<N: Unsigned> MakeLimit<N> {
    /// Applies the limit to a callable.
    pub fn wrap<F>(self, function: F) -> Limit<N, F> {
        Limit::new(function)
    }
}

impl<N: Unsigned, F> Callable<(F,)> for MakeLimit<N> {
    type Output = Limit<N, F>;
    const PARAM_LIMIT: ParamLimit = ParamLimit::Bounded(1);

    fn call(&self, (function,): (F,)) -> Self::Output {
        Limit::new(function)
    }
}
