//! Capability checks: can this callable be called with these arguments?
//!
//! The check itself is the trait bound `F: Callable<Args>`. Generic code
//! states it as a bound and the compiler rejects ill-formed calls before
//! anything runs. Every layer of an adaptor carries its own diagnostic, so a
//! rejected composed call names the layer that refused it: the decorator
//! (with its payload and wrapped function types), the arity limit, or the
//! wrapped callable itself.
//!
//! When a rejection needs to be observed rather than reported as a type
//! error, for instance in a test asserting that a call is *not* allowed, the
//! [`is_callable!`](crate::is_callable) and [`capability!`](crate::capability)
//! macros check the bound for concrete types and produce a value instead.
//! `capability!` follows rejected calls through [`Layered`] adaptors and
//! names the innermost layer that refused.
//!
//! ```
//! use braid_core::{Limit, capability, is_callable, typenum::U2};
//!
//! type Sum = fn(i32, i32) -> i32;
//!
//! assert!(is_callable!(Sum: (i32, i32)));
//! assert!(!is_callable!(Sum: (i32,)));
//!
//! // The wrapped function takes three arguments, but the limit allows two.
//! let rejected = capability!(Limit<U2, fn(i32, i32, i32) -> i32>: (i32, i32, i32));
//! assert!(!rejected.is_callable());
//! assert_eq!(
//!     rejected.rejection().unwrap().component(),
//!     "Limit<U2, fn(i32, i32, i32) -> i32>"
//! );
//! ```

use std::any::type_name;

use thiserror::Error;
use typenum::Bit;

/// The outcome of checking whether a call is well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// The call type-checks.
    Callable,
    /// The call is rejected; the [`Rejection`] names who rejected it.
    Rejected(Rejection),
}

impl Capability {
    /// Returns `true` if the call type-checks.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Callable)
    }

    /// Returns the rejection, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Callable => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }

    /// Converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] if the call does not type-check.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Callable => Ok(()),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Identifies a callable that rejected an argument list.
///
/// Type names are shortened by dropping module paths and writing `typenum`
/// integers as numbers, so the component reads
/// `Limit<U2, fn(i32, i32) -> i32>` rather than
/// `braid_core::limit::Limit<typenum::uint::UInt<..>, ..>`. Type aliases
/// are always shown expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{component}` is not callable with arguments `{arguments}`")]
pub struct Rejection {
    component: String,
    arguments: String,
}

impl Rejection {
    /// Creates a rejection of `Args` by the callable type `F`.
    #[must_use]
    pub fn new<F: ?Sized, Args>() -> Self {
        Self {
            component: short_type_name::<F>(),
            arguments: short_type_name::<Args>(),
        }
    }

    /// The rejecting component's type name.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// The rejected argument tuple's type name.
    #[must_use]
    pub fn arguments(&self) -> &str {
        &self.arguments
    }
}

/// An adaptor that forwards calls to a wrapped callable.
///
/// [`capability!`](crate::capability) uses this to find the layer that
/// rejected a call. When the adaptor is not callable with `Args`, it is
/// blamed unless it admits `Args` and its wrapped callable also rejects
/// `InnerArgs`, in which case the search moves inward.
pub trait Layered<Args> {
    /// The wrapped callable.
    type Inner;

    /// The arguments the wrapped callable receives.
    type InnerArgs;

    /// `B1` if the adaptor itself admits `Args`, `B0` if it refuses them
    /// before the wrapped callable is involved.
    type Admits: Bit;
}

/// Returns the type name of `T` in the short form used by [`Rejection`].
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    render_unsigned(&strip_paths(type_name::<T>()))
}

fn strip_paths(name: &str) -> String {
    let mut short = String::with_capacity(name.len());
    let mut segment_start = 0;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            short.truncate(segment_start);
        } else {
            short.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = short.len();
            }
        }
    }

    short
}

/// Rewrites `typenum` unsigned integers, such as `UInt<UInt<UTerm, B1>, B0>`,
/// as `U2`.
fn render_unsigned(name: &str) -> String {
    let mut rendered = String::with_capacity(name.len());
    let mut rest = name;

    while let Some(c) = rest.chars().next() {
        let at_boundary = rendered
            .chars()
            .last()
            .is_none_or(|last| !(last.is_alphanumeric() || last == '_'));

        if at_boundary {
            if let Some((value, tail)) = parse_unsigned(rest) {
                rendered.push_str(&format!("U{value}"));
                rest = tail;
                continue;
            }
        }

        rendered.push(c);
        rest = &rest[c.len_utf8()..];
    }

    rendered
}

/// Parses a `typenum` unsigned integer at the start of `name`.
fn parse_unsigned(name: &str) -> Option<(u128, &str)> {
    if let Some(tail) = name.strip_prefix("UTerm") {
        let ends_ident = tail
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        return ends_ident.then_some((0, tail));
    }

    let tail = name.strip_prefix("UInt<")?;
    let (high, tail) = parse_unsigned(tail)?;
    let (bit, tail) = match tail.strip_prefix(", B0>") {
        Some(tail) => (0, tail),
        None => (1, tail.strip_prefix(", B1>")?),
    };

    Some((high.checked_mul(2)?.checked_add(bit)?, tail))
}

/// Returns whether a callable type accepts an argument tuple, as a `bool`.
///
/// Evaluates at compile time and works on concrete types only; in generic
/// code, state the bound `F: Callable<Args>` instead.
///
/// ```
/// use braid_core::is_callable;
///
/// const UNARY: bool = is_callable!(fn(u8) -> u8: (u8,));
/// const BINARY: bool = is_callable!(fn(u8) -> u8: (u8, u8));
///
/// assert!(UNARY);
/// assert!(!BINARY);
/// ```
#[macro_export]
macro_rules! is_callable {
    ($target:ty : $args:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::capability::__private::NotCallable as _;
        <$crate::capability::__private::Check<$target, $args>>::CALLABLE
    }};
}

/// Checks whether a callable type accepts an argument tuple.
///
/// Yields [`Capability::Callable`] or a [`Capability::Rejected`] carrying the
/// rejecting component. A rejection by a [`Layered`] adaptor is traced
/// inward: the component is the innermost layer that refused, for example
/// the [`Limit`](crate::Limit) inside a decoration rather than the
/// decoration itself. Works on concrete types only.
///
/// ```
/// use braid_core::{Callable, Decorated, Decorator, Limit, capability, typenum::U1};
///
/// /// Calls the wrapped function and discards the result.
/// struct Discard;
///
/// impl<F: Callable<Args>, Args> Decorator<(), F, Args> for Discard {
///     type Output = ();
///
///     fn decorate(&self, _: &(), function: &F, args: Args) {
///         function.call(args);
///     }
/// }
///
/// type Increment = fn(i32) -> i32;
///
/// let rejected = capability!(Decorated<Limit<U1, Increment>, (), Discard>: (i32, i32));
/// assert_eq!(
///     rejected.rejection().unwrap().component(),
///     "Limit<U1, fn(i32) -> i32>"
/// );
/// ```
#[macro_export]
macro_rules! capability {
    ($target:ty : $args:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::capability::__private::{StepFirst as _, StepLast as _, StepSecond as _};
        let state = $crate::capability::__private::Start::<$target, $args>::new();
        $crate::__capability_steps!(state; _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _)
    }};
}

/// Advances a `capability!` check once per `_`, then reads the verdict.
#[doc(hidden)]
#[macro_export]
macro_rules! __capability_steps {
    ($state:ident;) => {
        $state.finish()
    };
    ($state:ident; _ $($rest:tt)*) => {{
        let $state = (&&&$state).step();
        $crate::__capability_steps!($state; $($rest)*)
    }};
}

#[doc(hidden)]
pub mod __private {
    use std::marker::PhantomData;

    use typenum::{B0, B1};

    use super::{Capability, Layered, Rejection};
    use crate::Callable;

    pub struct Check<F: ?Sized, Args>(PhantomData<Args>, PhantomData<F>);

    impl<F, Args> Check<F, Args>
    where
        F: Callable<Args> + ?Sized,
    {
        pub const CALLABLE: bool = true;
    }

    pub trait NotCallable {
        const CALLABLE: bool = false;
    }

    impl<T: ?Sized> NotCallable for T {}

    // `capability!` walks these states with autoref dispatch. Each step
    // calls `step` on `&&&state`: `StepFirst` impls (on `&&&`) win when
    // their bounds hold, then `StepSecond` (on `&&`), then `StepLast` (on
    // `&`), which always applies.
    //
    //   Start<T, A>          T accepts A            -> Accepted
    //                        otherwise              -> Suspect<T, A>
    //   Suspect<T, A>        T is Layered, admits   -> Inner<T::Inner, .., T, A>
    //                        T is Layered, refuses  -> Settled<T, A>
    //                        otherwise              -> Settled<T, A>
    //   Inner<I, IA, P, PA>  I accepts IA           -> Settled<P, PA>
    //                        otherwise              -> Suspect<I, IA>

    macro_rules! check_states {
        ($($state:ident<$($param:ident),*>),+ $(,)?) => {
            $(
                pub struct $state<$($param),*>(PhantomData<fn() -> ($($param,)*)>);

                impl<$($param),*> $state<$($param),*> {
                    #[allow(clippy::new_without_default)]
                    pub const fn new() -> Self {
                        Self(PhantomData)
                    }
                }
            )+
        };
    }

    check_states! {
        Start<T, A>,
        Suspect<T, A>,
        Inner<I, IA, P, PA>,
        Settled<T, A>,
        Accepted<>,
    }

    pub trait StepFirst {
        type Next;
        fn step(self) -> Self::Next;
    }

    pub trait StepSecond {
        type Next;
        fn step(self) -> Self::Next;
    }

    pub trait StepLast {
        type Next;
        fn step(self) -> Self::Next;
    }

    impl<T: Callable<A>, A> StepFirst for &&&Start<T, A> {
        type Next = Accepted;

        fn step(self) -> Accepted {
            Accepted::new()
        }
    }

    impl<T, A> StepLast for &Start<T, A> {
        type Next = Suspect<T, A>;

        fn step(self) -> Suspect<T, A> {
            Suspect::new()
        }
    }

    impl<T, A> StepSecond for &&Suspect<T, A>
    where
        T: Layered<A>,
        T::Admits: Branch<T, A>,
    {
        type Next = <T::Admits as Branch<T, A>>::Next;

        fn step(self) -> Self::Next {
            <T::Admits as Branch<T, A>>::next()
        }
    }

    impl<T, A> StepLast for &Suspect<T, A> {
        type Next = Settled<T, A>;

        fn step(self) -> Settled<T, A> {
            Settled::new()
        }
    }

    impl<I: Callable<IA>, IA, P, PA> StepFirst for &&&Inner<I, IA, P, PA> {
        type Next = Settled<P, PA>;

        fn step(self) -> Settled<P, PA> {
            Settled::new()
        }
    }

    impl<I, IA, P, PA> StepLast for &Inner<I, IA, P, PA> {
        type Next = Suspect<I, IA>;

        fn step(self) -> Suspect<I, IA> {
            Suspect::new()
        }
    }

    impl<T, A> StepLast for &Settled<T, A> {
        type Next = Settled<T, A>;

        fn step(self) -> Settled<T, A> {
            Settled::new()
        }
    }

    impl StepLast for &Accepted {
        type Next = Accepted;

        fn step(self) -> Accepted {
            Accepted::new()
        }
    }

    /// Chooses the next state from a layer's `Admits` bit.
    pub trait Branch<T, A> {
        type Next;
        fn next() -> Self::Next;
    }

    impl<T, A> Branch<T, A> for B0 {
        type Next = Settled<T, A>;

        fn next() -> Self::Next {
            Settled::new()
        }
    }

    impl<T: Layered<A>, A> Branch<T, A> for B1 {
        type Next = Inner<T::Inner, T::InnerArgs, T, A>;

        fn next() -> Self::Next {
            Inner::new()
        }
    }

    impl Accepted {
        pub fn finish(self) -> Capability {
            Capability::Callable
        }
    }

    impl<T, A> Settled<T, A> {
        pub fn finish(self) -> Capability {
            Capability::Rejected(Rejection::new::<T, A>())
        }
    }

    impl<T, A> Suspect<T, A> {
        pub fn finish(self) -> Capability {
            Capability::Rejected(Rejection::new::<T, A>())
        }
    }

    impl<I, IA, P, PA> Inner<I, IA, P, PA> {
        pub fn finish(self) -> Capability {
            Capability::Rejected(Rejection::new::<P, PA>())
        }
    }
}
