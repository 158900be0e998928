mod args;

pub use args::ArgList;

use crate::ParamLimit;

/// A trait representing a function-like value in Braid.
///
/// A `Callable` is the building block every adaptor consumes and produces.
/// Arguments are passed as a tuple, so `Callable<(i32, i32)>` reads as
/// "callable with an `i32` and an `i32`". Whether a call is well-formed is
/// decided entirely by whether this trait is implemented for the argument
/// tuple, which makes every capability check a compile-time check.
///
/// Closures and function items taking up to twelve parameters implement
/// `Callable` automatically. Polymorphic callables, which a closure cannot
/// express, are written as a unit struct with a generic implementation, or
/// generated from a generic `fn` with the `#[callable]` attribute.
///
/// # Example
///
/// ```rust
/// use braid_core::Callable;
///
/// struct AddOne;
///
/// impl Callable<(i32,)> for AddOne {
///     type Output = i32;
///
///     fn call(&self, (x,): (i32,)) -> i32 {
///         x + 1
///     }
/// }
///
/// let sum = |x: i32, y: i32| x + y;
///
/// assert_eq!(AddOne.call((41,)), 42);
/// assert_eq!(Callable::call(&sum, (40, 2)), 42);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not callable with arguments `{Args}`",
    label = "not callable with `{Args}`",
    note = "arguments are passed as a tuple; check the count and types against what `{Self}` accepts"
)]
pub trait Callable<Args> {
    type Output;

    /// The maximum number of arguments this callable declares it accepts.
    ///
    /// Unbounded unless an adaptor such as [`Limit`](crate::Limit) declares one.
    const PARAM_LIMIT: ParamLimit = ParamLimit::Unbounded;

    /// Calls with the given argument tuple.
    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable_for_fn {
    ($(($($arg:ident: $ty:ident),*))+) => {
        $(
            impl<Func, Out, $($ty,)*> Callable<($($ty,)*)> for Func
            where
                Func: Fn($($ty),*) -> Out,
            {
                type Output = Out;

                fn call(&self, ($($arg,)*): ($($ty,)*)) -> Out {
                    self($($arg),*)
                }
            }
        )+
    };
}

impl_callable_for_fn! {
    ()
    (a: A)
    (a: A, b: B)
    (a: A, b: B, c: C)
    (a: A, b: B, c: C, d: D)
    (a: A, b: B, c: C, d: D, e: E)
    (a: A, b: B, c: C, d: D, e: E, f: F)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Double;

    impl Callable<(i32,)> for Double {
        type Output = i32;

        fn call(&self, (x,): (i32,)) -> i32 {
            x * 2
        }
    }

    impl Callable<(f64,)> for Double {
        type Output = f64;

        fn call(&self, (x,): (f64,)) -> f64 {
            x * 2.0
        }
    }

    fn constant() -> &'static str {
        "constant"
    }

    #[test]
    fn closures_are_callable() {
        let negate = |x: i32| -x;
        let concat = |a: &str, b: &str| format!("{a}{b}");

        assert_eq!(Callable::call(&negate, (3,)), -3);
        assert_eq!(Callable::call(&concat, ("ab", "cd")), "abcd");
    }

    #[test]
    fn function_items_are_callable() {
        assert_eq!(Callable::call(&constant, ()), "constant");
        assert_eq!(Callable::call(&i32::pow, (2_i32, 10_u32)), 1024);
    }

    #[allow(clippy::too_many_arguments)]
    fn total(
        a: u8,
        b: u8,
        c: u8,
        d: u8,
        e: u8,
        f: u8,
        g: u8,
        h: u8,
        i: u8,
        j: u8,
        k: u8,
        l: u8,
    ) -> u32 {
        [a, b, c, d, e, f, g, h, i, j, k, l]
            .into_iter()
            .map(u32::from)
            .sum()
    }

    #[test]
    fn many_parameters() {
        assert_eq!(
            Callable::call(&total, (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)),
            78
        );
    }

    #[test]
    fn one_type_with_several_signatures() {
        assert_eq!(Double.call((21,)), 42);
        assert!((Double.call((1.5,)) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn arguments_are_moved_through() {
        let take = |owned: String| owned.len();
        let name = String::from("braid");

        assert_eq!(Callable::call(&take, (name,)), 5);
    }

    #[test]
    fn default_param_limit_is_unbounded() {
        assert_eq!(<Double as Callable<(i32,)>>::PARAM_LIMIT, ParamLimit::Unbounded);
        assert_eq!(
            <fn(i32) -> i32 as Callable<(i32,)>>::PARAM_LIMIT,
            ParamLimit::Unbounded
        );
    }
}
