//! Compile-time function adaptors.
//!
//! Braid builds new callables out of existing ones:
//!
//! - [`decorate`] wraps a callable with a decorator function in three
//!   stages (decorator, payload, wrapped callable).
//! - [`repeat`] applies a unary callable to its own output a given number of
//!   times, unrolled for compile-time counts and looped for run-time ones.
//! - [`limit_c`] and [`limit`] cap the number of arguments a callable
//!   accepts and record the cap as its [`ParamLimit`].
//!
//! Every adaptor is itself a [`Callable`], so adaptors compose. Whether a
//! composed call is well-formed is decided by trait resolution, which means
//! ill-formed calls fail to compile, and the [`capability`] module can turn
//! that decision into a value when a test needs to observe it.
//!
//! ```
//! use braid_core::{Callable, limit_c, repeat, typenum::{U1, U3}};
//!
//! let increment = limit_c::<U1, _>(|x: i32| x + 1);
//! let add_three = repeat(U3::new()).wrap(increment);
//!
//! assert_eq!(add_three.call((4,)), 7);
//! ```

mod callable;
pub mod capability;
mod decorate;
mod limit;
mod param_limit;
mod repeat;

pub use callable::{ArgList, Callable};
pub use capability::{Capability, Layered, Rejection};
pub use decorate::{Decorate, Decorated, Decoration, Decorator, decorate};
#[cfg(feature = "tracing")]
pub use decorate::{Trace, traced};
pub use limit::{Limit, MakeLimit, WithinLimit, limit, limit_c};
pub use param_limit::{ParamLimit, function_param_limit};
pub use repeat::{
    Count, CountError, Iterations, Looped, Repeat, RepeatCount, Repeated, SelfComposable,
    Unroll, Unrolled, repeat,
};

/// Generates a [`Callable`] unit struct from a function.
///
/// See the `braid-macros` crate for details.
#[cfg(feature = "macros")]
pub use braid_macros::callable;

pub use typenum;
