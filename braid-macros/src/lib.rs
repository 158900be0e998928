mod callable;
mod utils;

use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Turns a function into a named [`Callable`] type.
///
/// The function is kept as written. Alongside it, this attribute:
///
/// - Generates a unit struct named after the function in `UpperCamelCase`
///   (or the name given as `#[callable(Name)]`), with the function's
///   visibility and doc comments.
/// - Implements [`Callable`] for the struct with the function's parameter
///   types as the argument tuple, forwarding every call to the function.
///
/// Generic functions produce generic implementations, which is how a
/// polymorphic callable is written without spelling out the impl by hand.
///
/// ## Restrictions
///
/// - Methods, `async`, `unsafe`, and variadic functions are rejected.
/// - Parameters and the return type must not use `impl Trait`.
/// - Every type or const parameter must appear in a parameter type.
/// - Lifetimes in the return type must be named.
///
/// ## Example
///
/// ### Input
///
/// ```ignore
/// /// Adds two values of the same type.
/// #[callable]
/// pub fn plus<T>(x: T, y: T) -> T
/// where
///     T: Add<Output = T>,
/// {
///     x + y
/// }
/// ```
///
/// ### Expanded
///
/// ```ignore
/// /// Adds two values of the same type.
/// pub fn plus<T>(x: T, y: T) -> T
/// where
///     T: Add<Output = T>,
/// {
///     x + y
/// }
///
/// /// Adds two values of the same type.
/// #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// pub struct Plus;
///
/// impl<T> ::braid_core::Callable<(T, T)> for Plus
/// where
///     T: Add<Output = T>,
/// {
///     type Output = T;
///
///     fn call(&self, (arg0, arg1): (T, T)) -> Self::Output {
///         plus::<T>(arg0, arg1)
///     }
/// }
/// ```
///
/// [`Callable`]: braid_core::Callable
#[proc_macro_attribute]
pub fn callable(attr: TokenStream, item: TokenStream) -> TokenStream {
    let parsed_attr = parse_macro_input!(attr as callable::ParsedAttr);
    let parsed_item = parse_macro_input!(item as callable::ParsedItem);

    match callable::Parsed::new(parsed_attr, parsed_item) {
        Ok(parsed) => parsed.expand().into(),
        Err(error) => error.to_compile_error().into(),
    }
}
