//! Polymorphic callables generated with `#[callable]`, checked for capability.

use std::ops::Mul;

use braid_core::{Callable, capability, callable, repeat, typenum::U3};
use tracing_subscriber::EnvFilter;

/// Squares a value of any multipliable type.
#[callable]
fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(int = Square.call((7_u64,)), float = Square.call((1.5_f64,)), "squared");

    let eighth_power = repeat(U3::new()).wrap(Square);
    tracing::info!(result = eighth_power.call((2_u64,)), "2 to the 8th");

    match capability!(Square: (&'static str,)).into_result() {
        Ok(()) => tracing::info!("strings can be squared"),
        Err(rejection) => tracing::info!(%rejection, "rejected"),
    }
}
