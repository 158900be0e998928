#![cfg(feature = "macros")]

use std::ops::Add;

use braid_core::{Callable, callable, is_callable, limit_c, repeat, typenum::{U2, U3}};

/// Doubles a number.
#[callable]
fn double(x: i64) -> i64 {
    x * 2
}

#[callable]
pub fn plus<T>(x: T, y: T) -> T
where
    T: Add<Output = T>,
{
    x + y
}

#[callable(Shout)]
fn make_loud<'a>(text: &'a str, suffix: &'a str) -> String {
    format!("{}{suffix}", text.to_uppercase())
}

#[callable]
fn first_of<T: Copy, const N: usize>(items: [T; N]) -> Option<T> {
    items.first().copied()
}

#[test]
fn generated_struct_calls_the_function() {
    assert_eq!(Double.call((21,)), 42);
    assert_eq!(double(21), 42);
}

#[test]
fn generic_functions_become_polymorphic_callables() {
    assert_eq!(Plus.call((1_u8, 2_u8)), 3);
    assert!((Plus.call((0.5_f64, 0.25_f64)) - 0.75).abs() < f64::EPSILON);
    assert_eq!(first_of([7, 8, 9]), Some(7));
    assert_eq!(FirstOf.call(([1.5, 2.5],)), Some(1.5));
    assert_eq!(FirstOf.call(([] as [u8; 0],)), None);
}

#[test]
fn attribute_can_name_the_struct() {
    assert_eq!(Shout.call(("hi", "!")), "HI!");
}

#[test]
fn generated_structs_work_with_adaptors() {
    assert_eq!(repeat(U3::new()).wrap(Double).call((1_i64,)), 8);
    assert_eq!(limit_c::<U2, _>(Plus).call((40, 2)), 42);
}

#[test]
fn generated_structs_accept_only_the_function_signature() {
    assert!(is_callable!(Double: (i64,)));
    assert!(!is_callable!(Double: (i64, i64)));
    assert!(!is_callable!(Double: (u8,)));
    assert!(!is_callable!(Plus: (String, &'static str)));
    assert!(is_callable!(Plus: (u32, u32)));
}

#[test]
fn generated_structs_are_plain_values() {
    let copied = Double;

    assert_eq!(copied, Double::default());
    assert_eq!(format!("{copied:?}"), "Double");
}
