use typenum::{U0, U1, U2, U3, U4, U5, U6, U7, U8, U9, U10, U11, U12, Unsigned};

/// An argument tuple passed to a [`Callable`](crate::Callable).
///
/// Reports how many arguments the tuple holds, both as a constant and as a
/// type-level number. The type-level form lets bounds such as
/// [`WithinLimit`](crate::WithinLimit) compare arities during type checking.
pub trait ArgList {
    /// The number of arguments as a `typenum` unsigned integer.
    type Arity: Unsigned;

    /// The number of arguments.
    const ARITY: usize = <Self::Arity as Unsigned>::USIZE;
}

macro_rules! impl_arg_list {
    ($($arity:ty => ($($ty:ident),*))+) => {
        $(
            impl<$($ty),*> ArgList for ($($ty,)*) {
                type Arity = $arity;
            }
        )+
    };
}

impl_arg_list! {
    U0 => ()
    U1 => (A)
    U2 => (A, B)
    U3 => (A, B, C)
    U4 => (A, B, C, D)
    U5 => (A, B, C, D, E)
    U6 => (A, B, C, D, E, F)
    U7 => (A, B, C, D, E, F, G)
    U8 => (A, B, C, D, E, F, G, H)
    U9 => (A, B, C, D, E, F, G, H, I)
    U10 => (A, B, C, D, E, F, G, H, I, J)
    U11 => (A, B, C, D, E, F, G, H, I, J, K)
    U12 => (A, B, C, D, E, F, G, H, I, J, K, L)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_matches_tuple_length() {
        assert_eq!(<() as ArgList>::ARITY, 0);
        assert_eq!(<(i32,) as ArgList>::ARITY, 1);
        assert_eq!(<(i32, &str) as ArgList>::ARITY, 2);
        assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as ArgList>::ARITY, 12);
    }

    #[test]
    fn type_level_arity_agrees() {
        assert_eq!(<<(f64, f64, f64) as ArgList>::Arity as Unsigned>::USIZE, 3);
    }
}
