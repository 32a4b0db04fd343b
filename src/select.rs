use crate::field::Field;
use crate::pod::Pod;

/// One field that takes part in a comparison of two `T`s.
pub trait Selector<T> {
    /// Whether the selected field is equal in `lhs` and `rhs`.
    fn matches(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T, V> Selector<T> for Field<T, V>
where
    T: Pod,
    V: Pod + PartialEq,
{
    #[inline]
    fn matches(&self, lhs: &T, rhs: &T) -> bool {
        self.get(lhs) == self.get(rhs)
    }
}

/// An ordered list of selectors, fixed at the call site.
///
/// Implemented for `()`, for tuples of up to twelve selectors (each may
/// project a field of a different type) and for arrays of one selector type.
/// Selectors are checked left to right and checking stops at the first
/// mismatch.
pub trait Selectors<T> {
    /// Number of selectors in the list.
    const LEN: usize;

    /// Whether every selector matches.
    fn all_match(&self, lhs: &T, rhs: &T) -> bool;

    /// Position of the first selector whose fields differ.
    fn first_mismatch(&self, lhs: &T, rhs: &T) -> Option<usize>;
}

impl<T> Selectors<T> for () {
    const LEN: usize = 0;

    #[inline]
    fn all_match(&self, _: &T, _: &T) -> bool {
        true
    }

    #[inline]
    fn first_mismatch(&self, _: &T, _: &T) -> Option<usize> {
        None
    }
}

impl<T, S: Selector<T>, const N: usize> Selectors<T> for [S; N] {
    const LEN: usize = N;

    #[inline]
    fn all_match(&self, lhs: &T, rhs: &T) -> bool {
        self.iter().all(|s| s.matches(lhs, rhs))
    }

    #[inline]
    fn first_mismatch(&self, lhs: &T, rhs: &T) -> Option<usize> {
        self.iter().position(|s| !s.matches(lhs, rhs))
    }
}

macro_rules! impl_tuple {
    ($len:expr; $($s:ident . $i:tt),+) => {
        impl<T, $($s: Selector<T>),+> Selectors<T> for ($($s,)+) {
            const LEN: usize = $len;

            #[inline]
            fn all_match(&self, lhs: &T, rhs: &T) -> bool {
                $(self.$i.matches(lhs, rhs))&&+
            }

            #[inline]
            fn first_mismatch(&self, lhs: &T, rhs: &T) -> Option<usize> {
                $(
                    if !self.$i.matches(lhs, rhs) {
                        return Some($i);
                    }
                )+
                None
            }
        }
    };
}
impl_tuple!(1; A.0);
impl_tuple!(2; A.0, B.1);
impl_tuple!(3; A.0, B.1, C.2);
impl_tuple!(4; A.0, B.1, C.2, D.3);
impl_tuple!(5; A.0, B.1, C.2, D.3, E.4);
impl_tuple!(6; A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple!(7; A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple!(8; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_tuple!(9; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_tuple!(10; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_tuple!(11; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_tuple!(12; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);
