/// Builds a [`Field`](crate::Field) selecting `field` of type `ty`.
///
/// `field` is a field name or a tuple index.
///
/// ```
/// use pod_compare::field;
///
/// #[derive(Clone, Copy)]
/// struct Pair(u8, u16);
///
/// let second = field!(Pair, 1);
/// assert_eq!(*second.get(&Pair(1, 2)), 2);
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $field:tt) => {
        $crate::Field::<$ty, _>::new(|value| &value.$field)
    };
}

/// Compares two values of the same `Pod` type on the listed fields.
///
/// The owner type is taken from `lhs`, so fields are named without it:
///
/// ```
/// use pod_compare::{pod_compare, Pod};
///
/// #[derive(Clone, Copy, Pod)]
/// struct Foo {
///     a: i16,
///     d: [u16; 4],
/// }
///
/// let x = Foo { a: 1, d: [1, 0, 0, 0] };
/// let y = Foo { a: 1, d: [1, 0, 1, 0] };
///
/// assert!(!pod_compare!(x, y, a, d));
/// assert!(pod_compare!(x, y, a));
/// ```
#[macro_export]
macro_rules! pod_compare {
    ($lhs:expr, $rhs:expr $(, $field:tt)*) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => $crate::compare(
                lhs,
                rhs,
                ($($crate::Field::of(lhs, |value| &value.$field),)*),
            ),
        }
    };
}

/// Implements `PartialEq` for a `Pod` type by comparing the listed fields.
///
/// Fields that are not listed do not take part in equality.
///
/// ```
/// use pod_compare::{impl_pod_eq, Pod};
///
/// #[derive(Clone, Copy, Debug, Pod)]
/// struct Packet {
///     seq: u32,
///     payload: [u8; 16],
///     received_at: u64,
/// }
///
/// impl_pod_eq!(Packet { seq, payload });
///
/// let a = Packet { seq: 1, payload: [0; 16], received_at: 10 };
/// let b = Packet { received_at: 99, ..a };
/// assert_eq!(a, b);
/// ```
#[macro_export]
macro_rules! impl_pod_eq {
    ($ty:ty { $($field:tt),* }) => {
        impl ::core::cmp::PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $crate::pod_compare!(*self, *other $(, $field)*)
            }
        }
    };
}

/// Fails to compile unless every listed type implements [`Pod`](crate::Pod).
///
/// ```
/// pod_compare::assert_pod!(u8, [u16; 4], (i16, u32));
/// ```
///
/// ```compile_fail
/// pod_compare::assert_pod!(&'static str);
/// ```
#[macro_export]
macro_rules! assert_pod {
    ($($ty:ty),+ $(,)?) => {
        const _: fn() = || {
            fn assert_pod<T: $crate::Pod>() {}
            $(assert_pod::<$ty>();)+
        };
    };
}
