use std::marker::PhantomData;
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
};
use std::time::Duration;

/// A plain-old-data type: its value is fully held in its own fields.
///
/// `Pod` types are `Copy`, borrow nothing and own no heap resources, so
/// comparing them field by field is the same as comparing their values.
/// References, raw pointers, boxes, strings and trait objects never implement
/// it.
///
/// Implement it for your own types with `#[derive(Pod)]`, which checks every
/// field:
///
/// ```
/// # use pod_compare::Pod;
/// #[derive(Clone, Copy, Pod)]
/// struct Header {
///     kind: u8,
///     len: u16,
///     tag: [u8; 4],
/// }
/// # pod_compare::assert_pod!(Header);
/// ```
///
/// A field that points elsewhere is rejected:
///
/// ```compile_fail
/// # use pod_compare::Pod;
/// #[derive(Clone, Copy, Pod)]
/// struct Name {
///     text: &'static str,
/// }
/// ```
///
/// # Safety
///
/// A hand-written impl asserts that the type holds no references, raw
/// pointers or other indirection. Equality over such a field would compare
/// addresses rather than contents, so a plain `impl` does not compile:
///
/// ```compile_fail
/// # use pod_compare::Pod;
/// #[derive(Clone, Copy, PartialEq)]
/// struct Handle {
///     ptr: *const u8,
/// }
///
/// impl Pod for Handle {}
///
/// #[derive(Clone, Copy, Pod)]
/// struct Outer {
///     handle: Handle,
/// }
/// ```
pub unsafe trait Pod: Copy + 'static {}

macro_rules! impl_primitive {
    ($($t:ty),*) => {
        $(unsafe impl Pod for $t {})*
    };
}
impl_primitive!(
    (), bool, char, f32, f64,
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize,
    NonZeroI8, NonZeroU8, NonZeroI16, NonZeroU16, NonZeroI32, NonZeroU32,
    NonZeroI64, NonZeroU64, NonZeroI128, NonZeroU128, NonZeroIsize, NonZeroUsize,
    Duration
);

unsafe impl<T: Pod> Pod for Wrapping<T> {}

unsafe impl<T: ?Sized + 'static> Pod for PhantomData<T> {}

unsafe impl<T: Pod, const N: usize> Pod for [T; N] {}

macro_rules! impl_tuple {
    ($($t:ident),+) => {
        unsafe impl<$($t: Pod),+> Pod for ($($t,)+) {}
    };
}
impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
impl_tuple!(A, B, C, D, E, F, G, H, I);
impl_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

cfg_if! {
    if #[cfg(feature = "use_std")] {
        use std::net::{Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6};

        impl_primitive!(Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6);
    }
}

#[cfg(test)]
mod tests {
    use super::Pod;

    fn is_pod<T: Pod>() -> bool {
        true
    }

    #[test]
    fn primitives_and_compounds() {
        assert!(is_pod::<u16>());
        assert!(is_pod::<[u16; 4]>());
        assert!(is_pod::<[[u8; 3]; 2]>());
        assert!(is_pod::<(i16, u32, [u8; 8])>());
        assert!(is_pod::<std::num::Wrapping<u64>>());
        assert!(is_pod::<std::marker::PhantomData<str>>());
    }

    #[cfg(feature = "use_std")]
    #[test]
    fn net_addresses() {
        assert!(is_pod::<std::net::Ipv4Addr>());
        assert!(is_pod::<std::net::SocketAddrV6>());
    }
}
