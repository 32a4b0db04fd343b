use std::any;
use std::fmt;

/// Selects one field of `T` whose type is `V`.
///
/// A `Field` wraps a non-capturing projection from `&T` to one of its fields,
/// so it is fixed at compile time and costs nothing once inlined. Build one
/// with [`field!`](crate::field!):
///
/// ```
/// use pod_compare::{field, Field};
///
/// #[derive(Clone, Copy)]
/// struct Sample {
///     id: u32,
///     raw: [u16; 4],
/// }
///
/// let raw: Field<Sample, [u16; 4]> = field!(Sample, raw);
/// let sample = Sample { id: 7, raw: [1, 2, 3, 4] };
/// assert_eq!(raw.get(&sample), &[1, 2, 3, 4]);
/// ```
pub struct Field<T, V> {
    get: fn(&T) -> &V,
}

impl<T, V> Field<T, V> {
    /// Wraps a projection such as `|value| &value.name`.
    #[inline]
    pub const fn new(get: fn(&T) -> &V) -> Field<T, V> {
        Field { get }
    }

    /// Like `new`, but takes the owner type from `witness` so the projection
    /// needs no annotation.
    #[inline]
    pub fn of(_witness: &T, get: fn(&T) -> &V) -> Field<T, V> {
        Field { get }
    }

    /// Borrows the selected field of `value`.
    #[inline]
    pub fn get<'a>(&self, value: &'a T) -> &'a V {
        (self.get)(value)
    }
}

impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Field<T, V> {
        *self
    }
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Field")
            .field("owner", &any::type_name::<T>())
            .field("value", &any::type_name::<V>())
            .finish()
    }
}
