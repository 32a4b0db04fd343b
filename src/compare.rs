use crate::pod::Pod;
use crate::select::Selectors;

/// Compares `lhs` and `rhs` on the fields named by `selectors`.
///
/// Returns `true` when every selected field is equal in both values. Fields
/// are checked in the order given and the first difference ends the
/// comparison. Array fields are equal when every element is. Fields left out
/// of `selectors` never affect the result, and an empty list is always equal.
///
/// ```
/// use pod_compare::{compare, field, Pod};
///
/// #[derive(Clone, Copy, Pod)]
/// struct Foo {
///     a: i16,
///     b: u32,
///     c: [u8; 8],
///     d: [u16; 4],
/// }
///
/// let x = Foo { a: 1, b: 1, c: [1, 0, 0, 0, 0, 0, 0, 0], d: [1, 0, 0, 0] };
/// let mut y = x;
/// y.d[2] = 1;
///
/// let all = (field!(Foo, a), field!(Foo, b), field!(Foo, c), field!(Foo, d));
/// assert!(compare(&x, &x, all));
/// assert!(!compare(&x, &y, all));
/// assert!(compare(&x, &y, (field!(Foo, a), field!(Foo, b), field!(Foo, c))));
/// ```
///
/// Only `Pod` types can be compared:
///
/// ```compile_fail
/// use pod_compare::{compare, field};
///
/// struct Owned {
///     name: String,
/// }
///
/// let a = Owned { name: String::new() };
/// compare(&a, &a, (field!(Owned, name),));
/// ```
///
/// Every selector must belong to the compared type:
///
/// ```compile_fail
/// use pod_compare::{compare, field, Pod};
///
/// #[derive(Clone, Copy, Pod)]
/// struct A { x: u8 }
/// #[derive(Clone, Copy, Pod)]
/// struct B { x: u8 }
///
/// let a = A { x: 0 };
/// compare(&a, &a, (field!(B, x),));
/// ```
///
/// And every selected field needs an equality relation:
///
/// ```compile_fail
/// use pod_compare::{compare, field, Pod};
///
/// #[derive(Clone, Copy, Pod)]
/// struct Opaque(u8);
///
/// #[derive(Clone, Copy, Pod)]
/// struct Outer { inner: Opaque }
///
/// let a = Outer { inner: Opaque(0) };
/// compare(&a, &a, (field!(Outer, inner),));
/// ```
#[inline]
pub fn compare<T, S>(lhs: &T, rhs: &T, selectors: S) -> bool
where
    T: Pod,
    S: Selectors<T>,
{
    selectors.all_match(lhs, rhs)
}

/// Same comparison as [`compare`], but tells which selector differed.
///
/// ```
/// use pod_compare::{explain, field, Pod};
///
/// #[derive(Clone, Copy, Pod)]
/// struct Point { x: i32, y: i32 }
///
/// let a = Point { x: 0, y: 0 };
/// let b = Point { x: 0, y: 5 };
///
/// let err = explain(&a, &b, (field!(Point, x), field!(Point, y))).unwrap_err();
/// assert_eq!(err.index(), 1);
/// assert_eq!(err.count(), 2);
/// ```
pub fn explain<T, S>(lhs: &T, rhs: &T, selectors: S) -> Result<(), Mismatch>
where
    T: Pod,
    S: Selectors<T>,
{
    match selectors.first_mismatch(lhs, rhs) {
        None => Ok(()),
        Some(index) => {
            let mismatch = Mismatch { index, count: S::LEN };
            trace_mismatch::<T>(&mismatch);
            Err(mismatch)
        }
    }
}

/// The first selector, by position in its list, whose fields differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("selector {index} of {count} differs")]
pub struct Mismatch {
    index: usize,
    count: usize,
}

impl Mismatch {
    /// Zero-based position of the differing selector.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of selectors in the list that was compared.
    pub fn count(&self) -> usize {
        self.count
    }
}

cfg_if! {
    if #[cfg(feature = "tracing")] {
        fn trace_mismatch<T>(mismatch: &Mismatch) {
            tracing::debug!(
                ty = std::any::type_name::<T>(),
                index = mismatch.index,
                count = mismatch.count,
                "selected field differs"
            );
        }
    } else {
        #[inline]
        fn trace_mismatch<T>(_: &Mismatch) {}
    }
}

#[cfg(test)]
mod tests {
    use super::{compare, explain};
    use crate::field::Field;
    use crate::pod::Pod;

    #[derive(Clone, Copy, Debug)]
    struct Sample {
        id: u64,
        flags: [bool; 3],
        scale: f32,
    }

    unsafe impl Pod for Sample {}

    fn id() -> Field<Sample, u64> {
        Field::new(|s| &s.id)
    }

    fn flags() -> Field<Sample, [bool; 3]> {
        Field::new(|s| &s.flags)
    }

    fn scale() -> Field<Sample, f32> {
        Field::new(|s| &s.scale)
    }

    #[test]
    fn equal_on_selected_fields() {
        let a = Sample { id: 1, flags: [true, false, true], scale: 0.5 };
        let b = Sample { scale: 2.0, ..a };

        assert!(compare(&a, &b, (id(), flags())));
        assert!(!compare(&a, &b, (id(), flags(), scale())));
    }

    #[test]
    fn explain_agrees_with_compare() {
        let a = Sample { id: 1, flags: [true, false, true], scale: 0.5 };
        let mut b = a;
        b.flags[1] = true;

        assert_eq!(explain(&a, &a, (id(), flags(), scale())), Ok(()));

        let err = explain(&a, &b, (id(), flags(), scale())).unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(err.count(), 3);
        assert!(!compare(&a, &b, (id(), flags(), scale())));
    }

    #[test]
    fn nan_is_never_equal() {
        let a = Sample { id: 1, flags: [false; 3], scale: f32::NAN };

        assert!(!compare(&a, &a, (scale(),)));
        assert!(compare(&a, &a, (id(), flags())));
    }

    #[cfg(feature = "use_std")]
    #[test]
    fn mismatch_display() {
        let a = Sample { id: 1, flags: [false; 3], scale: 1.0 };
        let b = Sample { id: 2, ..a };

        let err = explain(&a, &b, [id()]).unwrap_err();
        assert_eq!(err.to_string(), "selector 0 of 1 differs");
    }

    #[cfg(all(feature = "tracing", feature = "use_std"))]
    mod trace {
        use super::{flags, id, scale, Sample};
        use crate::compare::{compare, explain};
        use std::fmt;
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing::span::{Attributes, Id, Record};
        use tracing::{Event, Metadata, Subscriber};

        type Events = Arc<Mutex<Vec<Vec<(&'static str, String)>>>>;

        struct Collect {
            events: Events,
        }

        struct Fields<'a>(&'a mut Vec<(&'static str, String)>);

        impl<'a> Visit for Fields<'a> {
            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                self.0.push((field.name(), format!("{:?}", value)));
            }
        }

        impl Subscriber for Collect {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn new_span(&self, _: &Attributes) -> Id {
                Id::from_u64(1)
            }

            fn record(&self, _: &Id, _: &Record) {}

            fn record_follows_from(&self, _: &Id, _: &Id) {}

            fn event(&self, event: &Event) {
                let mut fields = Vec::new();
                event.record(&mut Fields(&mut fields));
                self.events.lock().unwrap().push(fields);
            }

            fn enter(&self, _: &Id) {}

            fn exit(&self, _: &Id) {}
        }

        fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
            fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
        }

        #[test]
        fn explain_emits_one_event() {
            let events = Events::default();
            let collect = Collect { events: events.clone() };

            let a = Sample { id: 1, flags: [false; 3], scale: 1.0 };
            let b = Sample { scale: 2.0, ..a };

            tracing::subscriber::with_default(collect, || {
                assert!(!compare(&a, &b, (id(), flags(), scale())));
                assert!(explain(&a, &a, (id(), flags(), scale())).is_ok());
                assert!(events.lock().unwrap().is_empty());

                assert!(explain(&a, &b, (id(), flags(), scale())).is_err());
            });

            let events = events.lock().unwrap();
            assert_eq!(events.len(), 1);
            assert_eq!(field(&events[0], "index"), Some("2"));
            assert_eq!(field(&events[0], "count"), Some("3"));
            assert!(field(&events[0], "ty").unwrap().contains("Sample"));
        }
    }
}
