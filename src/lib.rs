//! Structural equality for plain-old-data types.
//!
//! Instead of writing one comparison per field, list the fields that make up
//! a value's identity and let [`compare`] check them in order:
//!
//! ```
//! use pod_compare::{field, Pod, PodEq};
//!
//! #[derive(Clone, Copy, Debug, Pod, PodEq)]
//! struct Foo {
//!     a: i16,
//!     b: u32,
//!     c: [u8; 8],
//!     d: [u16; 4],
//!     #[pod_eq(skip)]
//!     seen: u64,
//! }
//!
//! let x = Foo { a: 1, b: 1, c: [1, 0, 0, 0, 0, 0, 0, 0], d: [1, 0, 0, 0], seen: 0 };
//! let y = Foo { seen: 7, ..x };
//! assert_eq!(x, y);
//!
//! let only_a = (field!(Foo, a),);
//! assert!(pod_compare::compare(&x, &Foo { d: [0; 4], ..x }, only_a));
//! ```
//!
//! Every check happens at compile time: the compared type must be [`Pod`],
//! each selector must belong to it and each selected field must implement
//! `PartialEq`.
#![cfg_attr(not(feature = "use_std"), no_std)]

#[macro_use]
extern crate cfg_if;

#[cfg(not(feature = "use_std"))]
extern crate core as std;

mod macros;

pub mod compare;
pub mod field;
pub mod pod;
pub mod select;

pub use compare::{compare, explain, Mismatch};
pub use field::Field;
pub use pod::Pod;
pub use select::{Selector, Selectors};

#[cfg(feature = "derive")]
pub use pod_compare_derive::{Pod, PodEq};
