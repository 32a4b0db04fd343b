//! Derive macros for `pod_compare`.
//!
//! - `#[derive(Pod)]` marks a type as plain old data after checking that
//!   every field is `Pod`.
//! - `#[derive(PodEq)]` implements `PartialEq` with a single
//!   `pod_compare::compare` call over the struct's fields. Fields tagged
//!   `#[pod_eq(skip)]` are left out of equality.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod pod;
mod pod_eq;

/// Implement `pod_compare::Pod` for a struct or a fieldless enum.
///
/// ```ignore
/// #[derive(Clone, Copy, Pod)]
/// struct Header {
///     kind: u8,
///     tag: [u8; 4],
/// }
/// ```
///
/// Generates `unsafe impl Pod for Header where u8: Pod, [u8; 4]: Pod {}`.
#[proc_macro_derive(Pod)]
pub fn derive_pod(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    pod::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Implement `PartialEq` by comparing the struct's fields in declaration order.
///
/// ```ignore
/// #[derive(Clone, Copy, Pod, PodEq)]
/// struct Sample {
///     id: u32,
///     raw: [u16; 4],
///     #[pod_eq(skip)]
///     seen_at: u64,
/// }
/// ```
#[proc_macro_derive(PodEq, attributes(pod_eq))]
pub fn derive_pod_eq(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    pod_eq::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
