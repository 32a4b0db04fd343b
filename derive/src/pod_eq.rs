//! `#[derive(PodEq)]` expansion.
//!
//! The generated `eq` is one `pod_compare::compare` call whose selector list
//! holds every field not tagged `#[pod_eq(skip)]`, in declaration order.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Index, Member};

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "PodEq can only be derived for structs",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "PodEq can only be derived for structs",
            ))
        }
    };

    if let Some(attr) = input.attrs.iter().find(|a| a.path().is_ident("pod_eq")) {
        return Err(syn::Error::new_spanned(
            attr,
            "#[pod_eq] goes on fields, not on the struct",
        ));
    }

    let name = &input.ident;
    let mut generics = input.generics.clone();
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let where_clause = generics.make_where_clause();
    where_clause
        .predicates
        .push(parse_quote!(#name #ty_generics: ::pod_compare::Pod));

    let mut selectors = Vec::new();
    for (i, field) in data.fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }

        let ty = &field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::pod_compare::Pod + ::core::cmp::PartialEq));

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        };
        selectors.push(quote! {
            ::pod_compare::Field::<Self, _>::new(|value| &value.#member)
        });
    }

    let (impl_generics, _, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::pod_compare::compare(self, other, (#(#selectors,)*))
            }
        }
    })
}

fn is_skipped(field: &syn::Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("pod_eq") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported pod_eq argument, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}
