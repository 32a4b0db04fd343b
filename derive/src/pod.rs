//! `#[derive(Pod)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields};

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let field_types: Vec<syn::Type> = match &input.data {
        Data::Struct(data) => data.fields.iter().map(|f| f.ty.clone()).collect(),
        Data::Enum(data) => {
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(syn::Error::new_spanned(
                        variant,
                        "Pod can only be derived for enums without variant data",
                    ));
                }
            }
            Vec::new()
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Pod cannot be derived for unions",
            ))
        }
    };

    let name = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::pod_compare::Pod));
    }
    {
        let where_clause = generics.make_where_clause();
        for ty in &field_types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::pod_compare::Pod));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        unsafe impl #impl_generics ::pod_compare::Pod for #name #ty_generics #where_clause {}
    })
}
