use proc_macro::TokenStream;
use quote::quote;
use repr::Repr;
use syn::{Data, DeriveInput, Type};

mod repr;

/// Derives `cinnabar_common::FlatCopy` for a `#[repr(C)]` or
/// `#[repr(transparent)]` struct.
///
/// The generated code fails to compile when a field is not `FlatCopy` or when
/// the struct contains padding.
#[proc_macro_derive(FlatCopy)]
pub fn flat_copy(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse(input) {
        Ok(res) => res,
        Err(err) => return err.into_compile_error().into(),
    };

    match emit_flat_copy(&input) {
        Ok(res) => res.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn emit_flat_copy(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FlatCopy cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "FlatCopy cannot be derived for enums: not every bit pattern is a variant",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "FlatCopy cannot be derived for unions",
            ))
        }
    };

    if !Repr::from_attrs(&input.attrs)?.is_fixed() {
        return Err(syn::Error::new_spanned(
            ident,
            "FlatCopy requires #[repr(C)] or #[repr(transparent)]",
        ));
    }

    let field_tys = fields.iter().map(|field| &field.ty).collect::<Vec<&Type>>();

    Ok(quote! {
        const _: () = {
            #(
                ::cinnabar_common::static_assertions::assert_impl_all!(
                    #field_tys: ::cinnabar_common::FlatCopy
                );
            )*
            ::cinnabar_common::static_assertions::const_assert_eq!(
                ::core::mem::size_of::<#ident>(),
                0 #( + ::core::mem::size_of::<#field_tys>() )*
            );
        };

        unsafe impl ::cinnabar_common::FlatCopy for #ident {}
    })
}
