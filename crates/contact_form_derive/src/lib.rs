use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `FormModel` for a struct of text fields.
///
/// Generates a `<Model>Field` enum with one variant per named field, in
/// declaration order. Every field must implement `AsRef<str>` and
/// `From<String>`.
#[proc_macro_derive(FormModel)]
pub fn derive_form_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            input.ident,
            "FormModel derive currently supports only non-generic structs",
        )
        .to_compile_error()
        .into();
    }

    let vis = input.vis;
    let model_ident = input.ident;
    let field_enum_ident = format_ident!("{model_ident}Field");

    let named_fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return syn::Error::new(
                    Span::call_site(),
                    "FormModel derive requires a struct with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(
                Span::call_site(),
                "FormModel derive is only supported on structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let krate = contact_form_path();
    let mut variants = Vec::new();
    let mut names = Vec::new();
    let mut parse_arms = Vec::new();
    let mut getters = Vec::new();
    let mut setters = Vec::new();

    for field in named_fields {
        let Some(field_ident) = field.ident else {
            continue;
        };
        let field_name = field_ident.to_string();
        let variant = format_ident!("{}", to_pascal_case(&field_name));

        names.push(quote! {
            #field_enum_ident::#variant => #field_name
        });
        parse_arms.push(quote! {
            #field_name => ::core::result::Result::Ok(#field_enum_ident::#variant),
        });
        getters.push(quote! {
            #field_enum_ident::#variant => ::core::convert::AsRef::<str>::as_ref(&self.#field_ident)
        });
        setters.push(quote! {
            #field_enum_ident::#variant => {
                self.#field_ident = ::core::convert::From::from(value);
            }
        });
        variants.push(variant);
    }

    let count = variants.len();

    quote! {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #vis enum #field_enum_ident {
            #(#variants,)*
        }

        impl #field_enum_ident {
            pub const ALL: [Self; #count] = [#(#field_enum_ident::#variants),*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    #(#names,)*
                }
            }
        }

        impl ::core::fmt::Display for #field_enum_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for #field_enum_ident {
            type Err = #krate::form::FormError;

            fn from_str(value: &str) -> ::core::result::Result<Self, Self::Err> {
                match value {
                    #(#parse_arms)*
                    other => ::core::result::Result::Err(
                        #krate::form::FormError::UnknownField(other.to_string()),
                    ),
                }
            }
        }

        impl #krate::form::FormModel for #model_ident {
            type Field = #field_enum_ident;

            fn fields() -> &'static [Self::Field] {
                &#field_enum_ident::ALL
            }

            fn get(&self, field: Self::Field) -> &str {
                match field {
                    #(#getters,)*
                }
            }

            fn set(&mut self, field: Self::Field, value: ::std::string::String) {
                match field {
                    #(#setters)*
                }
            }
        }
    }
    .into()
}

fn contact_form_path() -> TokenStream2 {
    match crate_name("contact_form") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::contact_form),
    }
}

fn to_pascal_case(input: &str) -> String {
    let mut out = String::new();
    for segment in input.split('_') {
        if segment.is_empty() {
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
