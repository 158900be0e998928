mod parse;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::GenericParam;

pub(crate) use parse::{Parsed, ParsedAttr, ParsedItem};

impl Parsed {
    /// Generates the full token stream for the macro expansion.
    pub(crate) fn expand(self) -> TokenStream {
        let item = &self.item;
        let callable_struct = self.generate_struct();
        let callable_impl = self.generate_callable_impl();

        quote! {
            #item
            #callable_struct
            #callable_impl
        }
    }

    /// Generates the unit struct that stands in for the function.
    fn generate_struct(&self) -> TokenStream {
        let Self {
            name, vis, docs, ..
        } = self;

        quote! {
            #(#docs)*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            #vis struct #name;
        }
    }

    /// Generates the `Callable` implementation, forwarding to the function.
    ///
    /// Type and const parameters are passed explicitly so the call resolves
    /// to the same instantiation the impl was chosen for. Lifetimes are left
    /// to inference.
    fn generate_callable_impl(&self) -> TokenStream {
        let name = &self.name;
        let fn_name = &self.item.sig.ident;
        let (impl_generics, _ty_generics, where_clause) = self.generics.split_for_impl();

        let arg_types = &self.arg_types;
        let arg_names: Vec<_> = (0..arg_types.len())
            .map(|index| format_ident!("arg{index}"))
            .collect();

        let output = match &self.output {
            Some(ty) => quote! { #ty },
            None => quote! { () },
        };

        let generic_args: Vec<_> = self
            .generics
            .params
            .iter()
            .filter_map(|param| match param {
                GenericParam::Type(param) => Some(&param.ident),
                GenericParam::Const(param) => Some(&param.ident),
                GenericParam::Lifetime(_) => None,
            })
            .collect();

        let turbofish = if generic_args.is_empty() {
            quote! {}
        } else {
            quote! { ::<#(#generic_args),*> }
        };

        quote! {
            impl #impl_generics ::braid_core::Callable<(#(#arg_types,)*)> for #name #where_clause {
                type Output = #output;

                fn call(&self, (#(#arg_names,)*): (#(#arg_types,)*)) -> Self::Output {
                    #fn_name #turbofish (#(#arg_names),*)
                }
            }
        }
    }
}
