use std::collections::HashSet;

use proc_macro2::Span;
use syn::{
    Attribute, Error, FnArg, GenericParam, Generics, Ident, ItemFn, Lifetime, Result, ReturnType,
    Type, TypeImplTrait, TypeReference, Visibility,
    parse::{Parse, ParseStream},
    visit::{self, Visit},
};

use crate::utils::IdentExt;

/// Represents the fully parsed macro input.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub(crate) name: Ident,
    pub(crate) vis: Visibility,
    pub(crate) docs: Vec<Attribute>,
    pub(crate) generics: Generics,
    pub(crate) arg_types: Vec<Type>,
    pub(crate) output: Option<Type>,
    pub(crate) item: ItemFn,
}

impl Parsed {
    pub(crate) fn new(parsed_attr: ParsedAttr, parsed_item: ParsedItem) -> Result<Self> {
        let ParsedItem {
            arg_types,
            output,
            item,
        } = parsed_item;

        let fn_name = &item.sig.ident;
        let name = parsed_attr
            .name
            .unwrap_or_else(|| fn_name.upper_camel_case());

        if name == *fn_name {
            return Err(Error::new_spanned(
                fn_name,
                "The generated struct would share the function's name. Pass a different name (e.g., `#[callable(MyCallable)]`).",
            ));
        }

        let docs = item
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("doc"))
            .cloned()
            .collect();

        Ok(Self {
            name,
            vis: item.vis.clone(),
            docs,
            generics: item.sig.generics.clone(),
            arg_types,
            output,
            item,
        })
    }
}

/// Represents the parsed `#[callable]` or `#[callable(MyCallable)]` attribute.
#[derive(Debug)]
pub(crate) struct ParsedAttr {
    name: Option<Ident>,
}

impl Parse for ParsedAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self { name: None });
        }

        let name = input.parse()?;
        if !input.is_empty() {
            return Err(Error::new(
                input.span(),
                "Expected at most one name for the callable (e.g., `#[callable(MyCallable)]`).",
            ));
        }

        Ok(Self { name: Some(name) })
    }
}

/// Represents the parsed function the attribute is applied to.
#[derive(Debug)]
pub(crate) struct ParsedItem {
    arg_types: Vec<Type>,
    output: Option<Type>,
    item: ItemFn,
}

impl Parse for ParsedItem {
    fn parse(input: ParseStream) -> Result<Self> {
        let item: ItemFn = input.parse()?;
        let sig = &item.sig;

        if let Some(asyncness) = sig.asyncness {
            return Err(Error::new_spanned(
                asyncness,
                "Async functions are not supported.",
            ));
        }

        if let Some(unsafety) = sig.unsafety {
            return Err(Error::new_spanned(
                unsafety,
                "Unsafe functions are not supported.",
            ));
        }

        if let Some(variadic) = &sig.variadic {
            return Err(Error::new_spanned(
                variadic,
                "Variadic functions are not supported.",
            ));
        }

        let arg_types = sig
            .inputs
            .iter()
            .map(|arg| match arg {
                FnArg::Receiver(receiver) => Err(Error::new_spanned(
                    receiver,
                    "Methods are not supported. Apply the attribute to a free function.",
                )),
                FnArg::Typed(pat_type) => Ok((*pat_type.ty).clone()),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut inputs = TypeScan::default();
        for ty in &arg_types {
            inputs.visit_type(ty);
        }
        if let Some(impl_trait) = inputs.impl_trait {
            return Err(Error::new(
                impl_trait,
                "`impl Trait` parameters are not supported. Use a named generic parameter instead.",
            ));
        }

        let output = match &sig.output {
            ReturnType::Default => None,
            ReturnType::Type(_, ty) => Some((**ty).clone()),
        };

        if let Some(ty) = &output {
            let mut scan = TypeScan::default();
            scan.visit_type(ty);
            if let Some(impl_trait) = scan.impl_trait {
                return Err(Error::new(
                    impl_trait,
                    "`impl Trait` return types are not supported. Return a concrete type instead.",
                ));
            }
            if let Some(elided) = scan.elided_lifetime {
                return Err(Error::new(
                    elided,
                    "Elided lifetimes in the return type are not supported. Name the lifetime as a generic parameter.",
                ));
            }
        }

        for param in &sig.generics.params {
            let ident = match param {
                GenericParam::Type(param) => &param.ident,
                GenericParam::Const(param) => &param.ident,
                GenericParam::Lifetime(_) => continue,
            };
            if !inputs.idents.contains(ident) {
                return Err(Error::new_spanned(
                    ident,
                    format!("Generic parameter `{ident}` must appear in a parameter type."),
                ));
            }
        }

        Ok(Self {
            arg_types,
            output,
            item,
        })
    }
}

/// Collects what the expansion needs to know about a type.
#[derive(Default)]
struct TypeScan {
    idents: HashSet<Ident>,
    impl_trait: Option<Span>,
    elided_lifetime: Option<Span>,
}

impl<'ast> Visit<'ast> for TypeScan {
    fn visit_ident(&mut self, ident: &'ast Ident) {
        self.idents.insert(ident.clone());
    }

    fn visit_type_impl_trait(&mut self, impl_trait: &'ast TypeImplTrait) {
        self.impl_trait.get_or_insert(impl_trait.impl_token.span);
        visit::visit_type_impl_trait(self, impl_trait);
    }

    fn visit_type_reference(&mut self, reference: &'ast TypeReference) {
        if reference.lifetime.is_none() {
            self.elided_lifetime.get_or_insert(reference.and_token.spans[0]);
        }
        visit::visit_type_reference(self, reference);
    }

    fn visit_lifetime(&mut self, lifetime: &'ast Lifetime) {
        if lifetime.ident == "_" {
            self.elided_lifetime.get_or_insert(lifetime.apostrophe);
        }
    }
}
