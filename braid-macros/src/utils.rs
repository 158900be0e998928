use heck::ToUpperCamelCase;
use quote::format_ident;
use syn::Ident;

/// Extension trait for `Ident` to simplify common naming transformations.
pub(crate) trait IdentExt {
    /// Returns a new identifier in `UpperCamelCase`.
    fn upper_camel_case(&self) -> Ident;
}

impl IdentExt for Ident {
    fn upper_camel_case(&self) -> Ident {
        let name = self.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);
        format_ident!("{}", name.to_upper_camel_case())
    }
}
