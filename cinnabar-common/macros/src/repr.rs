use syn::{parenthesized, Attribute, LitInt};

/// The layout-relevant parts of a `#[repr(...)]` list.
#[derive(Default)]
pub struct Repr {
    pub c: bool,
    pub transparent: bool,
}

impl Repr {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut repr = Repr::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("C") {
                    repr.c = true;
                } else if meta.path.is_ident("transparent") {
                    repr.transparent = true;
                } else if meta.path.is_ident("packed") || meta.path.is_ident("align") {
                    if meta.input.peek(syn::token::Paren) {
                        let content;
                        parenthesized!(content in meta.input);
                        content.parse::<LitInt>()?;
                    }
                }
                Ok(())
            })?;
        }

        Ok(repr)
    }

    /// Whether field order and offsets are fixed by the language.
    pub fn is_fixed(&self) -> bool {
        self.c || self.transparent
    }
}
