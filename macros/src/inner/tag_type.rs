use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;
use syn::parse::{Parse, ParseStream};

pub struct TagInput {
    pub name: String,
}

impl Parse for TagInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(syn::LitStr) {
            input.parse::<syn::LitStr>()?.value()
        } else {
            // Bare identifier form: tag!(name)
            input.parse::<Ident>()?.to_string()
        };
        Ok(TagInput { name })
    }
}

pub fn expand_tag(input: TagInput) -> TokenStream {
    build_tag_type(&input.name.chars().collect::<Vec<_>>())
}

fn build_tag_type(chars: &[char]) -> TokenStream {
    match chars.split_first() {
        None => quote! { ::tagmap::tag::TNil },
        Some((head, rest)) => {
            let chr = chr_type(*head);
            let tail = build_tag_type(rest);
            quote! { ::tagmap::tag::TCons<#chr, #tail> }
        }
    }
}

/// One Unicode scalar as six type-level nibbles, most significant first.
fn chr_type(c: char) -> TokenStream {
    let code = c as u32;
    let nibbles = (0..6).rev().map(|shift| {
        let nibble = ((code >> (shift * 4)) & 0xF) as u8;
        let ident = nibble_ident(nibble);
        quote! { ::tagmap::primitives::nibble::#ident }
    });
    quote! { ::tagmap::primitives::chr::Chr<#(#nibbles),*> }
}

fn nibble_ident(n: u8) -> Ident {
    format_ident!("X{:X}", n)
}
