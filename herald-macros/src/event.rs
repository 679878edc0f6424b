//! `#[derive(Event)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, Index, LitStr, Member, Token, Type, parenthesized,
    parse::Parse, punctuated::Punctuated,
};

/// Container-level `#[event(...)]` arguments.
#[derive(Default)]
struct EventArgs {
    name: Option<LitStr>,
    extends: Vec<Type>,
}

impl EventArgs {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = EventArgs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("event")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    args.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("extends") {
                    let content;
                    parenthesized!(content in meta.input);
                    let listed: Punctuated<Type, Token![,]> =
                        content.parse_terminated(Type::parse, Token![,])?;
                    args.extends.extend(listed);
                    Ok(())
                } else {
                    let path = &meta.path;
                    Err(meta.error(format!("unknown attribute: {}", quote!(#path))))
                }
            })?;
        }
        Ok(args)
    }
}

/// The field holding the direct parent event.
struct Parent {
    member: Member,
    ty: Type,
}

fn is_parent_field(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut parent = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("event")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("parent") {
                parent = true;
                Ok(())
            } else {
                Err(meta.error("unknown field attribute, expected `parent`"))
            }
        })?;
    }
    Ok(parent)
}

fn find_parent(input: &DeriveInput) -> syn::Result<Option<Parent>> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => return Ok(None),
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "unions cannot be event kinds",
            ));
        }
    };

    let mut found: Option<Parent> = None;
    let members: Vec<(Member, &syn::Field)> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|f| f.ident.clone().map(|ident| (Member::Named(ident), f)))
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, f)| (Member::Unnamed(Index::from(i)), f))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    for (member, field) in members {
        if !is_parent_field(&field.attrs)? {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "only one field can be marked `#[event(parent)]`",
            ));
        }
        found = Some(Parent {
            member,
            ty: field.ty.clone(),
        });
    }
    Ok(found)
}

/// Implementation of `#[derive(Event)]`.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "generic event kinds are not supported",
        ));
    }

    let args = EventArgs::from_attrs(&input.attrs)?;
    let parent = find_parent(input)?;

    let kind_name = match &args.name {
        Some(lit) => quote! { #lit },
        None => quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#name)) },
    };

    let ancestors = args.extends.iter().rev().fold(
        quote! { ::herald::HNil },
        |tail, ty| quote! { ::herald::HCons<#ty, #tail> },
    );

    let derives = match (&parent, args.extends.split_first()) {
        (None, None) => quote! {},
        (Some(parent), None) => {
            return Err(syn::Error::new_spanned(
                &parent.ty,
                "`#[event(parent)]` requires `#[event(extends(...))]` on the type",
            ));
        }
        (None, Some(_)) => {
            return Err(syn::Error::new_spanned(
                name,
                "`#[event(extends(...))]` requires a field marked `#[event(parent)]`",
            ));
        }
        (Some(Parent { member, ty: parent_ty }), Some((direct, further))) => {
            let further = further.iter().map(|ancestor| {
                quote! {
                    impl ::herald::Derives<#ancestor> for #name {
                        fn upcast(&self) -> #ancestor {
                            <#parent_ty as ::herald::Derives<#ancestor>>::upcast(&self.#member)
                        }
                    }
                }
            });
            quote! {
                impl ::herald::Derives<#direct> for #name {
                    fn upcast(&self) -> #direct {
                        ::core::clone::Clone::clone(&self.#member)
                    }
                }

                #(#further)*
            }
        }
    };

    Ok(quote! {
        impl ::herald::Event for #name {
            const NAME: &'static str = #kind_name;
            type Ancestors = #ancestors;
        }

        #derives
    })
}
