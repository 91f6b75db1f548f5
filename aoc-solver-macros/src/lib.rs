//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro that implements `Solver` by dispatching to `PartSolver<N>`
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts; `PartSolver<1>` through
///   `PartSolver<max_parts>` must all be implemented.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day5;
///
/// impl AocParser for Day5 { /* ... */ }
/// impl PartSolver<1> for Day5 { /* ... */ }
/// impl PartSolver<2> for Day5 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
    else {
        return syn::Error::new_spanned(
            name,
            "AocSolver derive macro requires #[aoc_solver(max_parts = N)]",
        )
        .to_compile_error()
        .into();
    };

    let mut max_parts: Option<u8> = None;
    let parsed = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: syn::LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    });
    if let Err(e) = parsed {
        return e.to_compile_error().into();
    }

    let max_parts = match max_parts {
        Some(n) if n >= 1 => n,
        _ => {
            return syn::Error::new_spanned(attr, "max_parts must be at least 1")
                .to_compile_error()
                .into();
        }
    };

    let arms = (1..=max_parts).map(|part| {
        let lit = syn::LitInt::new(&part.to_string(), Span::call_site());
        quote! {
            #lit => <Self as ::aoc_solver::PartSolver<#lit>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Submits a `SolverPlugin` through `inventory`, so
/// `RegistryBuilder::register_all_plugins` finds the solver without any
/// manual wiring.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["ranges"])
///
/// The type must be a unit struct implementing `Solver`; otherwise the
/// generated trait-bound check fails to compile.
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Some(aoc_attr) = input.attrs.iter().find(|attr| attr.path().is_ident("aoc")) else {
        return syn::Error::new_spanned(
            name,
            "AutoRegisterSolver derive macro requires #[aoc(year = .., day = ..)]",
        )
        .to_compile_error()
        .into();
    };

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    let parsed = aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: syn::LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: syn::LitInt = meta.value()?.parse()?;
            day = Some(value.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                if let Lit::Str(lit_str) = content.parse()? {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute, expected year, day or tags"));
        }
        Ok(())
    });
    if let Err(e) = parsed {
        return e.to_compile_error().into();
    }

    let (Some(year), Some(day)) = (year, day) else {
        return syn::Error::new_spanned(aoc_attr, "#[aoc(...)] requires both `year` and `day`")
            .to_compile_error()
            .into();
    };
    if !(1..=25).contains(&day) {
        return syn::Error::new_spanned(aoc_attr, "day must be in 1..=25")
            .to_compile_error()
            .into();
    }

    let tag_strs = tags.iter().map(String::as_str);

    let expanded = quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    };

    TokenStream::from(expanded)
}
