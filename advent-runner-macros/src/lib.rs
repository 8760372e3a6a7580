//! Procedural macros for the advent-runner library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derive macro for registering a solution with the plugin system
///
/// Generates an `inventory::submit!` of an `advent_runner::SolutionPlugin` so
/// the solution is found by `RegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The event year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `name`: Optional. The solution file name without extension, defaults to `"solution"`
///
/// # Requirements
///
/// The type must be a unit struct implementing `Solution`. Otherwise you get a
/// compile-time error pointing at the type:
///
/// ```text
/// error[E0277]: the trait bound `YourSolution: Solution` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_runner::{AutoRegisterSolution, Solution};
///
/// #[derive(AutoRegisterSolution)]
/// #[solution(year = 2023, day = 1, name = "solution2")]
/// struct Day1Faster;
///
/// impl Solution for Day1Faster {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolution, attributes(solution))]
pub fn derive_auto_register_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("solution"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolution requires a #[solution(year = .., day = ..)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut solution_name: Option<String> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            let parsed: u8 = value.base10_parse()?;
            if !(1..=25).contains(&parsed) {
                return Err(syn::Error::new_spanned(value, "day must be in 1..=25"));
            }
            day = Some(parsed);
        } else if meta.path.is_ident("name") {
            let value: LitStr = meta.value()?.parse()?;
            solution_name = Some(value.value());
        } else {
            return Err(meta.error("expected `year`, `day` or `name`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;
    let solution_name = solution_name.unwrap_or_else(|| "solution".to_string());

    Ok(quote! {
        const _: () = {
            trait MustImplementSolution: ::advent_runner::Solution {}
            impl MustImplementSolution for #name {}
        };

        ::advent_runner::inventory::submit! {
            ::advent_runner::SolutionPlugin {
                year: #year,
                day: #day,
                name: #solution_name,
                solution: &#name,
            }
        }
    })
}
