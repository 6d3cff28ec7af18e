//! Procedural macros for the advent-harness library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering puzzles with the plugin system
///
/// Generates an `inventory` submission so the puzzle can be discovered by
/// `RegistryBuilder::register_all_plugins()` without being named anywhere.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["easy", "grid"])
///
/// # Requirements
///
/// The type must implement the `Puzzle` trait. If the trait is not
/// implemented, you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourPuzzle: Puzzle` is not satisfied
///   |
///   | struct YourPuzzle;
///   |        ^^^^^^^^^^ unsatisfied trait bound
///   |
/// help: the trait `Puzzle` is not implemented for `YourPuzzle`
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_harness::Puzzle;
/// use advent_harness_macros::AutoRegisterPuzzle;
///
/// #[derive(AutoRegisterPuzzle)]
/// #[puzzle(year = 2024, day = 1, tags = ["easy", "parsing"])]
/// struct Day1;
///
/// impl Puzzle for Day1 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterPuzzle, attributes(puzzle))]
pub fn derive_auto_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Extract the struct name
    let name = &input.ident;

    // Find the #[puzzle(...)] attribute
    let puzzle_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegisterPuzzle derive macro requires #[puzzle(...)] attribute");

    // Parse the attribute arguments
    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    // Parse nested meta items
    puzzle_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?; // Consume the '='
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    // Skip comma if present
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[puzzle(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    // Generate the tags array
    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    // Generate the code with a compile-time trait bound check
    let expanded = quote! {
        // Compile-time check that the type implements the Puzzle trait
        // This generates a helpful error message if the trait is not implemented
        const _: () = {
            // Custom trait to provide a better error message
            trait MustImplementPuzzle: ::advent_harness::Puzzle {}
            impl MustImplementPuzzle for #name {}
        };

        ::advent_harness::inventory::submit! {
            ::advent_harness::PuzzlePlugin {
                year: #year,
                day: #day,
                puzzle: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
