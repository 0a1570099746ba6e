//! Implementation of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`, arity taken from the parameter list
//! 2. Function name + arity form: `curry!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! For a closure `|a: i32, b: i32, c: i32| body`, the macro generates:
//!
//! ```text
//! {
//!     let __arity_function = |a: i32, b: i32, c: i32| body;
//!     move |__arity_argument_0: i32| {
//!         move |__arity_argument_1: i32| {
//!             move |__arity_argument_2: i32| {
//!                 __arity_function(__arity_argument_0, __arity_argument_1, __arity_argument_2)
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Each stage moves the function and the arguments bound so far into the next
//! stage. A stage can be called again only when everything it captured is
//! `Copy`; otherwise it is consumed by its first call.
//!
//! Arity 0 and 1 are already curried, so the input is emitted unchanged.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Pat, Token, Type, spanned::Spanned};

enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    TokenStream::from(expand(input.into()))
}

fn expand(input: TokenStream2) -> TokenStream2 {
    match parse_curry_input(input) {
        Ok(CurryInput::Closure(closure)) => generate_curry_from_closure(&closure),
        Ok(CurryInput::FunctionWithArity { function, arity }) => {
            let parameter_types = vec![None; arity];
            generate_nested_closures(&parameter_types, quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    }
}

fn parse_curry_input(input: TokenStream2) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> = syn::parse::Parser::parse2(parser, input)?;

    let mut iterator = expressions.into_iter();
    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(expression), None, None) => parse_single_expression(expression),
        (Some(first), Some(second), None) => parse_function_with_arity(first, second),
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<CurryInput> {
    match expression {
        Expr::Closure(closure) => Ok(CurryInput::Closure(closure)),
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "curry! with function name requires arity: curry!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_function_with_arity(first: Expr, second: Expr) -> syn::Result<CurryInput> {
    let function = match first {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match second {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curry! expected an integer literal for arity",
            ));
        }
    };

    Ok(CurryInput::FunctionWithArity { function, arity })
}

fn generate_curry_from_closure(closure: &ExprClosure) -> TokenStream2 {
    let parameter_types: Vec<Option<Type>> = closure
        .inputs
        .iter()
        .map(|input| match input {
            Pat::Type(typed) => Some((*typed.ty).clone()),
            _ => None,
        })
        .collect();

    generate_nested_closures(&parameter_types, quote! { #closure })
}

fn generate_nested_closures(
    parameter_types: &[Option<Type>],
    function_expression: TokenStream2,
) -> TokenStream2 {
    if parameter_types.len() < 2 {
        return function_expression;
    }

    let argument_identifiers: Vec<_> = (0..parameter_types.len())
        .map(|index| format_ident!("__arity_argument_{}", index))
        .collect();

    let function_call = quote! { __arity_function(#(#argument_identifiers),*) };

    let closure_chain = argument_identifiers
        .iter()
        .zip(parameter_types)
        .rev()
        .fold(function_call, |body, (identifier, parameter_type)| {
            match parameter_type {
                Some(parameter_type) => quote! { move |#identifier: #parameter_type| { #body } },
                None => quote! { move |#identifier| { #body } },
            }
        });

    quote! {
        {
            let __arity_function = #function_expression;
            #closure_chain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand_to_string(input: TokenStream2) -> String {
        expand(input).to_string()
    }

    fn count_stages(expanded: &str) -> usize {
        expanded.matches("move |").count()
    }

    #[rstest]
    fn closure_form_nests_one_stage_per_parameter() {
        let expanded = expand_to_string(quote! { |a: i32, b: i32, c: i32| a + b + c });
        assert_eq!(count_stages(&expanded), 3);
        assert!(expanded.contains("__arity_argument_2 : i32"));
        assert!(syn::parse_str::<Expr>(&expanded).is_ok());
    }

    #[rstest]
    fn function_form_uses_the_given_arity() {
        let expanded = expand_to_string(quote! { add, 4 });
        assert_eq!(count_stages(&expanded), 4);
        assert!(expanded.contains("let __arity_function = add"));
    }

    #[rstest]
    #[case(quote! { |value: i32| value + 1 })]
    #[case(quote! { || 42 })]
    fn short_closures_are_returned_unchanged(#[case] input: TokenStream2) {
        let expanded = expand_to_string(input);
        assert_eq!(count_stages(&expanded), 0);
        assert!(!expanded.contains("__arity_function"));
        assert!(syn::parse_str::<ExprClosure>(&expanded).is_ok());
    }

    #[rstest]
    fn unary_function_form_is_the_function() {
        assert_eq!(expand_to_string(quote! { negate, 1 }), "negate");
    }

    #[rstest]
    #[case(quote! { add }, "requires arity")]
    #[case(quote! { add, "two" }, "integer literal")]
    #[case(quote! { 1 + 2 }, "closure or function name")]
    #[case(quote! { a, 2, 3 }, "closure or function name")]
    fn malformed_input_is_a_compile_error(#[case] input: TokenStream2, #[case] message: &str) {
        let expanded = expand_to_string(input);
        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains(message));
    }
}
