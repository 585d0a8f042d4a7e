//! Defines Tally runtime macros.

extern crate proc_macro;

use proc_macro::TokenStream;

use crate::internals::{runtime_macro, TokioMode};

mod internals;

/// Macro definition for Tally runtime.
///
/// This macro should probably be used once only in a project above your main.
/// It replaces the original tokio [`#[tokio::main]`] which it depends on.
///
/// _Executes the entire function in a blocking thread and waits for every animation (or any task
/// spawned using `task::run`) to be done before returning._
#[proc_macro_attribute]
pub fn runtime(_: TokenStream, item: TokenStream) -> TokenStream {
    runtime_macro(item.into(), TokioMode::Main).into()
}

/// Defines `#[tally_macros::runtime]` test macro.
#[proc_macro_attribute]
pub fn test(_: TokenStream, item: TokenStream) -> TokenStream {
    runtime_macro(item.into(), TokioMode::Test).into()
}
