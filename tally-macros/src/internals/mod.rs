use proc_macro2::TokenStream;
use quote::quote;
use syn::{ItemFn, ReturnType, Signature, Stmt};

pub enum TokioMode {
    Main,
    Test,
}

/// See `#[tally_macros::runtime]` for details in [`tally-macros`] crate.
///
/// Works on proc_macro2 TokenStream so the expansion can be compared in unit tests.
pub fn runtime_macro(item: TokenStream, tokio: TokioMode) -> TokenStream {
    let tally = quote!(::tally);

    let input: ItemFn = match syn::parse2(item) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    // The generated function blocks on its own runtime: it is not async anymore.
    let sync_sig = Signature {
        asyncness: None,
        ..sig
    };

    let mut stmts = block.stmts;

    let has_return_type = match &sync_sig.output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => {
            !matches!(&**ty, syn::Type::Tuple(tuple) if tuple.elems.is_empty())
        }
    };

    // The trailing expression is the return value: it must come after the wait loop.
    let return_expr = if has_return_type {
        match stmts.pop() {
            Some(Stmt::Expr(expr, None)) => Some(expr),
            Some(stmt) => {
                stmts.push(stmt);
                None
            }
            None => None,
        }
    } else {
        None
    };

    let test_attr = match tokio {
        TokioMode::Main => quote! {},
        TokioMode::Test => quote! {#[test]},
    };

    let tokio_runtime = match tokio {
        TokioMode::Main => quote! {
            let rt = #tally::utils::tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap();
        },
        TokioMode::Test => quote! {
            let rt = #tally::utils::tokio::runtime::Runtime::new().unwrap();
        },
    };

    let mut body = vec![quote! {
        #tally::utils::task::init_task_channel().await;
    }];

    // A bare `()` expression would be emitted before the wait loop: drop it.
    body.extend(stmts.into_iter().map(|stmt| match stmt {
        Stmt::Expr(ref exp, _) => match exp {
            syn::Expr::Tuple(tuple) if tuple.elems.is_empty() => quote!(),
            _ => quote! { #stmt },
        },
        _ => quote! { #stmt },
    }));

    body.push(quote! {
        let cell = #tally::utils::task::RUNTIME_RX.get().ok_or(#tally::errors::RuntimeError).unwrap();
        let mut lock = cell.lock();
        let receiver = lock.as_mut().ok_or(#tally::errors::RuntimeError).unwrap();

        // Wait for all dynamically spawned tasks to complete, logging their outcome.
        while !receiver.is_empty() {
            if let Some(mut task_receiver) = receiver.recv().await {
                #tally::utils::task::report(task_receiver.recv().await);
            }
        }
    });

    if let Some(return_stmt) = return_expr {
        body.push(quote! { #return_stmt });
    }

    quote! {
        #test_attr
        #(#attrs)*
        #vis #sync_sig {
            #tokio_runtime
            rt.block_on(async {
                #(#body)*
            })
        }
    }
}
