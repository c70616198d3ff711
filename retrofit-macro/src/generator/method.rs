use proc_macro2::TokenStream;
use quote::quote;
use retrofit_common::{HandlerArgs, ReturnKind};
use syn::{FnArg, ItemFn};
use crate::conversion::{Conversion, conversion_kind, generate_type_conversion};
use crate::error::ErrorHandler;
use crate::request::RequestBuilder;

/// 生成 HTTP 方法的实现代码
///
/// 保留原方法的属性、可见性和签名，只替换方法体：
/// 先构建 `RequestSpec`，再按返回形态交给运行时执行。
pub fn generate_http_method(item: &ItemFn, handler_args: &HandlerArgs) -> TokenStream {
    match generate_http_method_impl(item, handler_args) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    }
}

fn generate_http_method_impl(item: &ItemFn, handler_args: &HandlerArgs) -> syn::Result<TokenStream> {
    let attrs = &item.attrs;
    let vis = &item.vis;
    let sig = &item.sig;

    validate_function_inputs(&sig.inputs)?;
    let shape = ErrorHandler::classify_return_type(sig)?;
    let request_builder_code = RequestBuilder::generate_request_builder_code(handler_args, &sig.inputs)?;
    let kind_tokens = shape.kind.to_path_tokens();

    let body = match (shape.kind, shape.body_type) {
        (ReturnKind::Unit, _) => quote! {
            self.core.call(spec, #kind_tokens).await?;
            Ok(())
        },
        (ReturnKind::Body, Some(body_type)) => {
            let conversion = generate_type_conversion(body_type, &quote!(&self.core), &quote!(&raw));
            quote! {
                let raw = self.core.call(spec, #kind_tokens).await?;
                #conversion
            }
        }
        (ReturnKind::Response, Some(body_type)) => {
            let conversion = generate_type_conversion(body_type, &quote!(&self.core), &quote!(&raw));
            quote! {
                let raw = self.core.call(spec, #kind_tokens).await?;
                let body = if raw.is_successful() {
                    match #conversion {
                        Ok(body) => Some(body),
                        Err(error) => return Err(error),
                    }
                } else {
                    None
                };
                Ok(retrofit_common::Response::new(raw, body))
            }
        }
        (ReturnKind::Call, Some(body_type)) => {
            let conversion = generate_type_conversion(body_type, &quote!(core), &quote!(raw));
            let client_param = match conversion_kind(body_type) {
                Conversion::Decode => quote!(core),
                Conversion::Text | Conversion::Bytes => quote!(_core),
            };
            quote! {
                retrofit_common::Call::new(
                    self.core.clone(),
                    spec,
                    move |#client_param, raw| #conversion,
                )
            }
        }
        (_, None) => {
            return Err(syn::Error::new_spanned(&sig.output, "missing response body type"));
        }
    };

    Ok(quote! {
        #(#attrs)*
        #vis #sig {
            #request_builder_code
            #body
        }
    })
}

/// 验证函数输入参数
fn validate_function_inputs(inputs: &syn::punctuated::Punctuated<FnArg, syn::Token![,]>) -> Result<(), syn::Error> {
    match inputs.first() {
        None => Err(syn::Error::new_spanned(inputs, "method must have at least 'self' parameter")),
        Some(FnArg::Receiver(receiver)) if receiver.reference.is_some() && receiver.mutability.is_none() => Ok(()),
        Some(other) => Err(syn::Error::new_spanned(other, "first parameter must be '&self'")),
    }
}
