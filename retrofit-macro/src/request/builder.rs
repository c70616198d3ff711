use proc_macro2::TokenStream;
use quote::quote;
use retrofit_common::HandlerArgs;
use syn::{FnArg, Ident};
use super::{CachedInterceptorProcessor, DynamicParamsProcessor};

type Inputs = syn::punctuated::Punctuated<FnArg, syn::Token![,]>;

/// 请求构建器
///
/// 负责生成 `RequestSpec` 的构建代码，包括 URL、头部、查询参数、请求体和方法拦截器。
pub struct RequestBuilder;

impl RequestBuilder {
    /// 生成 `let spec = ...;` 语句
    ///
    /// # 参数
    ///
    /// * `handler_args` - 处理器参数
    /// * `fn_inputs` - 函数参数列表（已校验过第一个参数为 self）
    pub fn generate_request_builder_code(handler_args: &HandlerArgs, fn_inputs: &Inputs) -> syn::Result<TokenStream> {
        let method = handler_args.method.to_path_tokens();
        let url_template = handler_args.url.value();
        let url_code = DynamicParamsProcessor::generate_dynamic_url_code(&url_template, fn_inputs);

        let header_templates: Vec<String> = handler_args.headers.iter().map(|header| header.value()).collect();
        let header_statements: Vec<TokenStream> = header_templates
            .iter()
            .map(|header| DynamicParamsProcessor::generate_dynamic_header_code(header, fn_inputs))
            .collect();

        let params = Self::parameter_idents(fn_inputs)?;
        let body_param = Self::body_parameter(handler_args, &params);
        let referenced = DynamicParamsProcessor::referenced_parameters(
            std::iter::once(url_template.as_str()).chain(header_templates.iter().map(String::as_str)),
            fn_inputs,
        );

        let query_statements: Vec<TokenStream> = params
            .iter()
            .filter(|ident| body_param != Some(**ident) && !referenced.contains(&ident.to_string()))
            .map(|ident| {
                let name = ident.to_string();
                quote! { .query(#name, &#ident) }
            })
            .collect();

        let body_statement = match (body_param, &handler_args.content_type) {
            (Some(ident), Some(content_type)) => {
                let content_type = content_type.to_path_tokens();
                quote! { .body(&#ident, #content_type) }
            }
            _ => quote! {},
        };

        let interceptor_statement =
            CachedInterceptorProcessor::generate_cached_interceptor_access(&handler_args.interceptor);

        Ok(quote! {
            let spec = self.core
                .new_request(#method, #url_code)
                #(#header_statements)*
                #(#query_statements)*
                #body_statement
                #interceptor_statement;
        })
    }

    /// 收集除 self 之外的参数名，只接受简单标识符模式
    pub fn parameter_idents(fn_inputs: &Inputs) -> syn::Result<Vec<&Ident>> {
        fn_inputs
            .iter()
            .skip(1)
            .map(|input| match input {
                FnArg::Typed(pat_type) => match pat_type.pat.as_ref() {
                    syn::Pat::Ident(pat_ident) => Ok(&pat_ident.ident),
                    other => Err(syn::Error::new_spanned(other, "parameters must be simple identifiers")),
                },
                FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(receiver, "unexpected self parameter")),
            })
            .collect()
    }

    /// POST/PUT 声明了 content_type 时，最后一个参数作为请求体
    fn body_parameter<'a>(handler_args: &HandlerArgs, params: &[&'a Ident]) -> Option<&'a Ident> {
        if handler_args.method.has_body() && handler_args.content_type.is_some() {
            params.last().copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_common::HttpMethod;
    use syn::parse_quote;

    fn handler_args(tokens: proc_macro2::TokenStream, method: HttpMethod) -> HandlerArgs {
        let mut args = syn::parse2::<HandlerArgs>(tokens).unwrap();
        args.method = method;
        args
    }

    #[test]
    fn test_get_with_query_parameter() {
        let args = handler_args(quote! { url = "/api/test/person" }, HttpMethod::Get);
        let inputs: Inputs = parse_quote! { &self, id: i64 };

        let code = RequestBuilder::generate_request_builder_code(&args, &inputs).unwrap().to_string();

        assert!(code.contains("HttpMethod :: Get"));
        assert!(code.contains(". query (\"id\" , & id)"));
        assert!(!code.contains(". body"));
    }

    #[test]
    fn test_post_body_is_last_parameter() {
        let args = handler_args(
            quote! { url = "/api/test/{tenant}/savePerson", content_type = json, header = "X-Trace: {trace}" },
            HttpMethod::Post,
        );
        let inputs: Inputs = parse_quote! { &self, tenant: String, trace: String, dry_run: bool, person: Person };

        let code = RequestBuilder::generate_request_builder_code(&args, &inputs).unwrap().to_string();

        assert!(code.contains(". body (& person , retrofit_common :: ContentType :: Json)"));
        assert!(code.contains(". query (\"dry_run\" , & dry_run)"));
        assert!(!code.contains("\"tenant\" ,"));
        assert!(!code.contains("\"trace\" ,"));
        assert!(!code.contains("\"person\""));
    }

    #[test]
    fn test_post_without_content_type_has_no_body() {
        let args = handler_args(quote! { url = "/ping" }, HttpMethod::Post);
        let inputs: Inputs = parse_quote! { &self, id: i64 };

        let code = RequestBuilder::generate_request_builder_code(&args, &inputs).unwrap().to_string();

        assert!(!code.contains(". body"));
        assert!(code.contains(". query (\"id\" , & id)"));
    }

    #[test]
    fn test_pattern_parameters_are_rejected() {
        let inputs: Inputs = parse_quote! { &self, (a, b): (i32, i32) };
        assert!(RequestBuilder::parameter_idents(&inputs).is_err());
    }
}
