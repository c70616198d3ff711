use std::str::FromStr;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{LitStr, Path, Token};
use crate::interceptor::LogStrategy;
use crate::types::RetrofitClientArgs;

impl Parse for RetrofitClientArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut base_url = None;
        let mut pool = None;
        let mut interceptor = None;
        let mut log_level = None;
        let mut log_strategy = None;
        let mut timeout_ms = None;

        let pairs = Punctuated::<syn::Meta, Token![,]>::parse_terminated(input)?;
        for meta in pairs {
            let nv = match meta {
                syn::Meta::NameValue(nv) => nv,
                other => return Err(syn::Error::new_spanned(other, "Expected key-value pair")),
            };

            if nv.path.is_ident("base_url") {
                base_url = Some(parse_str_value(&nv.value, "base_url")?);
            } else if nv.path.is_ident("pool") {
                pool = Some(parse_str_value(&nv.value, "pool")?);
            } else if nv.path.is_ident("interceptor") {
                interceptor = Some(parse_interceptor_value(&nv.value)?);
            } else if nv.path.is_ident("log_level") {
                log_level = Some(parse_log_level_value(&nv.value)?);
            } else if nv.path.is_ident("log_strategy") {
                log_strategy = Some(parse_log_strategy_value(&nv.value)?);
            } else if nv.path.is_ident("timeout_ms") {
                timeout_ms = Some(parse_timeout_value(&nv.value)?);
            } else {
                return Err(syn::Error::new_spanned(
                    nv.path,
                    "Only 'base_url', 'pool', 'interceptor', 'log_level', 'log_strategy', or 'timeout_ms' are supported",
                ));
            }
        }

        Ok(RetrofitClientArgs {
            base_url,
            pool,
            interceptor,
            log_level,
            log_strategy,
            timeout_ms,
        })
    }
}

fn parse_str_value(value: &syn::Expr, key: &str) -> syn::Result<LitStr> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = value
    {
        Ok(lit.clone())
    } else {
        Err(syn::Error::new_spanned(
            value,
            format!("{} must be a string literal", key),
        ))
    }
}

fn parse_interceptor_value(value: &syn::Expr) -> syn::Result<Path> {
    if let syn::Expr::Path(expr_path) = value {
        Ok(expr_path.path.clone())
    } else {
        Err(syn::Error::new_spanned(
            value,
            "interceptor must be a type path",
        ))
    }
}

fn parse_log_level_value(value: &syn::Expr) -> syn::Result<log::Level> {
    let lit = parse_str_value(value, "log_level")?;
    log::Level::from_str(&lit.value()).map_err(|_| {
        syn::Error::new_spanned(
            &lit,
            "log_level must be one of 'error', 'warn', 'info', 'debug', or 'trace'",
        )
    })
}

fn parse_log_strategy_value(value: &syn::Expr) -> syn::Result<LogStrategy> {
    let lit = parse_str_value(value, "log_strategy")?;
    LogStrategy::from_str(&lit.value()).map_err(|_| {
        syn::Error::new_spanned(
            &lit,
            "log_strategy must be one of 'none', 'basic', 'headers', or 'body'",
        )
    })
}

fn parse_timeout_value(value: &syn::Expr) -> syn::Result<u64> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Int(lit),
        ..
    }) = value
    {
        lit.base10_parse::<u64>()
    } else {
        Err(syn::Error::new_spanned(
            value,
            "timeout_ms must be an integer literal",
        ))
    }
}

/// 解析 `#[retrofit_client]` 参数的公共函数
pub fn parse_retrofit_client_args(input: ParseStream) -> syn::Result<RetrofitClientArgs> {
    RetrofitClientArgs::parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_base_url_value() {
        let expr = parse_quote! { "https://api.example.com" };
        let result = parse_str_value(&expr, "base_url").unwrap();
        assert_eq!(result.value(), "https://api.example.com");
    }

    #[test]
    fn test_parse_interceptor_value() {
        let expr = parse_quote! { MyInterceptor };
        let result = parse_interceptor_value(&expr).unwrap();
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments.first().unwrap().ident.to_string(), "MyInterceptor");
    }

    #[test]
    fn test_invalid_base_url() {
        let expr = parse_quote! { 123 };
        let result = parse_str_value(&expr, "base_url");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_all_client_args() {
        let tokens = quote! {
            base_url = "http://localhost:8080/api/test/",
            pool = "test1",
            interceptor = SignInterceptor,
            log_level = "DEBUG",
            log_strategy = "body",
            timeout_ms = 3000
        };
        let args = syn::parse2::<RetrofitClientArgs>(tokens).unwrap();
        assert_eq!(args.pool.unwrap().value(), "test1");
        assert_eq!(args.log_level, Some(log::Level::Debug));
        assert_eq!(args.log_strategy, Some(LogStrategy::Body));
        assert_eq!(args.timeout_ms, Some(3000));
        assert!(args.interceptor.is_some());
    }

    #[test]
    fn test_empty_client_args() {
        let args = syn::parse2::<RetrofitClientArgs>(quote! {}).unwrap();
        assert!(args.base_url.is_none());
        assert!(args.log_strategy.is_none());
    }

    #[test]
    fn test_invalid_log_strategy_should_fail() {
        let tokens = quote! { log_strategy = "verbose" };
        let result = syn::parse2::<RetrofitClientArgs>(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_should_fail() {
        let tokens = quote! { state = MyState };
        let result = syn::parse2::<RetrofitClientArgs>(tokens);
        assert!(result.is_err());
    }
}
