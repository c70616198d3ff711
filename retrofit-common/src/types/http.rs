use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};

/// HTTP 方法枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// 返回HTTP方法的字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// 转换为 reqwest 的方法类型
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// 该方法是否携带请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    /// 生成代码中引用该变体的路径
    pub fn to_path_tokens(&self) -> TokenStream {
        match self {
            HttpMethod::Get => quote! { retrofit_common::HttpMethod::Get },
            HttpMethod::Post => quote! { retrofit_common::HttpMethod::Post },
            HttpMethod::Put => quote! { retrofit_common::HttpMethod::Put },
            HttpMethod::Delete => quote! { retrofit_common::HttpMethod::Delete },
        }
    }
}

/// 内容类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    FormUrlEncoded,
    Text,
}

impl ContentType {
    /// 对应的 MIME 类型
    pub fn media_type(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::Text => "text/plain",
        }
    }

    pub fn to_path_tokens(&self) -> TokenStream {
        match self {
            ContentType::Json => quote! { retrofit_common::ContentType::Json },
            ContentType::FormUrlEncoded => quote! { retrofit_common::ContentType::FormUrlEncoded },
            ContentType::Text => quote! { retrofit_common::ContentType::Text },
        }
    }

    pub(crate) fn from_ident(ident: &Ident) -> syn::Result<Self> {
        match ident.to_string().as_str() {
            "json" => Ok(ContentType::Json),
            "form_urlencoded" => Ok(ContentType::FormUrlEncoded),
            "text" => Ok(ContentType::Text),
            _ => Err(syn::Error::new_spanned(
                ident,
                "content_type must be one of 'json', 'form_urlencoded', or 'text'",
            )),
        }
    }
}

impl Parse for ContentType {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        ContentType::from_ident(&ident)
    }
}
