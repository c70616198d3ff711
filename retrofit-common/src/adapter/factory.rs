use std::fmt;
use proc_macro2::TokenStream;
use quote::quote;

/// 声明方法的返回形态，由宏根据方法签名判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    /// `anyhow::Result<T>`：直接返回解码后的响应体
    Body,
    /// `anyhow::Result<Response<T>>`：返回带状态码和头部的响应包装
    Response,
    /// `Call<T>`：返回延迟执行的调用
    Call,
    /// `anyhow::Result<()>`：忽略响应体
    Unit,
}

impl ReturnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnKind::Body => "body",
            ReturnKind::Response => "response",
            ReturnKind::Call => "call",
            ReturnKind::Unit => "unit",
        }
    }

    pub fn to_path_tokens(&self) -> TokenStream {
        match self {
            ReturnKind::Body => quote! { retrofit_common::ReturnKind::Body },
            ReturnKind::Response => quote! { retrofit_common::ReturnKind::Response },
            ReturnKind::Call => quote! { retrofit_common::ReturnKind::Call },
            ReturnKind::Unit => quote! { retrofit_common::ReturnKind::Unit },
        }
    }
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 调用适配器工厂
///
/// 决定某种返回形态能否被处理。配置中的工厂列表按顺序匹配，
/// 第一个声明支持的工厂胜出。
pub trait CallAdapterFactory: Send + Sync {
    fn name(&self) -> &str;

    fn supports(&self, kind: ReturnKind) -> bool;
}

/// 同步返回响应体（含 `()`）的调用适配器，由 `retrofit.enable-body-call-adapter` 控制
#[derive(Debug, Default)]
pub struct BodyCallAdapterFactory;

impl CallAdapterFactory for BodyCallAdapterFactory {
    fn name(&self) -> &str {
        "body"
    }

    fn supports(&self, kind: ReturnKind) -> bool {
        matches!(kind, ReturnKind::Body | ReturnKind::Unit)
    }
}

/// 返回 `Response<T>` 的调用适配器，由 `retrofit.enable-response-call-adapter` 控制
#[derive(Debug, Default)]
pub struct ResponseCallAdapterFactory;

impl CallAdapterFactory for ResponseCallAdapterFactory {
    fn name(&self) -> &str {
        "response"
    }

    fn supports(&self, kind: ReturnKind) -> bool {
        kind == ReturnKind::Response
    }
}

/// 内置的 `Call<T>` 适配器，始终位于列表末尾
#[derive(Debug, Default)]
pub struct DefaultCallAdapterFactory;

impl CallAdapterFactory for DefaultCallAdapterFactory {
    fn name(&self) -> &str {
        "call"
    }

    fn supports(&self, kind: ReturnKind) -> bool {
        kind == ReturnKind::Call
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_factories_cover_every_kind() {
        let factories: Vec<Box<dyn CallAdapterFactory>> = vec![
            Box::new(ResponseCallAdapterFactory),
            Box::new(BodyCallAdapterFactory),
            Box::new(DefaultCallAdapterFactory),
        ];

        for kind in [ReturnKind::Body, ReturnKind::Response, ReturnKind::Call, ReturnKind::Unit] {
            let matched: Vec<&str> = factories
                .iter()
                .filter(|factory| factory.supports(kind))
                .map(|factory| factory.name())
                .collect();
            assert_eq!(matched.len(), 1, "kind {} matched {:?}", kind, matched);
        }
    }

    #[test]
    fn test_return_kind_display() {
        assert_eq!(ReturnKind::Response.to_string(), "response");
        assert!(ReturnKind::Unit.to_path_tokens().to_string().contains("Unit"));
    }
}
