use quote::quote;
use syn::Path;

/// 缓存式拦截器处理器
///
/// 使用客户端级缓存来管理方法拦截器实例，避免重复创建
pub struct CachedInterceptorProcessor;

impl CachedInterceptorProcessor {
    /// 生成把方法拦截器挂到请求描述上的代码
    pub fn generate_cached_interceptor_access(interceptor_path: &Option<Path>) -> proc_macro2::TokenStream {
        match interceptor_path {
            Some(path) => quote! {
                .interceptor(self.core.method_interceptor::<#path>())
            },
            None => quote! {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_generate_cached_interceptor_access_with_path() {
        let path: Path = parse_quote! { SignInterceptor };
        let result = CachedInterceptorProcessor::generate_cached_interceptor_access(&Some(path)).to_string();

        assert!(result.contains("SignInterceptor"));
        assert!(result.contains("method_interceptor"));
    }

    #[test]
    fn test_generate_cached_interceptor_access_none() {
        let result = CachedInterceptorProcessor::generate_cached_interceptor_access(&None);
        assert!(result.is_empty());
    }
}
