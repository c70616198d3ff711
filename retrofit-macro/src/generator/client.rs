use proc_macro2::TokenStream;
use quote::quote;
use retrofit_common::{LogLevel, RetrofitClientArgs};
use syn::ItemStruct;

/// 生成 HTTP 客户端的实现代码
///
/// 为使用 `#[retrofit_client]` 宏标注的单元结构体添加运行时核心字段，
/// 并生成 `new` / `with_base_url` 构造函数。
///
/// # 参数
///
/// * `input` - 输入的结构体定义
/// * `args` - 客户端配置参数
pub fn generate_retrofit_client_impl(mut input: ItemStruct, args: &RetrofitClientArgs) -> Result<TokenStream, syn::Error> {
    // 确保结构体是空的（无字段）
    if !matches!(input.fields, syn::Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &input,
            "retrofit_client macro only supports unit structs (e.g., `struct ApiClient;`)",
        ));
    }

    input.fields = syn::Fields::Named(syn::parse_quote! {{
        core: retrofit_common::RetrofitClient,
    }});
    input.semi_token = None;

    let struct_name = &input.ident;
    let base_url = args.base_url.as_ref().map(|lit| lit.value()).unwrap_or_default();

    let pool = args.pool.as_ref().map(|pool| quote! { .pool(#pool) });
    let log_level = args.log_level.map(|level| {
        let level = log_level_tokens(level);
        quote! { .log_level(#level) }
    });
    let log_strategy = args.log_strategy.map(|strategy| {
        let strategy = strategy.to_path_tokens();
        quote! { .log_strategy(#strategy) }
    });
    let interceptor = args.interceptor.as_ref().map(|path| {
        quote! { .interceptor(std::sync::Arc::new(<#path as Default>::default())) }
    });
    let timeout = args.timeout_ms.map(|ms| {
        quote! { .timeout(std::time::Duration::from_millis(#ms)) }
    });

    Ok(quote! {
        #input

        impl #struct_name {
            /// 使用声明的 base_url 创建客户端
            pub fn new(config: std::sync::Arc<retrofit_common::RetrofitConfigBean>) -> anyhow::Result<Self> {
                Self::with_base_url(config, #base_url)
            }

            /// 使用运行时给定的 base_url 创建客户端，其余声明保持不变
            pub fn with_base_url(
                config: std::sync::Arc<retrofit_common::RetrofitConfigBean>,
                base_url: impl Into<String>,
            ) -> anyhow::Result<Self> {
                let core = retrofit_common::RetrofitClient::builder(config)
                    .base_url(base_url)
                    #pool
                    #log_level
                    #log_strategy
                    #interceptor
                    #timeout
                    .build()?;
                Ok(Self { core })
            }

            pub fn core(&self) -> &retrofit_common::RetrofitClient {
                &self.core
            }
        }
    })
}

fn log_level_tokens(level: LogLevel) -> TokenStream {
    match level {
        LogLevel::Error => quote! { retrofit_common::LogLevel::Error },
        LogLevel::Warn => quote! { retrofit_common::LogLevel::Warn },
        LogLevel::Info => quote! { retrofit_common::LogLevel::Info },
        LogLevel::Debug => quote! { retrofit_common::LogLevel::Debug },
        LogLevel::Trace => quote! { retrofit_common::LogLevel::Trace },
    }
}
