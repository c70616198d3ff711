use proc_macro2::TokenStream;
use quote::quote;
use std::collections::{HashMap, HashSet};
use syn::{FnArg, PatType};

type Inputs = syn::punctuated::Punctuated<FnArg, syn::Token![,]>;

/// 动态参数处理器
///
/// 处理 URL 和 header 中的 `{name}` / `{paramN}` 占位符替换
pub struct DynamicParamsProcessor;

impl DynamicParamsProcessor {
    /// 生成 URL 表达式
    ///
    /// 没有占位符时直接使用字符串字面量，否则生成 `format!`。
    /// 拼接 base url 的工作在运行时完成，这样完整的 http(s) 地址可以绕过 base url。
    pub fn generate_dynamic_url_code(url_template: &str, fn_inputs: &Inputs) -> TokenStream {
        Self::generate_template_expr(url_template, fn_inputs)
    }

    /// 生成 `.header(key, value)` 调用
    pub fn generate_dynamic_header_code(header_template: &str, fn_inputs: &Inputs) -> TokenStream {
        let Some((header_key, header_value_template)) = header_template.split_once(": ") else {
            return quote! {
                compile_error!("header must be in 'Key: Value' format with a colon and space separator");
            };
        };

        let value = Self::generate_template_expr(header_value_template, fn_inputs);
        quote! {
            .header(#header_key, #value)
        }
    }

    /// 收集模板中引用到的参数名称（已把 `{paramN}` 解析为实际参数名）
    pub fn referenced_parameters<'a, I>(templates: I, fn_inputs: &Inputs) -> HashSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let param_map = Self::extract_parameters(fn_inputs);
        templates
            .into_iter()
            .flat_map(Self::extract_placeholders)
            .filter_map(|placeholder| param_map.get(&placeholder).map(|ident| ident.to_string()))
            .collect()
    }

    fn generate_template_expr(template: &str, fn_inputs: &Inputs) -> TokenStream {
        if !Self::has_placeholders(template) {
            return quote! { #template };
        }

        let param_map = Self::extract_parameters(fn_inputs);
        let mut format_str = String::new();
        let mut format_args = Vec::new();
        let mut chars = template.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '{' => {
                    let placeholder: String = chars.by_ref().take_while(|c| *c != '}').collect();
                    match param_map.get(&placeholder) {
                        Some(ident) => {
                            format_str.push_str("{}");
                            format_args.push(ident.clone());
                        }
                        None => {
                            let message = format!("Parameter '{}' not found in function parameters", placeholder);
                            return quote! { compile_error!(#message) };
                        }
                    }
                }
                '}' => format_str.push_str("}}"),
                other => format_str.push(other),
            }
        }

        quote! { format!(#format_str, #(#format_args),*) }
    }

    /// 检查字符串是否包含占位符
    fn has_placeholders(text: &str) -> bool {
        text.contains('{') && text.contains('}')
    }

    /// 提取字符串中的所有占位符
    fn extract_placeholders(text: &str) -> Vec<String> {
        let mut placeholders = Vec::new();
        let mut chars = text.chars();

        while let Some(ch) = chars.next() {
            if ch == '{' {
                let placeholder: String = chars.by_ref().take_while(|c| *c != '}').collect();
                if !placeholder.is_empty() {
                    placeholders.push(placeholder);
                }
            }
        }

        placeholders
    }

    /// 从函数参数中提取参数映射
    fn extract_parameters(fn_inputs: &Inputs) -> HashMap<String, syn::Ident> {
        let mut param_map = HashMap::new();

        // 跳过self参数，从第二个参数开始
        for (index, input) in fn_inputs.iter().skip(1).enumerate() {
            if let FnArg::Typed(PatType { pat, .. }) = input {
                if let syn::Pat::Ident(pat_ident) = pat.as_ref() {
                    // 按名称：{param_name}
                    param_map.insert(pat_ident.ident.to_string(), pat_ident.ident.clone());
                    // 按位置：{param0}, {param1}, ...
                    param_map.insert(format!("param{}", index), pat_ident.ident.clone());
                }
            }
        }

        param_map
    }
}
