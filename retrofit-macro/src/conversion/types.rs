use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// 响应体到返回类型的转换方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `String`：直接按 UTF-8 读取
    Text,
    /// `Vec<u8>`：直接返回字节
    Bytes,
    /// 其他类型：按 Content-Type 选择转换器解码
    Decode,
}

pub fn conversion_kind(ty: &Type) -> Conversion {
    let Type::Path(type_path) = ty else {
        return Conversion::Decode;
    };
    let Some(last_segment) = type_path.path.segments.last() else {
        return Conversion::Decode;
    };

    match last_segment.ident.to_string().as_str() {
        "String" => Conversion::Text,
        "Vec" if is_u8_argument(&last_segment.arguments) => Conversion::Bytes,
        _ => Conversion::Decode,
    }
}

fn is_u8_argument(arguments: &PathArguments) -> bool {
    match arguments {
        PathArguments::AngleBracketed(args) => matches!(
            args.args.first(),
            Some(GenericArgument::Type(Type::Path(inner))) if inner.path.is_ident("u8")
        ),
        _ => false,
    }
}

/// 生成类型转换代码
///
/// 生成的表达式类型为 `anyhow::Result<T>`。
///
/// # 参数
///
/// * `ok_type` - 需要得到的类型
/// * `client` - `&RetrofitClient` 表达式
/// * `raw` - `&RawResponse` 表达式
pub fn generate_type_conversion(ok_type: &Type, client: &TokenStream, raw: &TokenStream) -> TokenStream {
    match conversion_kind(ok_type) {
        Conversion::Text => quote! { Ok((#raw).text()) },
        Conversion::Bytes => quote! { Ok((#raw).body().to_vec()) },
        Conversion::Decode => quote! { (#client).decode::<#ok_type>(#raw) },
    }
}
