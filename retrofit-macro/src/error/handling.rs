use retrofit_common::ReturnKind;
use syn::{GenericArgument, PathArguments, ReturnType, Signature, Type, TypePath};

/// 解析后的返回类型
pub struct ReturnShape<'a> {
    pub kind: ReturnKind,
    /// 需要从响应体解码出的类型，`Unit` 时为 `None`
    pub body_type: Option<&'a Type>,
}

/// 错误处理器
///
/// 负责校验方法签名的返回类型，并判定对应的调用适配器。
pub struct ErrorHandler;

impl ErrorHandler {
    /// 校验并分类返回类型
    ///
    /// - `async fn -> anyhow::Result<()>` => `Unit`
    /// - `async fn -> anyhow::Result<Response<T>>` => `Response`
    /// - `async fn -> anyhow::Result<T>` => `Body`
    /// - `fn -> Call<T>` => `Call`
    pub fn classify_return_type(sig: &Signature) -> Result<ReturnShape<'_>, syn::Error> {
        let ty = match &sig.output {
            ReturnType::Type(_, ty) => ty.as_ref(),
            ReturnType::Default => {
                return Err(syn::Error::new_spanned(
                    sig,
                    "Function must return anyhow::Result<T> or Call<T>",
                ));
            }
        };

        let type_path = match ty {
            Type::Path(type_path) => type_path,
            _ => {
                return Err(syn::Error::new_spanned(
                    ty,
                    "Return type must be anyhow::Result<T> or Call<T>",
                ));
            }
        };

        if sig.asyncness.is_none() {
            if Self::last_ident_is(type_path, "Call") {
                let inner = Self::single_type_argument(type_path, ty)?;
                return Ok(ReturnShape {
                    kind: ReturnKind::Call,
                    body_type: Some(inner),
                });
            }
            return Err(syn::Error::new_spanned(
                sig,
                "non-async methods must return Call<T>; use `async fn` for anyhow::Result<T>",
            ));
        }

        Self::validate_anyhow_result_path(type_path)?;
        let ok_type = Self::single_type_argument(type_path, ty)?;

        if Self::is_unit(ok_type) {
            return Ok(ReturnShape {
                kind: ReturnKind::Unit,
                body_type: None,
            });
        }

        if let Type::Path(inner_path) = ok_type {
            if Self::last_ident_is(inner_path, "Response") {
                let body = Self::single_type_argument(inner_path, ok_type)?;
                return Ok(ReturnShape {
                    kind: ReturnKind::Response,
                    body_type: Some(body),
                });
            }
            if Self::last_ident_is(inner_path, "Call") {
                return Err(syn::Error::new_spanned(
                    ok_type,
                    "methods returning Call<T> must not be async",
                ));
            }
        }

        Ok(ReturnShape {
            kind: ReturnKind::Body,
            body_type: Some(ok_type),
        })
    }

    /// 验证路径是否为 anyhow::Result
    fn validate_anyhow_result_path(type_path: &TypePath) -> Result<(), syn::Error> {
        let first_segment = type_path
            .path
            .segments
            .first()
            .ok_or_else(|| syn::Error::new_spanned(type_path, "Return type path must not be empty"))?;

        if first_segment.ident != "anyhow" || !Self::last_ident_is(type_path, "Result") {
            return Err(syn::Error::new_spanned(
                type_path,
                "Return type must be anyhow::Result<T>",
            ));
        }

        Ok(())
    }

    fn last_ident_is(type_path: &TypePath, name: &str) -> bool {
        type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name)
    }

    /// 提取唯一的泛型类型参数
    fn single_type_argument<'a>(type_path: &'a TypePath, ty: &'a Type) -> Result<&'a Type, syn::Error> {
        let args = match type_path.path.segments.last().map(|segment| &segment.arguments) {
            Some(PathArguments::AngleBracketed(args)) => args,
            _ => {
                return Err(syn::Error::new_spanned(ty, "return type must have generic arguments"));
            }
        };

        if args.args.len() != 1 {
            return Err(syn::Error::new_spanned(
                ty,
                "return type must have exactly 1 type parameter",
            ));
        }

        match &args.args[0] {
            GenericArgument::Type(inner) => Ok(inner),
            other => Err(syn::Error::new_spanned(other, "expected a type parameter")),
        }
    }

    fn is_unit(ty: &Type) -> bool {
        matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
    }
}
