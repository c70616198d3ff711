use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use crate::interceptor::Interceptor;

/// 拦截器缓存管理器
///
/// 为每个客户端实例管理方法级拦截器的生命周期，同一类型只创建一次，
/// 之后所有调用共享同一个 `Arc`。
pub struct InterceptorCache {
    /// 方法级拦截器缓存，按类型ID索引
    method_interceptors: HashMap<TypeId, Arc<dyn Interceptor>>,
}

impl InterceptorCache {
    pub fn new() -> Self {
        Self {
            method_interceptors: HashMap::new(),
        }
    }

    /// 获取或创建方法级拦截器
    ///
    /// # 类型参数
    ///
    /// * `T` - 拦截器类型，必须实现 Interceptor + Default
    pub fn get_or_create<T>(&mut self) -> Arc<dyn Interceptor>
    where
        T: Interceptor + Default + 'static,
    {
        let type_id = TypeId::of::<T>();

        self.method_interceptors
            .entry(type_id)
            .or_insert_with(|| Arc::new(T::default()))
            .clone()
    }
}

impl Default for InterceptorCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::NoOpInterceptor;
    use crate::types::RawResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CREATION_COUNT: AtomicUsize = AtomicUsize::new(0);

    struct CountingInterceptor;

    impl Default for CountingInterceptor {
        fn default() -> Self {
            CREATION_COUNT.fetch_add(1, Ordering::SeqCst);
            CountingInterceptor
        }
    }

    #[async_trait]
    impl Interceptor for CountingInterceptor {
        async fn after_response(
            &self,
            _request: &reqwest::Request,
            response: RawResponse,
        ) -> anyhow::Result<RawResponse> {
            Ok(response)
        }
    }

    #[derive(Default)]
    struct PlainInterceptor;

    #[async_trait]
    impl Interceptor for PlainInterceptor {
        async fn after_response(
            &self,
            _request: &reqwest::Request,
            response: RawResponse,
        ) -> anyhow::Result<RawResponse> {
            Ok(response)
        }
    }

    #[test]
    fn test_cache_reuses_interceptors() {
        let mut cache = InterceptorCache::new();
        let before = CREATION_COUNT.load(Ordering::SeqCst);

        let interceptor1 = cache.get_or_create::<CountingInterceptor>();
        let interceptor2 = cache.get_or_create::<CountingInterceptor>();
        let interceptor3 = cache.get_or_create::<CountingInterceptor>();

        // 同一个实例（Arc 指针相同）
        assert!(Arc::ptr_eq(&interceptor1, &interceptor2));
        assert!(Arc::ptr_eq(&interceptor2, &interceptor3));

        assert_eq!(CREATION_COUNT.load(Ordering::SeqCst) - before, 1);
    }

    #[test]
    fn test_cache_different_types() {
        let mut cache = InterceptorCache::new();

        let plain = cache.get_or_create::<PlainInterceptor>();
        let no_op = cache.get_or_create::<NoOpInterceptor>();

        assert!(!Arc::ptr_eq(&plain, &no_op));
        assert!(Arc::ptr_eq(&plain, &cache.get_or_create::<PlainInterceptor>()));
    }
}
