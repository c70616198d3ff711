#![allow(dead_code)]

use std::sync::Arc;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use retrofit_common::{
    Call, ExtensionRegistry, GlobalInterceptor, Interceptor, RawResponse, Response,
    RetrofitAutoConfiguration, RetrofitConfigBean, RetrofitProperties,
};
use retrofit_macro::{get, post, retrofit_client};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

/// 统一返回结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub code: i32,
    pub msg: String,
    pub data: Option<T>,
}

pub fn person_payload() -> serde_json::Value {
    json!({"code": 0, "msg": "ok", "data": {"id": 1, "name": "test", "age": 10}})
}

pub fn person() -> Person {
    Person {
        id: 1,
        name: "test".to_string(),
        age: 10,
    }
}

/// 方法级拦截器：给请求加签
#[derive(Default)]
pub struct SignInterceptor;

#[async_trait]
impl Interceptor for SignInterceptor {
    async fn before_request(&self, mut request: reqwest::Request) -> anyhow::Result<reqwest::Request> {
        request.headers_mut().insert("x-sign", HeaderValue::from_static("signed"));
        Ok(request)
    }

    async fn after_response(
        &self,
        _request: &reqwest::Request,
        response: RawResponse,
    ) -> anyhow::Result<RawResponse> {
        Ok(response)
    }
}

/// 全局拦截器：标记请求来源
pub struct SourceInterceptor;

#[async_trait]
impl Interceptor for SourceInterceptor {
    async fn before_request(&self, mut request: reqwest::Request) -> anyhow::Result<reqwest::Request> {
        request.headers_mut().insert("x-source", HeaderValue::from_static("retrofit-demos"));
        Ok(request)
    }

    async fn after_response(
        &self,
        _request: &reqwest::Request,
        response: RawResponse,
    ) -> anyhow::Result<RawResponse> {
        Ok(response)
    }
}

impl GlobalInterceptor for SourceInterceptor {}

#[retrofit_client(base_url = "http://localhost:8080/api/test/", log_strategy = "body")]
pub struct HttpApi;

impl HttpApi {
    #[get(url = "person")]
    pub async fn get_person(&self, id: i64) -> anyhow::Result<ApiResult<Person>> {}

    #[get(url = "person")]
    pub async fn get_person_response(&self, id: i64) -> anyhow::Result<Response<ApiResult<Person>>> {}

    #[get(url = "person")]
    pub fn get_person_call(&self, id: i64) -> Call<ApiResult<Person>> {}

    #[get(url = "person/{id}", header = "X-Trace: {trace}", interceptor = SignInterceptor)]
    pub async fn get_person_by_path(&self, id: i64, trace: String) -> anyhow::Result<ApiResult<Person>> {}

    #[post(url = "savePerson", content_type = json)]
    pub async fn save_person(&self, person: Person) -> anyhow::Result<ApiResult<()>> {}

    #[post(url = "savePerson", content_type = json)]
    pub async fn save_person_void(&self, person: Person) -> anyhow::Result<()> {}

    #[post(url = "savePersonForm", content_type = form_urlencoded)]
    pub async fn save_person_form(&self, person: Person) -> anyhow::Result<()> {}

    #[get(url = "error")]
    pub async fn error(&self) -> anyhow::Result<ApiResult<Person>> {}

    #[get(url = "ping")]
    pub async fn ping(&self) -> anyhow::Result<String> {}
}

/// 没有 base_url 的客户端，只能使用完整地址
#[retrofit_client]
pub struct AbsoluteApi;

impl AbsoluteApi {
    #[get(url = "{url}")]
    pub async fn get_person(&self, url: String, id: i64) -> anyhow::Result<ApiResult<Person>> {}
}

/// 使用命名连接池 test1 的客户端
#[retrofit_client(base_url = "http://localhost:8080/api/test/", pool = "test1", log_level = "debug")]
pub struct PooledApi;

impl PooledApi {
    #[get(url = "person")]
    pub async fn get_person(&self, id: i64) -> anyhow::Result<ApiResult<Person>> {}
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn config(properties: RetrofitProperties) -> Arc<RetrofitConfigBean> {
    init_logger();
    RetrofitAutoConfiguration::new(properties)
        .build()
        .expect("auto-configuration should succeed")
}

pub fn config_with_global_interceptor() -> Arc<RetrofitConfigBean> {
    init_logger();
    RetrofitAutoConfiguration::new(RetrofitProperties::default())
        .registry(ExtensionRegistry::default().register_global_interceptor(SourceInterceptor))
        .build()
        .expect("auto-configuration should succeed")
}

pub fn application_properties() -> RetrofitProperties {
    RetrofitProperties::from_yaml_file(concat!(env!("CARGO_MANIFEST_DIR"), "/config/application.yml"))
        .expect("config/application.yml should parse")
}
