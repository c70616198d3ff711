use async_trait::async_trait;
use reqwest::header::HeaderValue;
use retrofit_common::{
    Call, Callback, ExtensionRegistry, GlobalInterceptor, Interceptor, RawResponse, Response,
    RetrofitAutoConfiguration, RetrofitProperties,
};
use retrofit_macro::{get, post, retrofit_client};
use serde::{Deserialize, Serialize};

/// 用户数据结构
#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

/// 创建用户请求
#[derive(Serialize)]
struct CreateUserRequest {
    name: String,
    email: String,
}

/// 所有请求都带上客户端标识
struct UserAgentInterceptor;

#[async_trait]
impl Interceptor for UserAgentInterceptor {
    async fn before_request(&self, mut request: reqwest::Request) -> anyhow::Result<reqwest::Request> {
        request
            .headers_mut()
            .insert("User-Agent", HeaderValue::from_static("retrofit-rs/0.1"));
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

impl GlobalInterceptor for UserAgentInterceptor {}

/// 方法级拦截器，按类型缓存，同一客户端只创建一次
#[derive(Default)]
struct TraceInterceptor;

#[async_trait]
impl Interceptor for TraceInterceptor {
    async fn after_response(
        &self,
        request: &reqwest::Request,
        response: RawResponse,
    ) -> anyhow::Result<RawResponse> {
        println!("   🔍 {} {} -> {}", request.method(), request.url(), response.status());
        Ok(response)
    }
}

#[retrofit_client(base_url = "https://jsonplaceholder.typicode.com", pool = "test1")]
struct ApiClient;

impl ApiClient {
    /// 获取用户信息
    #[get(url = "/users/{id}", interceptor = TraceInterceptor)]
    async fn get_user(&self, id: u32) -> anyhow::Result<User> {}

    /// 获取用户信息以及状态码和响应头
    #[get(url = "/users/{id}")]
    async fn get_user_response(&self, id: u32) -> anyhow::Result<Response<User>> {}

    /// 延迟执行的调用
    #[get(url = "/users")]
    fn get_all_users(&self) -> Call<Vec<User>> {}

    /// 创建新用户
    #[post(url = "/users", content_type = json)]
    async fn create_user(&self, body: CreateUserRequest) -> anyhow::Result<User> {}
}

struct PrintCallback;

impl Callback<Vec<User>> for PrintCallback {
    fn on_response(self, response: Response<Vec<User>>) {
        match response.body() {
            Some(users) => println!("   ✅ 回调收到 {} 个用户", users.len()),
            None => println!("   ❌ 回调收到错误响应: {}", response.status()),
        }
    }

    fn on_failure(self, error: anyhow::Error) {
        println!("   ❌ 回调错误: {}", error);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    env_logger::init();

    println!("=== retrofit-rs Basic Usage Example ===\n");

    let properties = RetrofitProperties::from_yaml_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/config/application.yml"
    ))?;
    let config = RetrofitAutoConfiguration::new(properties)
        .registry(ExtensionRegistry::default().register_global_interceptor(UserAgentInterceptor))
        .build()?;

    let client = ApiClient::new(config)?;

    // 示例1：直接返回响应体
    println!("1. 获取用户");
    match client.get_user(1).await {
        Ok(user) => println!("   ✅ 获取用户: {}\n", user.name),
        Err(e) => println!("   ❌ 错误: {}\n", e),
    }

    // 示例2：返回 Response<T>
    println!("2. 获取用户（带状态码）");
    match client.get_user_response(2).await {
        Ok(response) => println!(
            "   ✅ 状态码: {}，用户: {:?}\n",
            response.status(),
            response.body().map(|user| &user.name)
        ),
        Err(e) => println!("   ❌ 错误: {}\n", e),
    }

    // 示例3：Call 的三种执行方式
    println!("3. 延迟调用");
    match client.get_all_users().execute().await {
        Ok(response) => println!("   ✅ execute 状态码: {}", response.status()),
        Err(e) => println!("   ❌ 错误: {}", e),
    }
    client.get_all_users().enqueue(PrintCallback).await?;
    match client.get_all_users().spawn().await? {
        Ok(users) => println!("   ✅ spawn 获取 {} 个用户\n", users.len()),
        Err(e) => println!("   ❌ 错误: {}\n", e),
    }

    // 示例4：创建新用户
    println!("4. 创建新用户...");
    let new_user = CreateUserRequest {
        name: "张三".to_string(),
        email: "zhangsan@example.com".to_string(),
    };

    match client.create_user(new_user).await {
        Ok(user) => println!("   ✅ 创建的用户: {} ({})\n", user.name, user.email),
        Err(e) => println!("   ❌ 错误: {}\n", e),
    }

    println!("🎉 所有示例运行完成！");

    Ok(())
}
