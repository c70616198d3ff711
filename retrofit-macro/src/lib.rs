//! retrofit-rs 声明式 HTTP 客户端宏
//!
//! ```ignore
//! #[retrofit_client(base_url = "http://localhost:8080/api/test/", pool = "test1", log_strategy = "body")]
//! struct HttpApi;
//!
//! impl HttpApi {
//!     #[get(url = "person")]
//!     async fn get_person(&self, id: i64) -> anyhow::Result<Result<Person>> {}
//!
//!     #[post(url = "savePerson", content_type = json)]
//!     async fn save_person(&self, person: Person) -> anyhow::Result<()> {}
//!
//!     #[get(url = "person")]
//!     fn get_person_call(&self, id: i64) -> Call<Result<Person>> {}
//! }
//! ```

mod common;
mod conversion;
mod error;
mod generator;
mod request;

use crate::common::common_http_method;
use proc_macro::TokenStream;
use retrofit_common::{HttpMethod, parse_retrofit_client_args};
use syn::{ItemStruct, parse_macro_input};

#[proc_macro_attribute]
pub fn retrofit_client(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let args = parse_macro_input!(args with parse_retrofit_client_args);

    match generator::generate_retrofit_client_impl(input, &args) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[proc_macro_attribute]
pub fn get(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Get)
}

#[proc_macro_attribute]
pub fn post(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Post)
}

#[proc_macro_attribute]
pub fn put(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Put)
}

#[proc_macro_attribute]
pub fn delete(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Delete)
}
