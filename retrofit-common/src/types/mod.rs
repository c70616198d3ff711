pub mod http;
pub mod args;
pub mod response;

pub use http::{HttpMethod, ContentType};
pub use args::{HandlerArgs, RetrofitClientArgs};
pub use response::RawResponse;
