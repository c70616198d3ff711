pub mod factory;
pub mod response;
pub mod call;

pub use factory::{
    BodyCallAdapterFactory, CallAdapterFactory, DefaultCallAdapterFactory, ResponseCallAdapterFactory,
    ReturnKind,
};
pub use response::Response;
pub use call::{Call, Callback};
