pub mod handling;

pub use handling::ErrorHandler;
