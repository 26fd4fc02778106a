pub mod client;
pub use client::ApiClient;
pub use client::FetchError;
