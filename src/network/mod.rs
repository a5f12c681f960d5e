pub mod api_client;
pub mod transport;

// Re-export commonly used items
pub use api_client::ApiClient;
pub use transport::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, Method};
