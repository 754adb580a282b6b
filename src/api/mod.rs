pub mod catalog;
mod core;
pub mod endpoint;
mod fetch_utils;
pub mod http_client;
mod pagination;
pub mod request;
pub mod transport;
pub mod urls;

pub use self::core::ApiClient;
pub use endpoint::{Endpoint, EndpointInfo, Host, HttpMethod};
pub use pagination::Paginated;
pub use request::RequestParams;
pub use transport::{
    Credentials, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError,
};
pub use urls::{build_endpoint_url, build_query, extract_token, render_path};
