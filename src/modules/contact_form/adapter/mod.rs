mod http_endpoint;

pub use http_endpoint::HttpContactEndpoint;
