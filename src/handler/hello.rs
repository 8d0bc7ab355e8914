//! Placeholder API endpoint
//!
//! Always answers 200 with a fixed JSON greeting, whatever the request.

use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

pub const HELLO_PATH: &str = "/api/hello";

#[derive(Debug, Serialize)]
struct Greeting {
    name: &'static str,
}

const GREETING: Greeting = Greeting { name: "John Doe" };

pub fn handle_hello() -> Response<Full<Bytes>> {
    match serde_json::to_string(&GREETING) {
        Ok(json) => http::build_json_response(200, json),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize greeting: {e}"));
            http::build_json_response(500, "{}".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_fixed_greeting() {
        let resp = handle_hello();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"name":"John Doe"}"#);
    }
}
