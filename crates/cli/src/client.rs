//! Blocking client for the chart API

use crate::error::{Error, Result};
use cutsim_bench_core::{ApiRequest, ChartPayload};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

/// Chart API client
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("cutsim-bench"));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base })
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        request.url(self.base.as_str())
    }

    /// GET a payload; non-2xx statuses and malformed bodies are errors
    pub fn fetch(&self, request: &ApiRequest) -> Result<ChartPayload> {
        let url = self.url_for(request);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Core(cutsim_bench_core::Error::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            }));
        }

        let body = response.text()?;
        Ok(ChartPayload::from_json(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutsim_bench_core::{MetricType, RevisionRange};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer a single request on a local port with `response`
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}", addr)
    }

    fn local_client(base_url: &str) -> ApiClient {
        ApiClient {
            client: reqwest::blocking::Client::builder().no_proxy().build().unwrap(),
            base: Url::parse(base_url).unwrap(),
        }
    }

    #[test]
    fn test_url_for_joins_base() {
        let client = ApiClient::new("http://bench.local:8000").unwrap();

        assert_eq!(
            client.url_for(&ApiRequest::for_chart_id("plate.csb")),
            "http://bench.local:8000/api/file/csb?id=%25plate.csb"
        );
        assert_eq!(
            client.url_for(&ApiRequest::summary(
                MetricType::CsbMemory,
                RevisionRange::new(10, 20)
            )),
            "http://bench.local:8000/api/all/csb_memory?r1=10&r2=20"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(Error::Url(_))));
    }

    #[test]
    fn test_server_error_status() {
        let base = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let result = local_client(&base).fetch(&ApiRequest::for_chart_id("plate.csb"));

        match result {
            Err(Error::Core(cutsim_bench_core::Error::Http {
                status,
                status_text,
            })) => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
            }
            other => panic!("expected an HTTP error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 8\r\nConnection: close\r\n\r\nnot json",
        );
        let result = local_client(&base).fetch(&ApiRequest::summary(
            MetricType::IniCutTime,
            RevisionRange::new(1, 2),
        ));

        assert!(matches!(
            result,
            Err(Error::Core(cutsim_bench_core::Error::Json(_)))
        ));
    }
}
