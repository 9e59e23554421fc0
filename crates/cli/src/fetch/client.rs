use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use gdpchart_data::raw::RawPayload;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use tracing::debug;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

pub(crate) struct GdpClient {
    client: Client,
}

impl GdpClient {
    pub fn new() -> Self {
        let client = Client::new();
        Self { client }
    }

    #[cfg(test)]
    fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn get_payload(&self, url: &str) -> Result<RawPayload> {
        let response = self.get(url)?;
        let payload: RawPayload = response.json().map_err(FetchError::Decode)?;

        debug!(records = payload.data.len(), "received GDP payload");
        Ok(payload)
    }

    pub fn download(&self, url: &str, path: &Path) -> Result<u64> {
        let mut response = self.get(url)?;
        let mut writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let bytes = io::copy(&mut response, &mut writer)?;
        Ok(bytes)
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!(url, "sending GET request");
        let response = self.client.get(url).send()?;

        match response.status() {
            StatusCode::OK => Ok(response),
            status_code => {
                let message = response.text()?;
                let error = FetchError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;
    use std::thread::JoinHandle;

    use super::*;

    // Answers a single request with the given status line and body.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/GDP-data.json", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buffer = [0u8; 4096];
            let _ = stream.read(&mut buffer).unwrap();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        (url, handle)
    }

    fn local_client() -> GdpClient {
        GdpClient::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[test]
    fn get_payload_decodes_the_document() -> Result<()> {
        let (url, handle) = serve_once("200 OK", r#"{ "data": [["1947-01-01", 243.1]] }"#);

        let payload = local_client().get_payload(&url)?;
        handle.join().unwrap();

        assert_eq!(payload.data.len(), 1);
        assert_eq!(payload.data[0].0, "1947-01-01");
        Ok(())
    }

    #[test]
    fn get_payload_rejects_other_documents() {
        let (url, handle) = serve_once("200 OK", r#"{ "rows": [] }"#);

        let result = local_client().get_payload(&url);
        handle.join().unwrap();

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn get_payload_surfaces_error_status() {
        let (url, handle) = serve_once("404 Not Found", "missing");

        let result = local_client().get_payload(&url);
        handle.join().unwrap();

        match result {
            Err(FetchError::Response {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, StatusCode::NOT_FOUND);
                assert_eq!(message, "missing");
            }
            other => panic!("expected a response error, got {other:?}"),
        }
    }
}
