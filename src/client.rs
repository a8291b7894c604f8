//! HTTP client for the remote analysis service

use crate::constants::{ANALYZE_PATH, IMAGE_FIELD};
use crate::error::AnalysisError;
use crate::types::{AnalysisResult, SelectedFile};
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

#[derive(Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    url: String,
}

impl AnalyzerClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: analyze_url(endpoint),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Upload `file` as multipart field `image` and decode the JSON reply.
    pub async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, AnalysisError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| AnalysisError::Request(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!(url = %self.url, name = %file.name, size = file.size, "Sending analysis request");
        let response = self.http.post(&self.url).multipart(form).send().await?;

        let status = response.status();
        debug!(status = %status, "Analysis response received");
        if !status.is_success() {
            return Err(AnalysisError::Status(status.as_u16()));
        }

        let result: AnalysisResult = response.json().await?;
        info!(
            predictions = result.predictions.len(),
            recommendations = result.betting_recommendations.as_ref().map_or(0, Vec::len),
            "Analysis complete"
        );
        Ok(result)
    }
}

fn analyze_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim().trim_end_matches('/'), ANALYZE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one request with a canned response and hand back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        (format!("http://{addr}"), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return buf;
            }
            buf.extend_from_slice(&chunk[..n]);
            let Some(head_end) = find(&buf, b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let body = &buf[head_end + 4..];
            if let Some(len) = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
            {
                if body.len() >= len {
                    return buf;
                }
            } else if head.contains("transfer-encoding: chunked") {
                if find(body, b"0\r\n\r\n").is_some() {
                    return buf;
                }
            } else {
                return buf;
            }
        }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn photo() -> SelectedFile {
        SelectedFile::new("match.jpg", "image/jpeg", b"\xff\xd8\xff\xe0fake".to_vec())
    }

    #[test]
    fn url_joins_endpoint_and_route() {
        assert_eq!(analyze_url("http://host:5000"), "http://host:5000/api/analyze");
        assert_eq!(analyze_url("http://host:5000/ "), "http://host:5000/api/analyze");
    }

    #[tokio::test]
    async fn posts_multipart_image_and_decodes_result() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"predictions":[{"team":"Reds","confidence":80,"reason":"Form"}],"betting_recommendations":["Back Reds"]}"#,
        )
        .await;

        let result = AnalyzerClient::new(&endpoint).analyze(&photo()).await.unwrap();
        assert_eq!(result.predictions[0].team, "Reds");
        assert_eq!(result.predictions[0].confidence.value, Some(80.0));

        let request = String::from_utf8_lossy(&server.await.unwrap()).to_string();
        assert!(request.starts_with("POST /api/analyze "));
        assert!(request.to_lowercase().contains("content-type: multipart/form-data"));
        assert!(request.contains(r#"name="image""#));
        assert!(request.contains(r#"filename="match.jpg""#));
        assert!(request.contains("image/jpeg"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (endpoint, _server) = serve_once("500 Internal Server Error", "{}").await;
        let err = AnalyzerClient::new(&endpoint).analyze(&photo()).await.unwrap_err();
        assert_eq!(err, AnalysisError::Status(500));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (endpoint, _server) = serve_once("200 OK", "not json").await;
        let err = AnalyzerClient::new(&endpoint).analyze(&photo()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }

    #[tokio::test]
    async fn bad_mime_is_a_request_error() {
        let file = SelectedFile::new("odd.png", "not a mime", vec![1, 2, 3]);
        let err = AnalyzerClient::new("http://127.0.0.1:9").analyze(&file).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Request(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_service_falls_back_to_demo() {
        // Bind then drop to get a port nothing listens on.
        let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
        let result = AnalyzerClient::new(&format!("http://{addr}")).analyze(&photo()).await;
        assert!(matches!(result, Err(AnalysisError::Network(_))));

        let phase = crate::demo::resolve(result, true);
        match phase {
            crate::types::Phase::Done(outcome) => {
                assert!(outcome.is_demo());
                assert_eq!(outcome.result(), &crate::demo::demo_result());
            }
            other => panic!("expected demo outcome, got {other:?}"),
        }
    }
}
