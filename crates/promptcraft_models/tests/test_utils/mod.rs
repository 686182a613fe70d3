//! Test utilities for completion client tests.
//!
//! Provides a one-shot HTTP server that answers with a canned response and
//! hands back the raw request it received.

use promptcraft_models::{GroqClient, ProviderConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server bound to a local port.
pub struct CannedServer {
    /// Chat-completion URL pointing at the server
    pub url: String,
    /// Resolves to the raw request text once one was served
    pub request: JoinHandle<String>,
}

/// Serves exactly one request with `status` and `body`.
pub async fn serve_once(status: u16, body: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let request = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Accept failed");
        let raw = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Write failed");
        socket.shutdown().await.ok();
        raw
    });

    CannedServer {
        url: format!("http://{}/openai/v1/chat/completions", addr),
        request,
    }
}

/// Accepts one connection and never answers.
pub async fn serve_silence() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Accept failed");
        let _ = read_request(&mut socket).await;
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
    });

    (format!("http://{}/v1/chat/completions", addr), handle)
}

/// Client pointed at `url` with a test credential.
pub fn client_for(url: &str, timeout_secs: u64) -> GroqClient {
    let config = ProviderConfig::builder()
        .api_key("test-key")
        .endpoint(url)
        .timeout_secs(timeout_secs)
        .build()
        .expect("Failed to build provider config");
    GroqClient::new(config).expect("Failed to build client")
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.expect("Read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
