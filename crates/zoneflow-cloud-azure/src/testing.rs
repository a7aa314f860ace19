//! Local HTTP stub for exercising the REST paths in tests
//!
//! Answers each incoming connection with the next canned response, in
//! order. Responses carry `Connection: close`, so a client opens one
//! connection per request and the response list maps one-to-one onto
//! the requests a test makes.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serve `(status, body)` pairs on an ephemeral local port and return the
/// `http://...` base URL.
pub(crate) async fn serve_responses(responses: Vec<(u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let base = format!("http://{}", listener.local_addr().expect("stub addr"));

    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            read_request(&mut socket).await;

            let reason = match status {
                200 => "OK",
                202 => "Accepted",
                404 => "Not Found",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    base
}

/// Read up to the end of the request headers (requests here carry no body
/// the stub needs to look at).
async fn read_request(socket: &mut TcpStream) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => {
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|window| window == b"\r\n\r\n") {
                    return;
                }
            }
        }
    }
}
