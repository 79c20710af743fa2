use reqwest::header;
use serde::Deserialize;

use super::processor::{PayoutEntry, PayoutIndex};

/* API contains the logic for calling external APIs.
 * Links the bot's logic with the payouts leaderboard on the internet.
 * Called once at startup by the dispatcher.
 */

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Request error: {0}")]
    RequestError(reqwest::Error),
    #[error("Unexpected response status: {0}")]
    StatusError(reqwest::StatusCode),
    #[error("Invalid payouts payload: {0}")]
    ParseError(serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(request_error: reqwest::Error) -> ApiError {
        ApiError::RequestError(request_error)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(parse_error: serde_json::Error) -> ApiError {
        ApiError::ParseError(parse_error)
    }
}

#[derive(Deserialize, Debug)]
struct PayoutsPayload {
    #[serde(rename = "default")]
    payouts: Vec<PayoutEntry>,
}

// Decodes a leaderboard response body into its entries.
pub fn parse_payouts(body: &str) -> Result<Vec<PayoutEntry>, ApiError> {
    let payload: PayoutsPayload = serde_json::from_str(body)?;
    Ok(payload.payouts)
}

/* Fetches the leaderboard and builds the payout index from it.
 * Any failure here is fatal for the bot, so nothing is retried.
 */
pub async fn fetch_payouts(url: &str) -> Result<PayoutIndex, ApiError> {
    let mut h = header::HeaderMap::new();
    h.insert(
        "Accept",
        header::HeaderValue::from_static("application/json"),
    );

    let client = reqwest::Client::builder().default_headers(h).build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::StatusError(status));
    }

    let body = response.text().await?;
    let entries = parse_payouts(&body)?;
    log::debug!("Received {} leaderboard entries from {url}", entries.len());

    Ok(PayoutIndex::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;
    use crate::bot::processor::UNKNOWN_USERNAME;

    const PAYLOAD: &str = r#"{
        "default": [
            {"rank": 1, "username": "__unknown__", "user_id": null, "gross_earning": 5000000.0, "pfp": ""},
            {"rank": 2, "username": "FooBar", "user_id": "12345", "gross_earning": 1234.5, "pfp": "https://cdn.example.com/foobar.png"},
            {"rank": 3, "username": "Baz", "user_id": 678.0, "gross_earning": 99.99, "pfp": "https://cdn.example.com/baz.png"}
        ]
    }"#;

    #[test]
    fn test_parse_payouts() {
        let entries = parse_payouts(PAYLOAD).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].username, UNKNOWN_USERNAME);
        assert_eq!(entries[1].username, "FooBar");
        assert_eq!(entries[1].gross_earning, 1234.5);
        assert_eq!(entries[2].user_id.resolve(), Some("678".to_string()));
    }

    #[test]
    fn test_parse_payouts_into_index() {
        let index = PayoutIndex::from_entries(parse_payouts(PAYLOAD).unwrap());
        assert_eq!(index.len(), 2);
        assert!(index.find("foobar").is_some());
        assert!(index.find("baz").is_some());
    }

    #[test]
    fn test_parse_payouts_missing_key() {
        let result = parse_payouts(r#"{"payouts": []}"#);
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_parse_payouts_invalid_json() {
        let result = parse_payouts("<html>Service Unavailable</html>");
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_parse_payouts_null_fields() {
        let body = r#"{"default": [
            {"rank": 1, "username": "__unknown__", "user_id": null, "gross_earning": 10.0, "pfp": null},
            {"rank": null, "username": "FooBar", "user_id": "12345", "gross_earning": null, "pfp": "https://cdn.example.com/foobar.png"}
        ]}"#;

        let index = PayoutIndex::from_entries(parse_payouts(body).unwrap());
        assert_eq!(index.len(), 1);
        let found = index.find("foobar").unwrap();
        assert_eq!(found.rank, 0);
        assert_eq!(found.gross_earning, 0.0);
        assert_eq!(found.user_id.resolve(), Some("12345".to_string()));
    }

    // Serves a single HTTP response on a local port, returns the url to fetch.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/api/payouts")
    }

    #[tokio::test]
    async fn test_fetch_payouts_success() {
        let url = serve_once("HTTP/1.1 200 OK", PAYLOAD).await;

        let index = fetch_payouts(&url).await.unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.find(UNKNOWN_USERNAME).is_none());
        assert_eq!(index.find("FOOBAR").unwrap().username, "FooBar");
    }

    #[tokio::test]
    async fn test_fetch_payouts_error_status() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;

        let fetch = fetch_payouts(&url).await;
        match fetch {
            Err(ApiError::StatusError(status)) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("Expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_payouts_unreachable() {
        let fetch = fetch_payouts("http://127.0.0.1:1/api/payouts").await;
        assert!(matches!(fetch, Err(ApiError::RequestError(_))));
    }
}
