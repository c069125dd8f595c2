use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Deserialize)]
struct KeyResponse {
    api_key: String,
}

/// One-shot key bootstrap: POST to the key-generation endpoint, no body, no
/// auth, and hand back the issued key. Persisting it is the caller's job.
pub async fn generate_api_key(base_url: &str) -> Result<String, Error> {
    let response = reqwest::Client::new()
        .post(format!("{base_url}/generate_api_key"))
        .send()
        .await?
        .error_for_status()?;

    let body: KeyResponse = response.json().await?;
    Ok(body.api_key)
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn returns_the_issued_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/generate_api_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"api_key": "abc123xyz"}"#)
            .create_async()
            .await;

        let key = generate_api_key(&server.url()).await.unwrap();
        mock.assert();

        assert_eq!(key, "abc123xyz");
    }

    #[tokio::test]
    async fn fails_on_a_non_2xx_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/generate_api_key")
            .with_status(503)
            .create_async()
            .await;

        assert!(generate_api_key(&server.url()).await.is_err());
    }
}
