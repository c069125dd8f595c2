use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tokio::time;

use crate::client::Client;
use crate::error::Error;

pub const BASE_URL: &str = "https://fbrapi.com";

/// Pause before every request; the API allows one request per 3 seconds.
pub const REQUEST_DELAY: Duration = Duration::from_secs(3);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct FbrClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    delay: Duration,
}

impl FbrClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        Self {
            http: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(timeout)
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("http client build"),
            api_key: api_key.into(),
            base_url: BASE_URL.into(),
            delay: REQUEST_DELAY,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shared executor: wait out the rate-limit delay, then GET the endpoint
    /// with whichever params have values. Non-2xx never yields a body.
    async fn request(&self, endpoint: &str, params: &[(&str, Option<String>)]) -> Result<Value, Error> {
        time::sleep(self.delay).await;

        let query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
            .collect();

        let response = self
            .http
            .get(format!("{}{}", self.base_url, endpoint))
            .query(&query)
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("GET {endpoint} failed with HTTP {status}");
            return Err(Error::Status {
                endpoint: endpoint.into(),
                status,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Client for FbrClient {
    async fn get_countries(&self) -> Result<Value, Error> {
        self.request("/countries", &[]).await
    }

    async fn get_leagues(&self, country_code: &str) -> Result<Value, Error> {
        let params = [("country_code", Some(country_code.to_string()))];
        self.request("/leagues", &params).await
    }

    async fn get_league_seasons(&self, league_id: u32) -> Result<Value, Error> {
        let params = [("league_id", Some(league_id.to_string()))];
        self.request("/league-seasons", &params).await
    }

    async fn get_league_standings(
        &self,
        league_id: u32,
        season_id: Option<&str>,
    ) -> Result<Value, Error> {
        let params = [
            ("league_id", Some(league_id.to_string())),
            ("season_id", season_id.map(String::from)),
        ];
        self.request("/league-standings", &params).await
    }

    async fn get_team_season_stats(
        &self,
        league_id: u32,
        season_id: Option<&str>,
    ) -> Result<Value, Error> {
        let params = [
            ("league_id", Some(league_id.to_string())),
            ("season_id", season_id.map(String::from)),
        ];
        self.request("/team-season-stats", &params).await
    }

    async fn get_player_season_stats(
        &self,
        team_id: &str,
        league_id: u32,
        season_id: Option<&str>,
    ) -> Result<Value, Error> {
        let params = [
            ("team_id", Some(team_id.to_string())),
            ("league_id", Some(league_id.to_string())),
            ("season_id", season_id.map(String::from)),
        ];
        self.request("/player-season-stats", &params).await
    }

    async fn get_matches(
        &self,
        league_id: Option<u32>,
        team_id: Option<&str>,
        season_id: Option<&str>,
    ) -> Result<Value, Error> {
        let params = [
            ("team_id", team_id.map(String::from)),
            ("league_id", league_id.map(|id| id.to_string())),
            ("season_id", season_id.map(String::from)),
        ];
        self.request("/matches", &params).await
    }

    async fn get_team_match_stats(
        &self,
        team_id: &str,
        league_id: u32,
        season_id: &str,
    ) -> Result<Value, Error> {
        let params = [
            ("team_id", Some(team_id.to_string())),
            ("league_id", Some(league_id.to_string())),
            ("season_id", Some(season_id.to_string())),
        ];
        self.request("/team-match-stats", &params).await
    }

    async fn get_all_players_match_stats(&self, match_id: &str) -> Result<Value, Error> {
        let params = [("match_id", Some(match_id.to_string()))];
        self.request("/all-players-match-stats", &params).await
    }
}
