use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;

/// One method per FBR endpoint. Responses are passed through as raw JSON;
/// the upstream API owns the schema.
#[async_trait]
pub trait Client {
    /// List of available countries.
    async fn get_countries(&self) -> Result<Value, Error>;

    /// Leagues available in a country.
    async fn get_leagues(&self, country_code: &str) -> Result<Value, Error>;

    /// Seasons on record for a league.
    async fn get_league_seasons(&self, league_id: u32) -> Result<Value, Error>;

    /// Standings for a league; latest season when `season_id` is `None`.
    async fn get_league_standings(
        &self,
        league_id: u32,
        season_id: Option<&str>,
    ) -> Result<Value, Error>;

    /// Season-level stats for every team in a league.
    async fn get_team_season_stats(
        &self,
        league_id: u32,
        season_id: Option<&str>,
    ) -> Result<Value, Error>;

    /// Season stats for every player in a team.
    async fn get_player_season_stats(
        &self,
        team_id: &str,
        league_id: u32,
        season_id: Option<&str>,
    ) -> Result<Value, Error>;

    /// Match data, optionally filtered by league, team and season.
    async fn get_matches(
        &self,
        league_id: Option<u32>,
        team_id: Option<&str>,
        season_id: Option<&str>,
    ) -> Result<Value, Error>;

    /// Match-level stats for one team across a season.
    async fn get_team_match_stats(
        &self,
        team_id: &str,
        league_id: u32,
        season_id: &str,
    ) -> Result<Value, Error>;

    /// Stats for every player that appeared in a match.
    async fn get_all_players_match_stats(&self, match_id: &str) -> Result<Value, Error>;
}
