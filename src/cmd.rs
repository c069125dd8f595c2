use clap::{Args, Parser};
use serde_json::Value;

use crate::api_client::{FbrClient, BASE_URL};
use crate::client::Client;
use crate::config;
use crate::keygen;

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Request a fresh API key and store it in .env
    GenerateKey,
    /// Exercise one endpoint, or a basic smoke sequence when none is named
    Probe(ProbeArgs),
}

#[derive(Args, Debug, Default)]
pub struct ProbeArgs {
    /// Endpoint name as it appears in the URL, e.g. `league-standings`
    pub endpoint: Option<String>,

    #[arg(long, default_value_t = 9)]
    pub league_id: u32,

    #[arg(long, default_value = "ENG")]
    pub country_code: String,

    #[arg(long)]
    pub season_id: Option<String>,

    #[arg(long)]
    pub team_id: Option<String>,

    #[arg(long)]
    pub match_id: Option<String>,
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Cmd::GenerateKey => generate_key().await,
            Cmd::Probe(args) => probe(args).await,
        }
    }
}

async fn generate_key() -> anyhow::Result<()> {
    let key = keygen::generate_api_key(BASE_URL).await?;
    println!("API key generated: {key}");

    let path = config::env_file();
    config::store_api_key(&path, &key)?;
    println!("saved to {}", path.display());
    Ok(())
}

async fn probe(args: ProbeArgs) -> anyhow::Result<()> {
    let client = FbrClient::new(config::api_key()?);

    match args.endpoint.as_deref() {
        Some(endpoint) => {
            if let Some(result) = probe_endpoint(&client, endpoint, &args).await? {
                print_summary(&result);
            }
        }
        None => {
            println!("running basic smoke sequence...");
            for endpoint in ["countries", "leagues", "league-seasons"] {
                if let Some(result) = probe_endpoint(&client, endpoint, &args).await? {
                    print_summary(&result);
                }
            }
            println!("smoke sequence completed");
        }
    }
    Ok(())
}

/// Run one endpoint by its URL name. Unknown names and missing required flags
/// are reported and skipped; an upstream non-2xx is reported the same way.
/// Only transport failures bubble up.
async fn probe_endpoint(
    client: &impl Client,
    endpoint: &str,
    args: &ProbeArgs,
) -> anyhow::Result<Option<Value>> {
    println!("testing {endpoint}...");
    let season = args.season_id.as_deref();

    let result = match endpoint {
        "countries" => client.get_countries().await,
        "leagues" => client.get_leagues(&args.country_code).await,
        "league-seasons" => client.get_league_seasons(args.league_id).await,
        "league-standings" => client.get_league_standings(args.league_id, season).await,
        "team-season-stats" => client.get_team_season_stats(args.league_id, season).await,
        "player-season-stats" => match args.team_id.as_deref() {
            Some(team) => {
                client
                    .get_player_season_stats(team, args.league_id, season)
                    .await
            }
            None => {
                log::error!("player-season-stats needs --team-id");
                return Ok(None);
            }
        },
        "matches" => {
            client
                .get_matches(Some(args.league_id), args.team_id.as_deref(), season)
                .await
        }
        "team-match-stats" => match (args.team_id.as_deref(), season) {
            (Some(team), Some(season)) => {
                client
                    .get_team_match_stats(team, args.league_id, season)
                    .await
            }
            _ => {
                log::error!("team-match-stats needs --team-id and --season-id");
                return Ok(None);
            }
        },
        "all-players-match-stats" => match args.match_id.as_deref() {
            Some(match_id) => client.get_all_players_match_stats(match_id).await,
            None => {
                log::error!("all-players-match-stats needs --match-id");
                return Ok(None);
            }
        },
        other => {
            log::error!("unknown endpoint: {other}");
            return Ok(None);
        }
    };

    match result {
        Ok(value) => {
            println!("success, found data");
            Ok(Some(value))
        }
        Err(e) if e.is_status() => {
            println!("failed to get data: {e}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_summary(result: &Value) {
    let Some(map) = result.as_object() else {
        return;
    };
    println!("response keys: {:?}", keys_of(map));

    match map.get("data") {
        Some(Value::Array(items)) => {
            println!("data items: {}", items.len());
            if let Some(Value::Object(first)) = items.first() {
                println!("first item keys: {:?}", keys_of(first));
            }
        }
        Some(Value::Object(data)) => {
            println!("data keys: {:?}", keys_of(data));
        }
        _ => {}
    }
}

fn keys_of(map: &serde_json::Map<String, Value>) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use mockito::Matcher;

    use super::*;

    fn probe_args(endpoint: &str) -> ProbeArgs {
        ProbeArgs {
            endpoint: Some(endpoint.to_string()),
            league_id: 9,
            country_code: "ENG".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn an_unknown_endpoint_is_a_no_op() {
        // never reaches the network, so the base url does not matter
        let client = FbrClient::new("asdf1234").with_delay(Duration::ZERO);
        let args = probe_args("nonsense");

        let result = probe_endpoint(&client, "nonsense", &args).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn a_missing_required_flag_is_a_no_op() {
        let client = FbrClient::new("asdf1234").with_delay(Duration::ZERO);
        let args = probe_args("all-players-match-stats");

        let result = probe_endpoint(&client, "all-players-match-stats", &args)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn probing_leagues_hits_the_leagues_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/leagues")
            .match_query(Matcher::Exact("country_code=ENG".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": [{"league_id": 9, "competition_name": "Premier League"}]}"#)
            .create_async()
            .await;

        let client = FbrClient::new("asdf1234")
            .with_base_url(server.url())
            .with_delay(Duration::ZERO);
        let args = probe_args("leagues");

        let result = probe_endpoint(&client, "leagues", &args).await.unwrap();
        mock.assert();

        assert!(result.is_some());
    }

    #[tokio::test]
    async fn an_upstream_error_is_reported_and_skipped() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/countries")
            .with_status(404)
            .create_async()
            .await;

        let client = FbrClient::new("asdf1234")
            .with_base_url(server.url())
            .with_delay(Duration::ZERO);
        let args = probe_args("countries");

        let result = probe_endpoint(&client, "countries", &args).await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn probe_flags_parse() {
        let cmd = Cmd::try_parse_from([
            "fbrapi",
            "probe",
            "league-standings",
            "--league-id",
            "12",
            "--season-id",
            "2023-2024",
        ])
        .unwrap();

        match cmd {
            Cmd::Probe(args) => {
                assert_eq!(args.endpoint.as_deref(), Some("league-standings"));
                assert_eq!(args.league_id, 12);
                assert_eq!(args.season_id.as_deref(), Some("2023-2024"));
                assert_eq!(args.country_code, "ENG");
            }
            other => panic!("expected probe, got {other:?}"),
        }
    }
}
