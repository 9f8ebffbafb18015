use std::time::Duration;

use http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::{Circuit, ConstructorStanding, Driver, DriverStanding, Race, RaceResult};

pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure at the upstream boundary. Legitimately empty data is not an
/// error; the fetch methods return empty collections for that.
#[derive(Debug, Error)]
pub enum ErgastError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the Jolpica-Ergast F1 API. All responses arrive wrapped in an
/// `MRData` envelope whose nesting levels may be absent at any depth, so
/// every accessor indexes defensively and treats missing structure as empty.
#[derive(Clone)]
pub struct ErgastClient {
    http: Client,
    base_url: String,
}

impl ErgastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build http client");
        ErgastClient {
            http,
            base_url: base_url.into(),
        }
    }

    async fn get(&self, path: &str) -> Result<Value, ErgastError> {
        let res = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(ErgastError::Status(res.status()));
        }
        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Circuits raced in a season, in upstream list order.
    pub async fn circuits(&self, season: &str) -> Result<Vec<Circuit>, ErgastError> {
        let data = self.get(&format!("{season}/circuits")).await?;
        let circuits = &data["MRData"]["CircuitTable"]["Circuits"];
        Ok(collect_rows(circuits, Circuit::from_value, "circuit"))
    }

    /// Classified results for the race held at `circuit_id` in `season`.
    /// A season in which that circuit held no race comes back empty.
    pub async fn circuit_results(
        &self,
        season: &str,
        circuit_id: &str,
    ) -> Result<Vec<RaceResult>, ErgastError> {
        let data = self
            .get(&format!("{season}/circuits/{circuit_id}/results"))
            .await?;
        let results = &data["MRData"]["RaceTable"]["Races"][0]["Results"];
        Ok(collect_rows(results, RaceResult::from_value, "result"))
    }

    /// Full race calendar of a season.
    pub async fn races(&self, season: &str) -> Result<Vec<Race>, ErgastError> {
        let data = self.get(&format!("{season}/races")).await?;
        let races = &data["MRData"]["RaceTable"]["Races"];
        Ok(collect_rows(races, Race::from_value, "race"))
    }

    pub async fn driver_standings(
        &self,
        season: &str,
    ) -> Result<Vec<DriverStanding>, ErgastError> {
        let data = self.get(&format!("{season}/driverStandings")).await?;
        let standings = &data["MRData"]["StandingsTable"]["StandingsLists"][0]["DriverStandings"];
        Ok(collect_rows(standings, DriverStanding::from_value, "driver standing"))
    }

    pub async fn constructor_standings(
        &self,
        season: &str,
    ) -> Result<Vec<ConstructorStanding>, ErgastError> {
        let data = self.get(&format!("{season}/constructorStandings")).await?;
        let standings =
            &data["MRData"]["StandingsTable"]["StandingsLists"][0]["ConstructorStandings"];
        Ok(collect_rows(
            standings,
            ConstructorStanding::from_value,
            "constructor standing",
        ))
    }

    /// Looks a driver up by upstream id, e.g. `alonso`.
    pub async fn driver(&self, driver_id: &str) -> Result<Option<Driver>, ErgastError> {
        let data = self.get(&format!("drivers/{driver_id}")).await?;
        let driver = &data["MRData"]["DriverTable"]["Drivers"][0];
        Ok(Driver::from_value(driver))
    }
}

/// Normalizes a list node of the envelope. A missing or non-array node is
/// empty data; individual rows that fail to normalize are skipped so one
/// malformed record cannot discard the rest of the list.
fn collect_rows<T>(node: &Value, row: fn(&Value) -> Option<T>, kind: &str) -> Vec<T> {
    let Some(items) = node.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let parsed = row(item);
            if parsed.is_none() {
                warn!("skipping malformed {kind} entry");
            }
            parsed
        })
        .collect()
}
