use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Circuit;
use crate::utils::flags::nationality_flag;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    #[serde(rename = "raceName")]
    pub race_name: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
}

impl Race {
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Race {
            race_name: value.get("raceName")?.as_str()?.to_string(),
            date: value.get("date")?.as_str()?.to_string(),
            time: value.get("time").and_then(Value::as_str).map(str::to_string),
            circuit: Circuit::from_value(value.get("Circuit")?)?,
        })
    }
}

/// One classified entrant of a race, normalized for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    pub position: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    pub nationality: String,
    pub flag: String,
    pub constructor: String,
    #[serde(rename = "time")]
    pub time_or_status: String,
}

impl RaceResult {
    /// Builds a result row from one upstream `Results` entry. The finishing
    /// time takes priority; the race status (DNF, DSQ, ...) stands in when
    /// no time was set; `"N/A"` covers records carrying neither. Rows with
    /// no driver block at all yield `None` and are skipped by the caller.
    pub fn from_value(value: &Value) -> Option<Self> {
        let driver = value.get("Driver")?;
        let nationality = driver
            .get("nationality")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();
        let time_or_status = value
            .get("Time")
            .and_then(|t| t.get("time"))
            .and_then(Value::as_str)
            .or_else(|| value.get("status").and_then(Value::as_str))
            .unwrap_or("N/A")
            .to_string();
        Some(RaceResult {
            position: value
                .get("position")
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            given_name: driver.get("givenName")?.as_str()?.to_string(),
            family_name: driver.get("familyName")?.as_str()?.to_string(),
            flag: nationality_flag(&nationality).to_string(),
            nationality,
            constructor: value
                .get("Constructor")
                .and_then(|c| c.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            time_or_status,
        })
    }
}
