use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Circuit {
    /// Builds a circuit from one upstream `Circuits` entry. Entries without
    /// an id or display name are unusable and yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let location = value.get("Location");
        Some(Circuit {
            circuit_id: value.get("circuitId")?.as_str()?.to_string(),
            circuit_name: value.get("circuitName")?.as_str()?.to_string(),
            locality: location
                .and_then(|l| l.get("locality"))
                .and_then(Value::as_str)
                .map(str::to_string),
            country: location
                .and_then(|l| l.get("country"))
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}
