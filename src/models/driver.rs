use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::flags::nationality_flag;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub nationality: String,
    pub flag: String,
}

impl Driver {
    pub fn from_value(value: &Value) -> Option<Self> {
        let nationality = value
            .get("nationality")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();
        Some(Driver {
            given_name: value.get("givenName")?.as_str()?.to_string(),
            family_name: value.get("familyName")?.as_str()?.to_string(),
            date_of_birth: value
                .get("dateOfBirth")
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            flag: nationality_flag(&nationality).to_string(),
            nationality,
        })
    }
}
