use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::flags::nationality_flag;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverStanding {
    pub position: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    pub nationality: String,
    pub flag: String,
    pub points: String,
    pub team: String,
}

impl DriverStanding {
    /// Entries missing the driver block or a points total are dropped;
    /// the remaining entries of the page still render.
    pub fn from_value(value: &Value) -> Option<Self> {
        let driver = value.get("Driver")?;
        let nationality = driver
            .get("nationality")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();
        Some(DriverStanding {
            position: value
                .get("position")
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            given_name: driver.get("givenName")?.as_str()?.to_string(),
            family_name: driver.get("familyName")?.as_str()?.to_string(),
            flag: nationality_flag(&nationality).to_string(),
            nationality,
            points: value.get("points")?.as_str()?.to_string(),
            team: value
                .get("Constructors")
                .and_then(Value::as_array)
                .and_then(|c| c.first())
                .and_then(|c| c.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorStanding {
    pub position: String,
    pub name: String,
    pub nationality: String,
    pub flag: String,
    pub points: String,
}

impl ConstructorStanding {
    pub fn from_value(value: &Value) -> Option<Self> {
        let constructor = value.get("Constructor")?;
        let nationality = constructor
            .get("nationality")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();
        Some(ConstructorStanding {
            position: value
                .get("position")
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            name: constructor.get("name")?.as_str()?.to_string(),
            flag: nationality_flag(&nationality).to_string(),
            nationality,
            points: value.get("points")?.as_str()?.to_string(),
        })
    }
}
