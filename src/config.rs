// Engine configuration

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Journey connection limits, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionRules {
    pub domestic_connection_secs: i64,
    pub international_connection_secs: i64,
    pub special_carrier: String,
    pub special_carrier_connection_secs: i64,
    // Carriers allowed the extended domestic limit when the journey has international travel
    pub extended_connection_carriers: Vec<String>,
    pub extended_connection_secs: i64,
}

impl Default for ConnectionRules {
    fn default() -> Self {
        Self {
            domestic_connection_secs: 4 * 3600,
            international_connection_secs: 24 * 3600,
            special_carrier: "AA".to_string(),
            special_carrier_connection_secs: 13 * 3600,
            extended_connection_carriers: vec!["DL".to_string(), "NW".to_string()],
            extended_connection_secs: 24 * 3600,
        }
    }
}

impl ConnectionRules {
    pub fn domestic_connection(&self) -> Duration {
        Duration::seconds(self.domestic_connection_secs)
    }

    pub fn international_connection(&self) -> Duration {
        Duration::seconds(self.international_connection_secs)
    }

    pub fn special_carrier_connection(&self) -> Duration {
        Duration::seconds(self.special_carrier_connection_secs)
    }

    pub fn extended_connection(&self) -> Duration {
        Duration::seconds(self.extended_connection_secs)
    }

    pub fn has_extended_connection(&self, carrier: &str) -> bool {
        self.extended_connection_carriers
            .iter()
            .any(|listed| listed == carrier)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("domestic_connection_secs", self.domestic_connection_secs),
            (
                "international_connection_secs",
                self.international_connection_secs,
            ),
            (
                "special_carrier_connection_secs",
                self.special_carrier_connection_secs,
            ),
            ("extended_connection_secs", self.extended_connection_secs),
        ];

        for (field, value) in limits {
            if value <= 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Build class of service lists, not only availability breaks
    pub request_class_of_service: bool,
    // Upper bound on records cloned in one transaction; None means unbounded
    pub max_cos_records: Option<usize>,
    pub connection: ConnectionRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            request_class_of_service: true,
            max_cos_records: None,
            connection: ConnectionRules::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cos_records == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_cos_records",
                reason: "must be greater than zero when set".to_string(),
            });
        }

        self.connection.validate()
    }
}
