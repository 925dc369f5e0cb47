use crate::{error::ConfigError, rule::RuleConfig};
use ltl_rules::{parse_counts, NeighborhoodType, RuleStringError};
use serde::{Deserialize, Serialize};

/// A set of conditions in a rules file.
///
/// Either a list of counts, or a string such as `"2-5,7"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Counts {
    /// A list of counts.
    List(Vec<u32>),
    /// Counts and ranges of counts separated by commas.
    Text(String),
}

impl Counts {
    fn to_vec(&self) -> Result<Vec<u32>, RuleStringError> {
        match self {
            Self::List(counts) => Ok(counts.clone()),
            Self::Text(text) => parse_counts(text),
        }
    }
}

/// The JSON rules file.
///
/// ```json
/// {
///     "Rr": 5,
///     "Cc": 2,
///     "Mm": true,
///     "Nn": "m",
///     "Bb": "34-45",
///     "Ss": "34-58"
/// }
/// ```
///
/// `Nn` is `"m"` for the Moore neighborhood and `"n"` for the von Neumann
/// neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesFile {
    /// Radius of the neighborhood.
    #[serde(rename = "Rr")]
    pub radius: u32,

    /// Number of states.
    #[serde(rename = "Cc")]
    pub states: u32,

    /// Whether a cell counts itself as a neighbor.
    #[serde(rename = "Mm")]
    pub include_center: bool,

    /// Neighborhood letter.
    #[serde(rename = "Nn")]
    pub neighborhood: String,

    /// Birth conditions.
    #[serde(rename = "Bb")]
    pub birth: Counts,

    /// Survival conditions.
    #[serde(rename = "Ss")]
    pub survival: Counts,
}

impl TryFrom<RulesFile> for RuleConfig {
    type Error = ConfigError;

    fn try_from(file: RulesFile) -> Result<Self, Self::Error> {
        let neighborhood: NeighborhoodType = file
            .neighborhood
            .parse()
            .map_err(|_| RuleStringError::UnsupportedNeighborhood)?;

        Self::new(
            file.radius,
            file.states,
            file.survival.to_vec()?,
            file.birth.to_vec()?,
            file.include_center,
            neighborhood,
        )
    }
}

impl From<RuleConfig> for RulesFile {
    fn from(rule: RuleConfig) -> Self {
        Self {
            radius: rule.radius(),
            states: rule.states(),
            include_center: rule.include_center(),
            neighborhood: rule.neighborhood().to_string().to_lowercase(),
            birth: Counts::List(rule.birth().as_slice().to_vec()),
            survival: Counts::List(rule.survival().as_slice().to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let json = r#"{
            "Rr": 5,
            "Cc": 2,
            "Mm": true,
            "Nn": "m",
            "Bb": "34-45",
            "Ss": "34-58"
        }"#;
        let rule: RuleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(rule.to_string(), "R5,C2,M1,S34-58,B34-45,NM");

        let json = r#"{"Rr": 2, "Cc": 4, "Mm": false, "Nn": "n", "Bb": [3, 1], "Ss": [2]}"#;
        let rule: RuleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(rule.to_string(), "R2,C4,M0,S2,B1,3,NN");
    }

    #[test]
    fn test_invalid() {
        let json = r#"{"Rr": 11, "Cc": 2, "Mm": false, "Nn": "m", "Bb": "3", "Ss": "2-3"}"#;
        assert!(serde_json::from_str::<RuleConfig>(json).is_err());

        let json = r#"{"Rr": 1, "Cc": 2, "Mm": false, "Nn": "h", "Bb": "3", "Ss": "2-3"}"#;
        assert!(serde_json::from_str::<RuleConfig>(json).is_err());

        let json = r#"{"Rr": 1, "Cc": 2, "Mm": false, "Nn": "m", "Bb": "3-x", "Ss": "2-3"}"#;
        assert!(serde_json::from_str::<RuleConfig>(json).is_err());

        let file: RulesFile = serde_json::from_str(
            r#"{"Rr": 1, "Cc": 2, "Mm": false, "Nn": "m", "Bb": "", "Ss": "2-3"}"#,
        )
        .unwrap();
        assert_eq!(
            RuleConfig::try_from(file),
            Err(ConfigError::NoBirthConditions)
        );
    }

    #[test]
    fn test_export() {
        let rule: RuleConfig = "R3,C6,M1,S2-4,B3,NN".parse().unwrap();
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(
            json,
            r#"{"Rr":3,"Cc":6,"Mm":true,"Nn":"n","Bb":[3],"Ss":[2,3,4]}"#
        );
        assert_eq!(serde_json::from_str::<RuleConfig>(&json).unwrap(), rule);
    }
}
