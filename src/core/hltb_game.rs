use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize game id from int or string (the API has shipped both).
/// Any other shape reads as no id rather than failing the whole response.
fn deserialize_game_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(i64),
        Float(f64),
        String(String),
        Null,
        Unknown(serde::de::IgnoredAny),
    }

    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Int(i) => Some(i.to_string()),
        IdValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(format!("{}", f as i64)),
        IdValue::Float(_) => None,
        IdValue::String(s) if s.trim().is_empty() => None,
        IdValue::String(s) => Some(s),
        IdValue::Null | IdValue::Unknown(_) => None,
    })
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of the HLTB search `data` array. Durations are in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HltbGame {
    #[serde(default, deserialize_with = "deserialize_game_id")]
    pub game_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub game_name: String,

    /// Main story
    #[serde(default)]
    pub comp_main: Option<f64>,

    /// Main + extras
    #[serde(default)]
    pub comp_plus: Option<f64>,

    /// Completionist
    #[serde(default)]
    pub comp_100: Option<f64>,

    /// All styles
    #[serde(default)]
    pub comp_all: Option<f64>,
}

impl HltbGame {
    pub fn new(game_id: impl Into<String>, game_name: impl Into<String>) -> Self {
        Self {
            game_id: Some(game_id.into()),
            game_name: game_name.into(),
            ..Self::default()
        }
    }
}

/// Top-level search response body. Everything except `data` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HltbSearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<HltbGame>,
}

impl HltbSearchResponse {
    pub fn from_json(json: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let body = br#"{
            "color": "blue",
            "count": 2,
            "data": [
                {"game_id": 12345, "game_name": "The Witcher 3: Wild Hunt",
                 "comp_main": 86400, "comp_plus": 126000, "comp_100": 216000, "comp_all": 0,
                 "profile_dev": "CD Projekt RED"},
                {"game_id": "77", "game_name": null, "comp_main": null}
            ]
        }"#;

        let response = HltbSearchResponse::from_json(body).unwrap();
        assert_eq!(response.data.len(), 2);

        let witcher = &response.data[0];
        assert_eq!(witcher.game_id.as_deref(), Some("12345"));
        assert_eq!(witcher.comp_main, Some(86400.0));
        assert_eq!(witcher.comp_all, Some(0.0));

        let second = &response.data[1];
        assert_eq!(second.game_id.as_deref(), Some("77"));
        assert_eq!(second.game_name, "");
        assert_eq!(second.comp_main, None);
        assert_eq!(second.comp_100, None);
    }

    #[test]
    fn test_missing_or_null_data() {
        assert!(HltbSearchResponse::from_json(b"{}").unwrap().data.is_empty());
        assert!(HltbSearchResponse::from_json(br#"{"data": null}"#).unwrap().data.is_empty());
    }

    #[test]
    fn test_odd_game_id_shapes_keep_other_rows() {
        let body = br#"{"data": [
            {"game_id": 12345.0, "game_name": "Float Id"},
            {"game_id": true, "game_name": "Bool Id"},
            {"game_id": {"nested": 1}, "game_name": "Object Id"},
            {"game_id": 1.5, "game_name": "Fractional Id"},
            {"game_id": 42, "game_name": "Int Id"}
        ]}"#;

        let response = HltbSearchResponse::from_json(body).unwrap();
        let ids: Vec<Option<&str>> = response.data.iter().map(|g| g.game_id.as_deref()).collect();
        assert_eq!(ids, vec![Some("12345"), None, None, None, Some("42")]);
        assert_eq!(response.data[4].game_name, "Int Id");
    }

    #[test]
    fn test_malformed_body() {
        assert!(HltbSearchResponse::from_json(b"<html>blocked</html>").is_err());
    }
}
