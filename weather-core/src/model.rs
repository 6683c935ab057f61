use serde::Deserialize;

/// Result of a single weather lookup, ready for rendering.
///
/// Created fresh per request and discarded after the response is written;
/// nothing outlives the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature_c: f64,
}

/// The upstream JSON body, reduced to the one field of interest.
///
/// WeatherAPI.com returns far more than this; every other field is ignored.
/// Both levels default, so a body missing `current` (or `temp_c`) decodes
/// to `0.0` rather than failing. Only structurally invalid JSON is an
/// error. Expected shape:
///
/// ```json
/// { "current": { "temp_c": 4.2 } }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CurrentPayload {
    #[serde(default)]
    pub current: CurrentBlock,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub temp_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_temperature_from_full_body() {
        let body = r#"{
            "location": { "name": "Oslo", "country": "Norway" },
            "current": { "temp_c": 4.2, "humidity": 81, "wind_kph": 13.0 }
        }"#;

        let payload: CurrentPayload = serde_json::from_str(body).expect("valid body");
        assert_eq!(payload.current.temp_c, 4.2);
    }

    #[test]
    fn missing_current_object_decodes_to_zero() {
        let payload: CurrentPayload =
            serde_json::from_str(r#"{"location":{"name":"Oslo"}}"#).expect("valid body");
        assert_eq!(payload.current.temp_c, 0.0);
    }

    #[test]
    fn missing_temp_c_field_decodes_to_zero() {
        let payload: CurrentPayload =
            serde_json::from_str(r#"{"current":{"humidity":81}}"#).expect("valid body");
        assert_eq!(payload.current.temp_c, 0.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let res = serde_json::from_str::<CurrentPayload>("not json");
        assert!(res.is_err());
    }
}
