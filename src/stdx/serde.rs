use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a field into `Some(f64)` only when it is actually a JSON
/// number; `null`, strings, or any other shape become `None` rather than an
/// error.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Deserializes a field into `Some(String)` only when it is actually a JSON
/// string; anything else becomes `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(|s| s.to_owned()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::lenient_f64")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "super::lenient_string")]
        text: Option<String>,
    }

    #[test]
    fn should_accept_well_typed_fields() {
        let probe: Probe = serde_json::from_str(r#"{"number": 4.5, "text": "hello"}"#).unwrap();
        assert_eq!(Some(4.5), probe.number);
        assert_eq!(Some("hello"), probe.text.as_deref());
    }

    #[test]
    fn should_treat_wrong_types_as_absent() {
        let probe: Probe = serde_json::from_str(r#"{"number": "4.5", "text": 42}"#).unwrap();
        assert_eq!(None, probe.number);
        assert_eq!(None, probe.text);
    }

    #[test]
    fn should_treat_null_and_missing_as_absent() {
        let probe: Probe = serde_json::from_str(r#"{"number": null}"#).unwrap();
        assert_eq!(None, probe.number);
        assert_eq!(None, probe.text);
    }
}
