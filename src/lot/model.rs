use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JSON blob stored in the lot info column.
///
/// Keys match regardless of case and a repeated key keeps its last value.
/// Absent and `null` fields decode to zero values.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LotInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub point: Point,
    #[serde(rename = "lotname", deserialize_with = "null_as_default")]
    pub lot_name: String,
    #[serde(rename = "lotdescription", deserialize_with = "null_as_default")]
    pub lot_description: String,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Point {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
}

impl LotInfo {
    pub fn from_json(json: &str) -> serde_json::Result<LotInfo> {
        let value = lowercase_keys(serde_json::from_str(json)?);
        match &value {
            Value::Null => return Ok(LotInfo::default()),
            Value::Object(map) => object_or_null(map.get("point").unwrap_or(&Value::Null))?,
            other => object_or_null(other)?,
        }
        serde_json::from_value(value)
    }
}

// Derived struct decoding would also take arrays positionally
fn object_or_null(value: &Value) -> serde_json::Result<()> {
    match value {
        Value::Object(_) | Value::Null => Ok(()),
        other => Err(de::Error::custom(format!("expected an object, found {other}"))),
    }
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect(),
        ),
        other => other,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Point {
    // 0,0 is what an unfilled point decodes to
    pub fn has_coordinates(&self) -> bool {
        self.lat != 0.0 || self.lon != 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotPoint {
    pub lat: f64,
    pub lon: f64,
    pub lot_name: String,
    pub lot_description: String,
    pub link: String,
}

impl LotPoint {
    pub fn new(info: LotInfo, link: impl Into<String>) -> Self {
        LotPoint {
            lat: info.point.lat,
            lon: info.point.lon,
            lot_name: info.lot_name,
            lot_description: info.lot_description,
            link: link.into(),
        }
    }
}
