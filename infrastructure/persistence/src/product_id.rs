use serde::{Deserialize, Deserializer};

/// Older pages stored numeric product ids; both shapes read back as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Text(String),
    Number(serde_json::Number),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawProductId::deserialize(deserializer)? {
        RawProductId::Text(id) => id,
        RawProductId::Number(id) => id.to_string(),
    })
}
