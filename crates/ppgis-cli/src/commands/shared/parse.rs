use ppgis_core::ratings::Ratings;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse five comma-separated scores in dimension order.
pub fn parse_ratings(raw: &str) -> anyhow::Result<Ratings> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| anyhow::anyhow!("invalid ratings '{raw}': {error}"))?;
    let values: [u8; 5] = values
        .try_into()
        .map_err(|values: Vec<u8>| {
            anyhow::anyhow!("invalid ratings '{raw}': expected 5 scores, got {}", values.len())
        })?;
    Ok(Ratings::from_array(values)?)
}
