use serde::{de, Deserialize, Deserializer};
use utoipa::IntoParams;

/// Query parameters for the list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParam {
    /// Page number, starting at 1 (default: 1)
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    pub pg: i32,
}

fn default_page() -> i32 {
    1
}

/// Reads `pg`, treating an empty or blank value (`?pg=`) like a missing one.
fn deserialize_page<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default_page()),
        Some(value) => value.parse().map_err(de::Error::custom),
    }
}

/// Query parameters addressing a single board entry.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeqParam {
    /// Sequence number of the board entry
    pub seq: i32,
}
