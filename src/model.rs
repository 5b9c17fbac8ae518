use serde::{Deserialize, Deserializer};

/// A digitized menu record from the archive.
///
/// The archive's transcription metadata is patchy: every field except the id
/// may be missing, and string fields often carry stray whitespace. Fields are
/// trimmed on deserialization; empty-after-trim becomes `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "opt_trimmed")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "opt_year")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "opt_trimmed")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "opt_trimmed")]
    pub currency_symbol: Option<String>,
}

/// One photographed leaf of a menu.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// URL of the large page scan
    #[serde(default, rename = "large_src_jp2")]
    pub image_url: Option<String>,
    /// Transcribed dishes; untranscribed pages come back null
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dishes: Vec<Dish>,
}

/// A transcribed dish, optionally with its transcribed price.
#[derive(Debug, Clone, Deserialize)]
pub struct Dish {
    pub name: String,
    #[serde(default, deserialize_with = "opt_trimmed")]
    pub price: Option<String>,
}

/// A finished composition, ready to hand to the posting targets.
#[derive(Debug, Clone)]
pub struct Post {
    pub caption: String,
    pub tags: Vec<String>,
    pub homepage: String,
}

fn opt_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

// The archive serves year sometimes as a number, sometimes as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum YearField {
    Number(i64),
    Text(String),
}

fn opt_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<YearField>::deserialize(deserializer)?;
    Ok(match value {
        Some(YearField::Number(n)) => Some(n.to_string()),
        Some(YearField::Text(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        None => None,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Dish>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Dish>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
