use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier of one submitted scrape; pairs a completion with its request.
pub type RequestId = u64;

/// Body returned by the scrape backend, kept exactly as received.
///
/// Only the object shape is guaranteed. Typed access goes through
/// [`ScrapeResponse::result`], which tolerates missing or odd fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrapeResponse(Value);

impl ScrapeResponse {
    /// Wraps a decoded body. Returns `None` unless it is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        value.is_object().then_some(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Typed view of the `result` member. Present whenever `result` is an
    /// object; fields of the wrong type read as empty.
    pub fn result(&self) -> Option<ScrapeResult> {
        let raw = self.0.get("result").filter(|raw| raw.is_object())?;
        Some(ScrapeResult::deserialize(raw).unwrap_or_default())
    }

    fn result_str(&self, key: &str) -> &str {
        self.0
            .get("result")
            .and_then(|result| result.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl From<ScrapeResult> for ScrapeResponse {
    fn from(result: ScrapeResult) -> Self {
        let mut body = Map::new();
        body.insert(
            "result".to_string(),
            serde_json::to_value(result).unwrap_or(Value::Null),
        );
        Self(Value::Object(body))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub scraped_at: String,
    #[serde(default, deserialize_with = "lenient")]
    pub meta: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub sections: Vec<Section>,
    #[serde(default, deserialize_with = "lenient")]
    pub interactions: Map<String, Value>,
    /// Warnings from the backend. Non-string entries keep their compact JSON.
    #[serde(default, deserialize_with = "error_messages")]
    pub errors: Vec<String>,
}

impl ScrapeResult {
    pub fn title(&self) -> Option<&str> {
        self.meta.get("title").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.meta.get("description").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, deserialize_with = "lenient")]
    pub label: String,
    /// Opaque tag chosen by the backend (`"header"`, `"article"`, ...).
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient")]
    pub content: SectionContent,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_html: Option<String>,
}

/// Extracted content of a section. `None` means "not extracted".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionContent {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        deserialize_with = "lenient_optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub headings: Option<Vec<String>>,
    #[serde(
        deserialize_with = "lenient_optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub links: Option<Vec<Link>>,
    #[serde(
        deserialize_with = "lenient_optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "lenient")]
    pub href: String,
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "lenient")]
    pub src: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt: Option<String>,
}

/// A completed scrape kept in the local history. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub url: String,
    pub scraped_at: String,
    pub response: ScrapeResponse,
}

impl HistoryItem {
    /// Builds an entry for `response`, copying its URL and timestamp.
    pub fn new(id: impl Into<String>, response: ScrapeResponse) -> Self {
        Self {
            id: id.into(),
            url: response.result_str("url").to_string(),
            scraped_at: response.result_str("scrapedAt").to_string(),
            response,
        }
    }
}

// The backend body is only shape-checked, so a field of the wrong type reads
// as its default instead of failing the whole result.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(lenient_optional_list(deserializer)?.unwrap_or_default())
}

// One bad element defaults on its own; a non-array is "not extracted".
fn lenient_optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

fn error_messages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(message) => Some(message),
            other => Some(other.to_string()),
        })
        .collect())
}
