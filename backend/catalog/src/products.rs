use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::CatalogError;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub product_price: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_mini: Option<String>,

    #[serde(
        default,
        deserialize_with = "free_form",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories: Option<String>,

    #[serde(
        default,
        deserialize_with = "free_form",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Full image first, then the thumbnail. Empty strings count as missing.
    pub fn image_ref(&self) -> Option<&str> {
        [&self.image, &self.image_mini]
            .into_iter()
            .filter_map(|image| image.as_deref())
            .find(|image| !image.is_empty())
    }
}

// Catalog files in the wild write "120 kcal" as well as 120.
fn free_form<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn into_result(self) -> Result<T, CatalogError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(CatalogError::Rejected(
                "Response carried no data".to_string(),
            )),
            (false, _) => Err(CatalogError::Rejected(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            )),
        }
    }
}
