use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single line item on a receipt.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String, // currency string, e.g. "3.49"
}

/// A purchase record as submitted by a client.
///
/// Missing or `null` fields decode as empty values so they surface as
/// missing-field validation errors rather than as malformed JSON.
/// `id` and `points` are never read from the request body; they are
/// filled in once the receipt has been scored and stored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_date: String, // YYYY-MM-DD
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_time: String, // HH:MM, 24-hour
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: String,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
}

/// Response body for `POST /receipts/process`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response body for `GET /receipts/{id}/points`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PointsResponse {
    pub points: u64,
}
