use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single most favorable offer, as judged by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestDeal {
    pub product_name: String,
    pub best_price: String, // "₹XX,XXX"
    pub best_vendor: String,
    pub best_vendor_link: String,
}

/// One vendor's offer for the searched product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub vendor: String,
    pub price: String,  // "₹XX,XXX"
    pub rating: String, // "4.X"
    pub coupon: Option<String>,
    pub coupon_tag: Option<String>,
    pub logo_url: String,
    pub vendor_url: String,
    /// Opaque styling map passed through to the client
    #[serde(default)]
    pub button_style: Map<String, Value>,
}

/// Response body of `POST /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub best_deal: Option<BestDeal>,
    pub deals: Vec<Deal>,
}
