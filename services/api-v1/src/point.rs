use serde::{Deserialize, Serialize};

/// PointJson is a point record for the PlaceNext point import.
///
/// Empty values are left out of the payload except for `latitude` and
/// `longitude`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertising_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertising_id_type: Option<String>,
    #[serde(rename = "ipaddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_bssid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub effective_created_date: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub effective_updated_date: i64,
    pub latitude: f64,
    pub longitude: f64,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}
