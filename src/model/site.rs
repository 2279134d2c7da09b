use serde::{Deserialize, Serialize};

/// Site metadata, used both for creating and for replacing the current record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub picture: String,
    pub about_us: String,
    /// Social network name to profile URL
    pub social: serde_json::Value,
    pub address: String,
    pub email: String,
    pub phone: String,
}
