use serde::{Deserialize, Serialize};

/// Input for a contact message. New messages always start unresolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewMessage {
    pub author_id: i32,
    pub subject: String,
    pub body: String,
}
