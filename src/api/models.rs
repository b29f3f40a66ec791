use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FilmRequest {
    pub title: String,
}

/// An incoming chat message, as delivered by the transport.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChatReply {
    Text { text: String },
    Photo { photo: String, caption: String },
}
