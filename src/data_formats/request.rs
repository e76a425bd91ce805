use serde::{Deserialize, Serialize};

// Both bodies arrive with every field optional so that missing fields fall
// out as None instead of a deserialization rejection; the handlers turn None
// into the 400 messages the API promises.

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct NewCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UpdateVotesRequest {
    pub inc_votes: Option<i64>,
}
