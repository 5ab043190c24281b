use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct FriendPairBody {
    #[validate(length(min = 1, message = "Username1 cannot be empty"))]
    pub username1: String,
    #[validate(length(min = 1, message = "Username2 cannot be empty"))]
    pub username2: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FriendshipStatus {
    pub are_friends: bool,
}

/// Edges are stored once per unordered pair, smaller username first by byte
/// order (the `C` collation the `ck_friends_order` check uses).
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
