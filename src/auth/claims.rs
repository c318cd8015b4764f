//! Claims embedded in backend-issued credentials.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by our signed tokens. The email address is the only field
/// given meaning downstream (the booking ownership check); whatever else the
/// caller put in the identity payload rides along untouched.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(default)]
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw identity payload posted to `/jwt`. No validation is performed; any
/// payload is signable.
#[derive(Debug, Deserialize)]
pub struct IdentityPayload {
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
