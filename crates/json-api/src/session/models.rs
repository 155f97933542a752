//! Session response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::auth::Identity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IdentityResponse {
    pub user_uuid: Uuid,

    pub email: String,

    pub full_name: Option<String>,

    /// `admin` or `customer`
    pub role: String,

    /// Session the bearer token belongs to
    pub session_uuid: Uuid,
}

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        IdentityResponse {
            user_uuid: identity.user_uuid.into(),
            email: identity.email.clone(),
            full_name: identity.full_name.clone(),
            role: identity.role.to_string(),
            session_uuid: identity.session_uuid.into(),
        }
    }
}
