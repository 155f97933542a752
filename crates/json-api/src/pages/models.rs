//! Page request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::pages::{data::PageDetails, records::PageRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PageResponse {
    pub uuid: Uuid,

    pub slug: String,

    pub title: String,

    /// Page body
    pub content: String,

    pub is_published: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<PageRecord> for PageResponse {
    fn from(page: PageRecord) -> Self {
        PageResponse {
            uuid: page.uuid.into(),
            slug: page.slug,
            title: page.title,
            content: page.content,
            is_published: page.is_published,
            created_at: page.created_at.to_string(),
            updated_at: page.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PagesResponse {
    /// Pages, newest first
    pub pages: Vec<PageResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PageDetailsRequest {
    /// Normalised into a URL slug
    pub slug: String,

    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub is_published: bool,
}

impl From<PageDetailsRequest> for PageDetails {
    fn from(request: PageDetailsRequest) -> Self {
        PageDetails {
            slug: request.slug,
            title: request.title,
            content: request.content,
            is_published: request.is_published,
        }
    }
}
