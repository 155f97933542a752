//! Category request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::categories::{data::CategoryDetails, records::CategoryRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub uuid: Uuid,

    pub name: String,

    pub slug: String,

    pub description: Option<String>,

    pub created_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            uuid: category.uuid.into(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// Categories ordered by name
    pub categories: Vec<CategoryResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryDetailsRequest {
    pub name: String,

    pub description: Option<String>,
}

impl From<CategoryDetailsRequest> for CategoryDetails {
    fn from(request: CategoryDetailsRequest) -> Self {
        CategoryDetails {
            name: request.name,
            description: request.description,
        }
    }
}
