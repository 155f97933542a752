//! Pages Data

use crate::domain::pages::records::PageUuid;

/// Editable page fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDetails {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub is_published: bool,
}

/// New Page Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPage {
    pub uuid: PageUuid,
    pub details: PageDetails,
}
