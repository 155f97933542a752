//! Page Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Page UUID
pub type PageUuid = TypedUuid<PageRecord>;

/// A content page such as "about" or "shipping", served by slug once published.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub uuid: PageUuid,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
