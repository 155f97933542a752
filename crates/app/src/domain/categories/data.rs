//! Categories Data

use crate::domain::categories::records::CategoryUuid;

/// Editable category fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDetails {
    pub name: String,
    pub description: Option<String>,
}

/// New Category Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub details: CategoryDetails,
}
