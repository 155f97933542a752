//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::categories::{
        data::{CategoryDetails, NewCategory},
        errors::CategoriesServiceError,
        records::{CategoryRecord, CategoryUuid},
        repository::PgCategoriesRepository,
    },
    slugs::slugify,
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

fn category_slug(details: &CategoryDetails) -> Result<String, CategoriesServiceError> {
    let slug = slugify(&details.name);

    if slug.is_empty() {
        return Err(CategoriesServiceError::MissingRequiredData);
    }

    Ok(slug)
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    #[tracing::instrument(name = "categories.service.list_categories", skip(self), err)]
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    #[tracing::instrument(
        name = "categories.service.create_category",
        skip(self, category),
        fields(category = %category.uuid),
        err
    )]
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let slug = category_slug(&category.details)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_category(&mut tx, category.uuid, slug, category.details)
            .await?;

        tx.commit().await?;

        info!(slug = %created.slug, "created category");

        Ok(created)
    }

    #[tracing::instrument(
        name = "categories.service.update_category",
        skip(self, details),
        fields(category = %category),
        err
    )]
    async fn update_category(
        &self,
        category: CategoryUuid,
        details: CategoryDetails,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let slug = category_slug(&details)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_category(&mut tx, category, slug, details)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "categories.service.delete_category",
        skip(self),
        fields(category = %category),
        err
    )]
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves every category ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Creates a category, deriving its slug from the name.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Renames or re-describes a category.
    async fn update_category(
        &self,
        category: CategoryUuid,
        details: CategoryDetails,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category; its products become uncategorised.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;
}
