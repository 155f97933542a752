//! Pages service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::pages::{
        data::{NewPage, PageDetails},
        errors::PagesServiceError,
        records::{PageRecord, PageUuid},
        repository::PgPagesRepository,
    },
    slugs::slugify,
};

#[derive(Debug, Clone)]
pub struct PgPagesService {
    db: Db,
    repository: PgPagesRepository,
}

impl PgPagesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPagesRepository::new(),
        }
    }
}

/// Normalise an admin-supplied slug, rejecting one with nothing left.
fn normalise_slug(mut details: PageDetails) -> Result<PageDetails, PagesServiceError> {
    details.slug = slugify(&details.slug);

    if details.slug.is_empty() {
        return Err(PagesServiceError::MissingRequiredData);
    }

    Ok(details)
}

#[async_trait]
impl PagesService for PgPagesService {
    #[tracing::instrument(name = "pages.service.list_pages", skip(self), err)]
    async fn list_pages(&self) -> Result<Vec<PageRecord>, PagesServiceError> {
        let mut tx = self.db.begin().await?;

        let pages = self.repository.list_pages(&mut tx).await?;

        tx.commit().await?;

        Ok(pages)
    }

    #[tracing::instrument(name = "pages.service.get_published_page", skip(self), err)]
    async fn get_published_page(&self, slug: &str) -> Result<PageRecord, PagesServiceError> {
        let mut tx = self.db.begin().await?;

        let page = self.repository.get_published_page(&mut tx, slug).await?;

        tx.commit().await?;

        Ok(page)
    }

    #[tracing::instrument(name = "pages.service.create_page", skip(self, page), fields(page = %page.uuid), err)]
    async fn create_page(&self, page: NewPage) -> Result<PageRecord, PagesServiceError> {
        let details = normalise_slug(page.details)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_page(&mut tx, page.uuid, details).await?;

        tx.commit().await?;

        Ok(created)
    }

    #[tracing::instrument(name = "pages.service.update_page", skip(self, details), fields(page = %page), err)]
    async fn update_page(
        &self,
        page: PageUuid,
        details: PageDetails,
    ) -> Result<PageRecord, PagesServiceError> {
        let details = normalise_slug(details)?;

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_page(&mut tx, page, details).await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(name = "pages.service.delete_page", skip(self), fields(page = %page), err)]
    async fn delete_page(&self, page: PageUuid) -> Result<(), PagesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_page(&mut tx, page).await?;

        if rows_affected == 0 {
            return Err(PagesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PagesService: Send + Sync {
    /// Retrieves every page, published or not, newest first.
    async fn list_pages(&self) -> Result<Vec<PageRecord>, PagesServiceError>;

    /// Retrieve a published page by slug; drafts are reported as not found.
    async fn get_published_page(&self, slug: &str) -> Result<PageRecord, PagesServiceError>;

    async fn create_page(&self, page: NewPage) -> Result<PageRecord, PagesServiceError>;

    async fn update_page(
        &self,
        page: PageUuid,
        details: PageDetails,
    ) -> Result<PageRecord, PagesServiceError>;

    async fn delete_page(&self, page: PageUuid) -> Result<(), PagesServiceError>;
}
