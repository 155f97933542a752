//! Pages Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::pages::{
    data::PageDetails,
    records::{PageRecord, PageUuid},
};

const LIST_PAGES_SQL: &str = include_str!("sql/list_pages.sql");
const GET_PUBLISHED_PAGE_SQL: &str = include_str!("sql/get_published_page.sql");
const CREATE_PAGE_SQL: &str = include_str!("sql/create_page.sql");
const UPDATE_PAGE_SQL: &str = include_str!("sql/update_page.sql");
const DELETE_PAGE_SQL: &str = include_str!("sql/delete_page.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPagesRepository;

impl PgPagesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_pages(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PageRecord>, sqlx::Error> {
        query_as::<Postgres, PageRecord>(LIST_PAGES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_published_page(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<PageRecord, sqlx::Error> {
        query_as::<Postgres, PageRecord>(GET_PUBLISHED_PAGE_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_page(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: PageUuid,
        details: PageDetails,
    ) -> Result<PageRecord, sqlx::Error> {
        query_as::<Postgres, PageRecord>(CREATE_PAGE_SQL)
            .bind(page.into_uuid())
            .bind(details.slug)
            .bind(details.title)
            .bind(details.content)
            .bind(details.is_published)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_page(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: PageUuid,
        details: PageDetails,
    ) -> Result<PageRecord, sqlx::Error> {
        query_as::<Postgres, PageRecord>(UPDATE_PAGE_SQL)
            .bind(page.into_uuid())
            .bind(details.slug)
            .bind(details.title)
            .bind(details.content)
            .bind(details.is_published)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_page(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: PageUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PAGE_SQL)
            .bind(page.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PageRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PageUuid::from_uuid(row.try_get("uuid")?),
            slug: row.try_get("slug")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            is_published: row.try_get("is_published")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
