//! MySQL FAQ repository implementation.

use crate::{traits::FaqRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use faq_core::{Faq, FaqError, FaqId, FaqPatch, FaqResult, NewFaq, Translations};
use shaku::Component;
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// MySQL FAQ repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = FaqRepository)]
pub struct MySqlFaqRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlFaqRepository {
    /// Creates a new MySQL FAQ repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a FAQ.
#[derive(Debug, FromRow)]
struct FaqRow {
    id: String, // CHAR(36)
    question: String,
    answer: String,
    translations: Json<Translations>,
    created_at: DateTime<Utc>,
}

impl TryFrom<FaqRow> for Faq {
    type Error = FaqError;

    fn try_from(row: FaqRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| FaqError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Faq {
            id: FaqId::from_uuid(id),
            question: row.question,
            answer: row.answer,
            translations: row.translations.0,
            created_at: row.created_at,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, question, answer, translations, created_at FROM faqs";

#[async_trait]
impl FaqRepository for MySqlFaqRepository {
    async fn find_all(&self) -> FaqResult<Vec<Faq>> {
        debug!("Loading all FAQs");

        let rows = sqlx::query_as::<_, FaqRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Faq::try_from).collect()
    }

    async fn find_by_id(&self, id: FaqId) -> FaqResult<Option<Faq>> {
        debug!("Finding FAQ by id: {}", id);

        let row = sqlx::query_as::<_, FaqRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Faq::try_from).transpose()
    }

    async fn insert(&self, faq: NewFaq) -> FaqResult<Faq> {
        // DATETIME(6) keeps microseconds; truncate so the returned value
        // matches what a later read produces.
        let created = Faq {
            id: FaqId::new(),
            question: faq.question,
            answer: faq.answer,
            translations: faq.translations,
            created_at: Utc::now().trunc_subsecs(6),
        };

        sqlx::query(
            r#"
            INSERT INTO faqs (id, question, answer, translations, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(created.id.to_string())
        .bind(&created.question)
        .bind(&created.answer)
        .bind(Json(&created.translations))
        .bind(created.created_at)
        .execute(self.pool.inner())
        .await?;

        info!("Inserted FAQ {}", created.id);
        Ok(created)
    }

    async fn update_by_id(&self, id: FaqId, patch: FaqPatch) -> FaqResult<Option<Faq>> {
        let mut tx = self.pool.inner().begin().await?;

        let row = sqlx::query_as::<_, FaqRow>(&format!("{SELECT_COLUMNS} WHERE id = ? FOR UPDATE"))
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            debug!("FAQ {} not found for update", id);
            return Ok(None);
        };

        let mut faq = Faq::try_from(row)?;
        faq.apply(patch);

        sqlx::query(
            r#"
            UPDATE faqs
            SET question = ?, answer = ?, translations = ?
            WHERE id = ?
            "#,
        )
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(Json(&faq.translations))
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Updated FAQ {}", id);
        Ok(Some(faq))
    }

    async fn delete_by_id(&self, id: FaqId) -> FaqResult<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted FAQ {}", id);
        }
        Ok(deleted)
    }
}
