use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{require_comment, resolve_ref};
use super::validation::{non_empty, not_in_future, required_date, today};
use crate::db::entities::{artwork, comment};
use crate::db::repositories::CommentRepository;
use crate::dto::CommentPayload;
use crate::error::{AppError, Result};

pub struct CommentService {
    db: DatabaseConnection,
}

struct CommentFields {
    rating: String,
    publication_date: chrono::NaiveDate,
    artwork_id: Option<i32>,
}

impl CommentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: CommentPayload) -> Result<comment::Model> {
        info!("Starting comment creation");
        let txn = self.db.begin().await?;

        let fields = checked_fields(&txn, &payload).await?;
        let comment = CommentRepository::new(&txn)
            .create(comment::ActiveModel {
                rating: Set(fields.rating),
                content: Set(payload.content),
                publication_date: Set(Some(fields.publication_date)),
                artwork_id: Set(fields.artwork_id),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished comment creation with id {}", comment.id);
        Ok(comment)
    }

    pub async fn get_all(&self) -> Result<Vec<comment::Model>> {
        info!("Starting lookup of all comments");
        let comments = CommentRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} comments", comments.len());
        Ok(comments)
    }

    pub async fn get(&self, id: i32) -> Result<comment::Model> {
        info!("Starting lookup of comment {}", id);
        let comment = require_comment(&self.db, id).await?;
        info!("Finished lookup of comment {}", id);
        Ok(comment)
    }

    pub async fn update(&self, id: i32, payload: CommentPayload) -> Result<comment::Model> {
        info!("Starting update of comment {}", id);
        let txn = self.db.begin().await?;
        let existing = require_comment(&txn, id).await?;

        let fields = checked_fields(&txn, &payload).await?;
        let mut active: comment::ActiveModel = existing.into();
        active.rating = Set(fields.rating);
        active.content = Set(payload.content);
        active.publication_date = Set(Some(fields.publication_date));
        if fields.artwork_id.is_some() {
            active.artwork_id = Set(fields.artwork_id);
        }
        let comment = CommentRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of comment {}", id);
        Ok(comment)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of comment {}", id);
        let txn = self.db.begin().await?;
        let comment = require_comment(&txn, id).await?;

        if comment.artwork_id.is_some() {
            return Err(AppError::illegal(
                "Unable to delete the comment because it is associated to an artwork",
            ));
        }

        CommentRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of comment {}", id);
        Ok(())
    }
}

async fn checked_fields<C: ConnectionTrait>(
    conn: &C,
    payload: &CommentPayload,
) -> Result<CommentFields> {
    let rating = non_empty(payload.rating.clone(), "rating")?;
    let publication_date = required_date(payload.publication_date, "publication date")?;
    not_in_future(publication_date, today(), "publication date")?;
    let artwork_id = resolve_ref::<artwork::Entity, _>(conn, payload.artwork, "artwork").await?;
    Ok(CommentFields {
        rating,
        publication_date,
        artwork_id,
    })
}
