//! Booking repository. Bookings are stored verbatim as posted; the email
//! field is the only one read back with semantic meaning.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Database;

use crate::error::AppError;

const COLLECTION: &str = "bookings";

/// List bookings, optionally filtered by an exact email match. No filter
/// returns the whole collection.
pub async fn find_by_email(
    db: &Database,
    email: Option<&str>,
) -> Result<Vec<Document>, AppError> {
    let filter = match email {
        Some(email) => doc! { "email": email },
        None => doc! {},
    };

    let cursor = db.collection::<Document>(COLLECTION).find(filter).await?;
    Ok(cursor.try_collect().await?)
}

pub async fn insert(db: &Database, booking: Document) -> Result<InsertOneResult, AppError> {
    Ok(db
        .collection::<Document>(COLLECTION)
        .insert_one(booking)
        .await?)
}

/// Merge the provided fields into one booking via `$set`. No upsert: an
/// unknown id is a zero-count no-op, not an error.
pub async fn update(
    db: &Database,
    id: ObjectId,
    fields: Document,
) -> Result<UpdateResult, AppError> {
    Ok(db
        .collection::<Document>(COLLECTION)
        .update_one(doc! { "_id": id }, doc! { "$set": fields })
        .await?)
}

pub async fn delete(db: &Database, id: ObjectId) -> Result<DeleteResult, AppError> {
    Ok(db
        .collection::<Document>(COLLECTION)
        .delete_one(doc! { "_id": id })
        .await?)
}
