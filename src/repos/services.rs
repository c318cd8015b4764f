//! Service catalog repository. Documents are opaque; only the projected
//! fields are given any meaning here.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::Database;

use crate::error::AppError;

const COLLECTION: &str = "services";

pub async fn find_all(db: &Database) -> Result<Vec<Document>, AppError> {
    let cursor = db.collection::<Document>(COLLECTION).find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}

/// Find one service, projected down to the fields the booking flow needs.
pub async fn find_by_id(db: &Database, id: ObjectId) -> Result<Option<Document>, AppError> {
    let projection = doc! { "title": 1, "price": 1, "service_id": 1, "img": 1 };

    Ok(db
        .collection::<Document>(COLLECTION)
        .find_one(doc! { "_id": id })
        .projection(projection)
        .await?)
}
