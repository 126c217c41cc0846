use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects;

/// Load one JSON record.
pub async fn load<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let body = objects::get_object(client, bucket, key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Save one JSON record. Whole-document upsert, like every write in the
/// platform.
pub async fn save<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(client, bucket, key, body, Some("application/json")).await
}

/// Delete one record.
pub async fn delete(client: &Client, bucket: &str, key: &str) -> Result<(), StorageError> {
    objects::delete_object(client, bucket, key).await
}

/// Load every JSON record under a prefix. Non-document keys (images) are
/// skipped.
pub async fn list_prefix<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(client, bucket, prefix).await?;

    let mut records = Vec::with_capacity(keys.len());
    for key in keys.iter().filter(|k| k.ends_with(".json")) {
        let body = objects::get_object(client, bucket, key).await?;
        records.push(serde_json::from_slice(&body)?);
    }
    Ok(records)
}
