use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Get an object's bytes.
pub async fn get_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(body)
}

/// Put an object.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
) -> Result<(), StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body));

    if let Some(ct) = content_type {
        req = req.content_type(ct);
    }

    req.send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    Ok(())
}

/// Delete an object.
pub async fn delete_object(client: &Client, bucket: &str, key: &str) -> Result<(), StorageError> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;

    Ok(())
}

/// List keys under a prefix, following continuation tokens.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(token) = &continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                keys.push(key.to_string());
            }
        }

        if resp.is_truncated() == Some(true) {
            continuation_token = resp.next_continuation_token().map(|s| s.to_string());
        } else {
            break;
        }
    }

    Ok(keys)
}

/// Delete every object under a prefix. Returns the number deleted.
pub async fn delete_objects_by_prefix(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<usize, StorageError> {
    let keys = list_objects(client, bucket, prefix).await?;
    let count = keys.len();
    for key in &keys {
        delete_object(client, bucket, key).await?;
    }
    Ok(count)
}

/// Generate a presigned GET URL, used to serve artwork images.
pub async fn presign_get(
    client: &Client,
    bucket: &str,
    key: &str,
    expires_in: Duration,
) -> Result<String, StorageError> {
    let presign_config = PresigningConfig::builder()
        .expires_in(expires_in)
        .build()
        .map_err(|e| StorageError::Presign(e.to_string()))?;

    let presigned = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(presign_config)
        .await
        .map_err(|e| StorageError::Presign(e.to_string()))?;

    Ok(presigned.uri().to_string())
}

/// Generate a presigned PUT URL, used for direct artwork image uploads.
pub async fn presign_put(
    client: &Client,
    bucket: &str,
    key: &str,
    content_type: Option<&str>,
    expires_in: Duration,
) -> Result<String, StorageError> {
    let presign_config = PresigningConfig::builder()
        .expires_in(expires_in)
        .build()
        .map_err(|e| StorageError::Presign(e.to_string()))?;

    let mut req = client.put_object().bucket(bucket).key(key);

    if let Some(ct) = content_type {
        req = req.content_type(ct);
    }

    let presigned = req
        .presigned(presign_config)
        .await
        .map_err(|e| StorageError::Presign(e.to_string()))?;

    Ok(presigned.uri().to_string())
}
