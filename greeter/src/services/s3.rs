// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! AWS S3 backed object store.

use super::{ObjectStore, StoredObject};
use crate::error::{GreeterError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use rusoto_core::{Region, RusotoError};
use rusoto_s3::{GetObjectError, GetObjectRequest, S3Client, S3};
use tokio::io::AsyncReadExt;

/// Reads objects from AWS S3.
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    /// Creates a store for the region of the execution environment.
    pub fn new() -> Self {
        Self {
            client: S3Client::new(Region::default()),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject> {
        let output = self
            .client
            .get_object(GetObjectRequest {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                ..Default::default()
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(GetObjectError::NoSuchKey(_)) => {
                    GreeterError::NotFound(format!("s3://{}/{}", bucket, key))
                }
                e => GreeterError::AWS(e.to_string()),
            })?;

        let mut buf = Vec::new();
        if let Some(body) = output.body {
            Box::pin(body.into_async_read()).read_to_end(&mut buf).await?;
        }

        Ok(StoredObject {
            body:         Bytes::from(buf),
            content_type: output.content_type,
        })
    }
}
