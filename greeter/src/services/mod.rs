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


//! The AWS services the greeter functions talk to, each behind a small trait
//! so that handlers can be driven by in-memory stores in tests.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

mod s3;
mod ssm;

pub use s3::S3ObjectStore;
pub use ssm::SsmParameterStore;

/// An object fetched from an object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// The raw object content.
    pub body:         Bytes,
    /// The content type recorded with the object, if any.
    pub content_type: Option<String>,
}

/// A key/value blob service such as AWS S3.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches the object stored under `key` in `bucket`.
    ///
    /// Returns [`GreeterError::NotFound`](crate::error::GreeterError::NotFound)
    /// when the key does not exist.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject>;
}

/// A named configuration value service such as AWS Systems Manager Parameter
/// Store.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Reads the value of the parameter `name`, decrypting it if asked to.
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String>;

    /// Writes `value` to the parameter `name`.
    ///
    /// # Arguments
    /// * `name` - The name of the parameter.
    /// * `value` - The new value.
    /// * `parameter_type` - `String`, `StringList` or `SecureString`.
    /// * `overwrite` - Whether an existing value may be replaced.
    async fn put_parameter(
        &self,
        name: &str,
        value: &str,
        parameter_type: &str,
        overwrite: bool,
    ) -> Result<()>;
}
