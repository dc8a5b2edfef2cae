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


//! AWS Systems Manager Parameter Store backed parameter store.

use super::ParameterStore;
use crate::error::{GreeterError, Result};
use async_trait::async_trait;
use rusoto_core::{Region, RusotoError};
use rusoto_ssm::{GetParameterError, GetParameterRequest, PutParameterRequest, Ssm, SsmClient};

/// Reads and writes parameters in AWS Systems Manager.
pub struct SsmParameterStore {
    client: SsmClient,
}

impl SsmParameterStore {
    /// Creates a store for the region of the execution environment.
    pub fn new() -> Self {
        Self {
            client: SsmClient::new(Region::default()),
        }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String> {
        let result = self
            .client
            .get_parameter(GetParameterRequest {
                name: name.to_owned(),
                with_decryption: Some(with_decryption),
                ..Default::default()
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(GetParameterError::ParameterNotFound(_)) => {
                    GreeterError::NotFound(format!("parameter {}", name))
                }
                e => GreeterError::AWS(e.to_string()),
            })?;

        result
            .parameter
            .and_then(|p| p.value)
            .ok_or_else(|| GreeterError::NotFound(format!("parameter {} has no value", name)))
    }

    async fn put_parameter(
        &self,
        name: &str,
        value: &str,
        parameter_type: &str,
        overwrite: bool,
    ) -> Result<()> {
        self.client
            .put_parameter(PutParameterRequest {
                name: name.to_owned(),
                value: value.to_owned(),
                type_: Some(parameter_type.to_owned()),
                overwrite: Some(overwrite),
                ..Default::default()
            })
            .await
            .map_err(|e| GreeterError::AWS(e.to_string()))
            .map(|_| ())
    }
}
