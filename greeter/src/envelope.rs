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


//! The HTTP-style response envelope returned to load balancer and API gateway
//! triggers.

use crate::configs::*;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `Content-Type` header name.
pub const CONTENT_TYPE: &str = "Content-Type";

/// The response of a cloud function invoked through a load balancer or an API
/// gateway proxy integration.
///
/// On the wire it reads:
///
/// ```json
/// {
///   "statusCode": 200,
///   "headers": { "Content-Type": "application/json" },
///   "body": "{\"message\":\"...\"}"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// The HTTP status code.
    pub status_code: u16,
    /// The response headers. Omitted from the wire when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers:     BTreeMap<String, String>,
    /// The response body.
    pub body:        String,
}

impl ResponseEnvelope {
    /// Creates an envelope without headers.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Creates an envelope whose body is `value` encoded as compact JSON and
    /// whose only header declares JSON content.
    pub fn json<T: Serialize + ?Sized>(status_code: u16, value: &T) -> Result<Self> {
        Ok(Self::new(status_code, serde_json::to_string(value)?)
            .with_header(CONTENT_TYPE, GREETER_JSON_CONTENT_TYPE.as_str()))
    }

    /// Adds a header, replacing any previous value under the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns the declared content type, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).map(String::as_str)
    }
}
