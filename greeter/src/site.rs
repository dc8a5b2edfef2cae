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


//! Serves the objects of a bucket as a static web site behind a load
//! balancer. Every failure is answered with a plain 404 page.

use crate::configs::*;
use crate::envelope::{ResponseEnvelope, CONTENT_TYPE};
use crate::error::{GreeterError, Result};
use crate::services::ObjectStore;
use log::info;
use serde_json::Value;

/// The page returned whenever an object cannot be served.
pub const NOT_FOUND_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <title>404 Not Found</title>
</head>
<body>
    <h1>404 Not Found</h1>
    <p>The requested URL was not found on this server.</p>
</body>
</html>
"#;

/// Maps a request path to an object key.
///
/// Surrounding slashes are stripped and the remainder is normalized
/// lexically: empty and `.` segments are dropped and `..` removes the
/// preceding segment. A `..` with nothing left to remove is kept. The site
/// root maps to the index document.
pub fn object_key(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.trim_matches('/').split('/') {
        match segment {
            "" | "." => {}
            ".." if segments.last().map_or(false, |last| *last != "..") => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        GREETER_SITE_INDEX.to_string()
    } else {
        segments.join("/")
    }
}

/// The 404 envelope.
pub fn not_found() -> ResponseEnvelope {
    ResponseEnvelope::new(*GREETER_STATUS_NOT_FOUND, NOT_FOUND_PAGE)
        .with_header(CONTENT_TYPE, GREETER_HTML_CONTENT_TYPE.as_str())
}

async fn fetch(store: &dyn ObjectStore, bucket: &str, path: &str) -> Result<ResponseEnvelope> {
    let key = object_key(path);
    let object = store.get_object(bucket, &key).await?;
    let content_type = object
        .content_type
        .ok_or_else(|| GreeterError::NotFound(format!("content type of {}", key)))?;
    let content = String::from_utf8(object.body.to_vec())
        .map_err(|e| GreeterError::Internal(format!("{} is not UTF-8: {}", key, e)))?;

    Ok(ResponseEnvelope::new(*GREETER_STATUS_OK, content).with_header(CONTENT_TYPE, content_type))
}

/// Serves the object addressed by `path` from `bucket`.
///
/// Responds with the object content and its recorded content type, or with
/// [`not_found`] if anything goes wrong.
pub async fn serve(store: &dyn ObjectStore, bucket: &str, path: &str) -> ResponseEnvelope {
    match fetch(store, bucket, path).await {
        Ok(envelope) => envelope,
        Err(e) => {
            info!("Cannot serve {}: {}", path, e);
            not_found()
        }
    }
}

/// Answers a load balancer event.
///
/// The bucket is read from the environment on every invocation. A missing
/// bucket or a missing `path` in the event yields [`not_found`].
pub async fn respond(store: &dyn ObjectStore, event: &Value) -> ResponseEnvelope {
    let bucket = match env_var(&GREETER_SITE_BUCKET_ENV) {
        Ok(bucket) => bucket,
        Err(e) => {
            info!("{}", e);
            return not_found();
        }
    };

    match event.get("path").and_then(Value::as_str) {
        Some(path) => serve(store, &bucket, path).await,
        None => {
            info!("Event has no request path");
            not_found()
        }
    }
}
