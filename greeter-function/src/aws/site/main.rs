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


//! The static site function: serves the objects of the bucket named by
//! `S3_BUCKET` to an application load balancer.

use env_logger::Env;
use greeter::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use lazy_static::lazy_static;
use log::info;
use serde_json::Value;

#[cfg(feature = "snmalloc")]
#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

lazy_static! {
    /// Shared by every invocation of the execution environment.
    static ref OBJECT_STORE: S3ObjectStore = S3ObjectStore::new();
}

async fn serve(store: &dyn ObjectStore, event: LambdaEvent<Value>) -> Result<ResponseEnvelope> {
    Ok(site::respond(store, &event.payload).await)
}

async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope> {
    serve(&*OBJECT_STORE, event).await
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!(
        "AWS Lambda function {} on {}",
        env!("CARGO_BIN_NAME"),
        std::env::consts::ARCH
    );
    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use lambda_runtime::Context;
    use serde_json::json;

    struct SingleObject;

    #[async_trait]
    impl ObjectStore for SingleObject {
        async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject> {
            if bucket == "www.example.com" && key == "index.html" {
                Ok(StoredObject {
                    body:         Bytes::from_static(b"<p>hello</p>"),
                    content_type: Some("text/html; charset=utf-8".to_owned()),
                })
            } else {
                Err(GreeterError::NotFound(key.to_owned()))
            }
        }
    }

    #[tokio::test]
    async fn handler_serves_the_bucket() -> Result<()> {
        std::env::set_var(&*GREETER_SITE_BUCKET_ENV, "www.example.com");

        let event = json!({ "httpMethod": "GET", "path": "/" });
        let envelope = serve(&SingleObject, LambdaEvent::new(event, Context::default())).await?;
        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.body, "<p>hello</p>");
        assert_eq!(envelope.content_type(), Some("text/html; charset=utf-8"));

        let event = json!({ "httpMethod": "GET", "path": "/favicon.ico" });
        let envelope = serve(&SingleObject, LambdaEvent::new(event, Context::default())).await?;
        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.content_type(), Some("text/html"));
        assert_eq!(envelope.body, site::NOT_FOUND_PAGE);

        Ok(())
    }
}
