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


//! The greeting function: logs the invocation event and answers it with a
//! greeting, the invocation time and the event itself.

use env_logger::Env;
use greeter::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use log::info;
use serde_json::Value;

#[cfg(feature = "snmalloc")]
#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope> {
    greeting::respond(&event.payload)
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
