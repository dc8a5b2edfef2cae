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


//! The counter function: increments the parameter named by `PARAMETER_NAME`
//! on every invocation.

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

async fn handler(
    store: &dyn ParameterStore,
    name: &str,
    _: LambdaEvent<Value>,
) -> Result<ResponseEnvelope> {
    counter::increment(store, name).await
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    info!(
        "AWS Lambda function {} on {}",
        env!("CARGO_BIN_NAME"),
        std::env::consts::ARCH
    );

    // The parameter name is fixed for the lifetime of the execution environment.
    let name = env_var(&GREETER_COUNTER_PARAMETER_ENV)?;
    let store = SsmParameterStore::new();

    let (store, name) = (&store, name.as_str());
    lambda_runtime::run(service_fn(move |event| async move {
        handler(store, name, event).await
    }))
    .await?;
    Ok(())
}
