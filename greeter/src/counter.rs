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


//! A counter kept in a parameter store. Each invocation reads the current
//! value, writes back its successor and reports both.

use crate::configs::*;
use crate::envelope::ResponseEnvelope;
use crate::error::{GreeterError, Result};
use crate::services::ParameterStore;
use log::{error, warn};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Updated {
    message:   &'static str,
    old_value: i64,
    new_value: i64,
}

#[derive(Serialize)]
struct Failed {
    message: &'static str,
    error:   String,
}

/// Reads the counter `name`, stores its successor and returns both values.
pub async fn update(store: &dyn ParameterStore, name: &str) -> Result<(i64, i64)> {
    let raw = store.get_parameter(name, true).await?;
    let current = raw.trim().parse::<i64>().map_err(|e| {
        GreeterError::Config(format!("parameter {} holds {:?}, not an integer: {}", name, raw, e))
    })?;
    let next = current
        .checked_add(1)
        .ok_or_else(|| GreeterError::Config(format!("parameter {} overflows", name)))?;

    store
        .put_parameter(name, &next.to_string(), &GREETER_COUNTER_PARAMETER_TYPE, true)
        .await?;
    Ok((current, next))
}

/// Increments the counter `name` and answers with the outcome.
///
/// A successful update is reported with status 200 and both values. Any
/// failure is reported with status 500 and the reason; the returned error is
/// reserved for failing to encode the body.
pub async fn increment(store: &dyn ParameterStore, name: &str) -> Result<ResponseEnvelope> {
    let (status, body) = match update(store, name).await {
        Ok((old_value, new_value)) => {
            warn!("new value is {}", new_value);
            let body = Updated {
                message: "Parameter updated successfully",
                old_value,
                new_value,
            };
            (*GREETER_STATUS_OK, serde_json::to_string(&body)?)
        }
        Err(e) => {
            error!("Error: {}", e);
            let body = Failed {
                message: "Error updating parameter",
                error:   e.to_string(),
            };
            (*GREETER_STATUS_INTERNAL_ERROR, serde_json::to_string(&body)?)
        }
    };
    Ok(ResponseEnvelope::new(status, body))
}
