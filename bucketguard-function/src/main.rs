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

//! The main entry point for the bucket-encryption enforcement function.

use bucketguard::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use log::{info, LevelFilter};
use serde_json::Value;

async fn handler(event: LambdaEvent<BucketEvent>) -> Result<Value> {
    logging::setup();
    let payload = event.payload;
    info!("Lambda received event: {}", serde_json::to_string(&payload)?);

    let backend = S3EncryptionBackend::new();
    enforce(&backend, &payload).await?.into_response()
}

#[tokio::main]
async fn main() -> Result<()> {
    // The logger filter stays wide open; the effective verbosity is applied
    // per invocation from the logging_level environment variable.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .init();
    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}
