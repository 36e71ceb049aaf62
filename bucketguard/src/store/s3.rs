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

//! Use the S3 encryption backend to manage bucket default-encryption settings
//! held by Amazon S3.

use super::{EncryptionBackend, EncryptionStatus};
use crate::aws::s3;
use crate::error::Result;
use async_trait::async_trait;

/// S3EncryptionBackend reads and writes the default-encryption configuration
/// that Amazon S3 stores per bucket. The S3 consistency model governs
/// concurrent modifications to the same bucket from other writers.
#[derive(Default, Debug, Clone)]
pub struct S3EncryptionBackend {}

#[async_trait]
impl EncryptionBackend for S3EncryptionBackend {
    async fn get_default_encryption(&self, bucket: &str) -> Result<EncryptionStatus> {
        s3::get_default_encryption(bucket).await
    }

    async fn put_default_encryption(&self, bucket: &str, algorithm: &str) -> Result<()> {
        s3::put_default_encryption(bucket, algorithm).await
    }
}

impl S3EncryptionBackend {
    /// Creates a new S3EncryptionBackend.
    pub fn new() -> Self {
        Self {}
    }
}
