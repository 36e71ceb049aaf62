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

//! The enforcer reads and writes bucket default-encryption settings through
//! the [`EncryptionBackend`] trait. Out of the box, bucketguard bundles these
//! backends:
//!
//! - `S3EncryptionBackend`: queries and mutates the bucket encryption
//!   configuration held by Amazon S3 itself. This is the backend the deployed
//!   function runs against.
//!
//! - `MemoryEncryptionBackend`: holds bucket settings in a process-local hash
//!   table. It provides no durability and exists for unit tests and local
//!   experiments, where invoking the real service is not an option.

mod s3;
pub use s3::S3EncryptionBackend;

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Mutex;

/// The server-side encryption algorithm the enforcer applies: SSE-S3 with
/// AES-256, no customer-managed key.
pub const SSE_AES256: &str = "AES256";

/// The queried state of a bucket's default-encryption configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptionStatus {
    /// Default encryption is active on the bucket.
    Enabled {
        /// The SSE algorithm of the first configured rule, when the service
        /// reports one.
        algorithm: Option<String>,
    },
    /// The bucket carries no server-side encryption configuration.
    NotConfigured,
}

/// The encryption backend trait defines the interface for reading and writing
/// a bucket's default-encryption configuration.
#[async_trait]
pub trait EncryptionBackend: Debug + Send + Sync {
    /// Queries the current default-encryption configuration of a bucket.
    async fn get_default_encryption(&self, bucket: &str) -> Result<EncryptionStatus>;

    /// Sets the default-encryption configuration of a bucket to a single rule
    /// with the given SSE algorithm.
    async fn put_default_encryption(&self, bucket: &str, algorithm: &str) -> Result<()>;
}

/// The in-memory encryption backend.
///
/// Bucket settings live in a hash table keyed by bucket name, so every
/// process starts from a blank slate. Useful to exercise the enforcer without
/// AWS credentials.
#[derive(Default, Debug)]
pub struct MemoryEncryptionBackend {
    /// Bucket name to the SSE algorithm configured on it.
    buckets: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl EncryptionBackend for MemoryEncryptionBackend {
    async fn get_default_encryption(&self, bucket: &str) -> Result<EncryptionStatus> {
        Ok(match self.buckets.lock().unwrap().get(bucket) {
            Some(algorithm) => EncryptionStatus::Enabled {
                algorithm: Some(algorithm.to_owned()),
            },
            None => EncryptionStatus::NotConfigured,
        })
    }

    async fn put_default_encryption(&self, bucket: &str, algorithm: &str) -> Result<()> {
        self.buckets
            .lock()
            .unwrap()
            .insert(bucket.to_owned(), algorithm.to_owned());
        Ok(())
    }
}

impl MemoryEncryptionBackend {
    /// Creates a new MemoryEncryptionBackend with no buckets configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new MemoryEncryptionBackend with default encryption already
    /// configured on the given buckets.
    pub fn with_encrypted_buckets(buckets: &[&str]) -> Self {
        Self {
            buckets: Mutex::new(
                buckets
                    .iter()
                    .map(|b| ((*b).to_owned(), SSE_AES256.to_owned()))
                    .collect(),
            ),
        }
    }
}
