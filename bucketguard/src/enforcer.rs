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

//! The encryption enforcer.
//!
//! Given a bucket management notification, [`enforce`] guarantees the named
//! bucket ends up with default server-side encryption enabled, without
//! touching an already-correct configuration. Per invocation this issues at
//! most one read and at most one write against the backend.

use crate::error::Result;
use crate::event::BucketEvent;
use crate::store::{EncryptionBackend, EncryptionStatus, SSE_AES256};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The response body returned when encryption was enabled on a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnforcementReceipt {
    /// HTTP-style status code, always 200.
    pub status_code: u16,
    /// Human-readable summary of the action taken.
    pub details: String,
    /// The bucket that was configured.
    pub bucket_name: String,
}

impl EnforcementReceipt {
    /// Creates the receipt for a bucket that just had encryption enabled.
    pub fn enabled(bucket: &str) -> Self {
        Self {
            status_code: 200,
            details: "Default encryption enabled".to_string(),
            bucket_name: bucket.to_owned(),
        }
    }
}

/// The terminal state of one enforcement invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnforcementOutcome {
    /// The event was not a bucket creation; nothing was queried or written.
    Skipped,
    /// The bucket already had default encryption; nothing was written.
    AlreadyEncrypted,
    /// Default encryption was enabled on the bucket.
    Enabled(EnforcementReceipt),
}

impl EnforcementOutcome {
    /// Maps the outcome to the function response. The enable path answers
    /// with the receipt; both no-op paths answer with `null`.
    pub fn into_response(self) -> Result<Value> {
        match self {
            EnforcementOutcome::Enabled(receipt) => Ok(serde_json::to_value(receipt)?),
            _ => Ok(Value::Null),
        }
    }
}

/// Ensures the bucket named by a creation event has default server-side
/// encryption enabled.
///
/// Events whose name does not contain `CreateBucket` are skipped without any
/// backend call. For creation events, the bucket's configuration is queried
/// once; a bucket that already has default encryption is left untouched, and
/// a bucket without it gets a single AES-256 rule written. A query failure
/// other than the expected "no configuration" answer fails the invocation
/// before any write is attempted.
///
/// # Arguments
/// * `backend` - The encryption backend to reconcile against.
/// * `event` - The bucket management notification.
///
/// # Returns
/// The terminal state of the reconciliation.
pub async fn enforce(
    backend: &dyn EncryptionBackend,
    event: &BucketEvent,
) -> Result<EnforcementOutcome> {
    if !event.is_bucket_creation() {
        return Ok(EnforcementOutcome::Skipped);
    }

    let bucket = event.bucket_name();
    match backend.get_default_encryption(bucket).await? {
        EncryptionStatus::Enabled { .. } => {
            info!("Encryption is enabled already on bucket: {}", bucket);
            Ok(EnforcementOutcome::AlreadyEncrypted)
        }
        EncryptionStatus::NotConfigured => {
            info!("Enabling encryption on bucket: {}", bucket);
            backend.put_default_encryption(bucket, SSE_AES256).await?;
            Ok(EnforcementOutcome::Enabled(EnforcementReceipt::enabled(
                bucket,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardError;
    use crate::store::MemoryEncryptionBackend;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Wraps a memory backend and counts the calls reaching it.
    #[derive(Default, Debug)]
    struct CountingBackend {
        inner: MemoryEncryptionBackend,
        gets: AtomicUsize,
        puts: AtomicUsize,
    }

    #[async_trait]
    impl EncryptionBackend for CountingBackend {
        async fn get_default_encryption(&self, bucket: &str) -> Result<EncryptionStatus> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.inner.get_default_encryption(bucket).await
        }

        async fn put_default_encryption(&self, bucket: &str, algorithm: &str) -> Result<()> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.inner.put_default_encryption(bucket, algorithm).await
        }
    }

    impl CountingBackend {
        fn around(inner: MemoryEncryptionBackend) -> Self {
            Self {
                inner,
                ..Default::default()
            }
        }
    }

    /// A backend whose query path is down.
    #[derive(Default, Debug)]
    struct UnavailableBackend {
        puts: AtomicUsize,
    }

    #[async_trait]
    impl EncryptionBackend for UnavailableBackend {
        async fn get_default_encryption(&self, _bucket: &str) -> Result<EncryptionStatus> {
            Err(GuardError::AWS("ThrottlingException".to_string()))
        }

        async fn put_default_encryption(&self, _bucket: &str, _algorithm: &str) -> Result<()> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// A backend that accepts queries but rejects writes.
    #[derive(Default, Debug)]
    struct ReadOnlyBackend {}

    #[async_trait]
    impl EncryptionBackend for ReadOnlyBackend {
        async fn get_default_encryption(&self, _bucket: &str) -> Result<EncryptionStatus> {
            Ok(EncryptionStatus::NotConfigured)
        }

        async fn put_default_encryption(&self, _bucket: &str, _algorithm: &str) -> Result<()> {
            Err("write rejected by backend".into())
        }
    }

    fn event(name: &str, bucket: &str) -> BucketEvent {
        serde_json::from_value(json!({
            "detail": {
                "eventName": name,
                "requestParameters": { "bucketName": bucket }
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn non_creation_events_are_skipped_without_backend_calls() -> Result<()> {
        let backend = CountingBackend::default();
        let outcome = enforce(&backend, &event("DeleteBucket", "my-old-bucket")).await?;

        assert_eq!(EnforcementOutcome::Skipped, outcome);
        assert_eq!(0, backend.gets.load(Ordering::SeqCst));
        assert_eq!(0, backend.puts.load(Ordering::SeqCst));
        Ok(())
    }

    #[tokio::test]
    async fn encrypted_buckets_are_left_untouched() -> Result<()> {
        let backend = CountingBackend::around(MemoryEncryptionBackend::with_encrypted_buckets(&[
            "my-new-bucket",
        ]));
        let outcome = enforce(&backend, &event("CreateBucket", "my-new-bucket")).await?;

        assert_eq!(EnforcementOutcome::AlreadyEncrypted, outcome);
        assert_eq!(1, backend.gets.load(Ordering::SeqCst));
        assert_eq!(0, backend.puts.load(Ordering::SeqCst));
        assert_eq!(Value::Null, outcome.into_response()?);
        Ok(())
    }

    #[tokio::test]
    async fn unencrypted_buckets_get_a_single_aes256_rule() -> Result<()> {
        let backend = CountingBackend::default();
        let outcome = enforce(&backend, &event("CreateBucket", "my-new-bucket")).await?;

        assert_eq!(
            EnforcementOutcome::Enabled(EnforcementReceipt {
                status_code: 200,
                details: "Default encryption enabled".to_string(),
                bucket_name: "my-new-bucket".to_string(),
            }),
            outcome
        );
        assert_eq!(1, backend.puts.load(Ordering::SeqCst));
        assert_eq!(
            EncryptionStatus::Enabled {
                algorithm: Some(SSE_AES256.to_owned())
            },
            backend.inner.get_default_encryption("my-new-bucket").await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn enable_response_matches_the_wire_shape() -> Result<()> {
        let backend = MemoryEncryptionBackend::new();
        let outcome = enforce(&backend, &event("CreateBucket", "my-new-bucket")).await?;

        assert_eq!(
            json!({
                "statusCode": 200,
                "details": "Default encryption enabled",
                "bucketName": "my-new-bucket"
            }),
            outcome.into_response()?
        );
        Ok(())
    }

    #[tokio::test]
    async fn second_invocation_takes_the_noop_path() -> Result<()> {
        let backend = CountingBackend::default();
        let first = enforce(&backend, &event("CreateBucket", "my-new-bucket")).await?;
        let second = enforce(&backend, &event("CreateBucket", "my-new-bucket")).await?;

        assert!(matches!(first, EnforcementOutcome::Enabled(_)));
        assert_eq!(EnforcementOutcome::AlreadyEncrypted, second);
        assert_eq!(1, backend.puts.load(Ordering::SeqCst));
        Ok(())
    }

    #[tokio::test]
    async fn query_failures_fail_the_invocation_before_any_write() {
        let backend = UnavailableBackend::default();
        let result = enforce(&backend, &event("CreateBucket", "my-new-bucket")).await;

        assert!(matches!(result, Err(GuardError::AWS(_))));
        assert_eq!(0, backend.puts.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn write_failures_propagate() {
        let backend = ReadOnlyBackend::default();
        let result = enforce(&backend, &event("CreateBucket", "my-new-bucket")).await;

        assert!(matches!(result, Err(GuardError::Internal(_))));
    }
}
