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

//! This crate contains all wrapped functions of the AWS S3 bucket-encryption
//! API.

use crate::configs::*;
use crate::error::{GuardError, Result};
use crate::store::EncryptionStatus;
use rusoto_core::RusotoError;
use rusoto_s3::{
    GetBucketEncryptionRequest, PutBucketEncryptionRequest, ServerSideEncryptionByDefault,
    ServerSideEncryptionConfiguration, ServerSideEncryptionRule, S3,
};

/// The error code S3 answers `GetBucketEncryption` with when the bucket has
/// no server-side encryption configuration. Rusoto has no modeled variant for
/// it, so it arrives as an unknown error whose XML body carries the code.
const ENCRYPTION_NOT_FOUND_CODE: &str = "ServerSideEncryptionConfigurationNotFoundError";

/// Queries the default-encryption configuration of an S3 bucket.
///
/// The "no configuration" answer is part of the domain, not a failure: it is
/// recognized by its error code and returned as
/// [`EncryptionStatus::NotConfigured`]. Any other failure (permission,
/// throttling, network) is surfaced to the caller.
///
/// # Arguments
/// * `bucket` - The name of the bucket to query.
pub async fn get_default_encryption(bucket: &str) -> Result<EncryptionStatus> {
    match GUARD_S3_CLIENT
        .get_bucket_encryption(GetBucketEncryptionRequest {
            bucket: bucket.to_owned(),
            ..Default::default()
        })
        .await
    {
        Ok(output) => Ok(EncryptionStatus::Enabled {
            algorithm: first_rule_algorithm(output.server_side_encryption_configuration),
        }),
        Err(RusotoError::Unknown(resp))
            if is_missing_configuration(&String::from_utf8_lossy(&resp.body)) =>
        {
            Ok(EncryptionStatus::NotConfigured)
        }
        Err(e) => Err(GuardError::AWS(e.to_string())),
    }
}

/// Sets the default-encryption configuration of an S3 bucket to a single
/// rule with the given SSE algorithm, without a KMS master key and without
/// the bucket-key flag.
///
/// # Arguments
/// * `bucket` - The name of the bucket to configure.
/// * `algorithm` - The SSE algorithm to apply by default, e.g. `AES256`.
pub async fn put_default_encryption(bucket: &str, algorithm: &str) -> Result<()> {
    GUARD_S3_CLIENT
        .put_bucket_encryption(PutBucketEncryptionRequest {
            bucket: bucket.to_owned(),
            server_side_encryption_configuration: ServerSideEncryptionConfiguration {
                rules: vec![ServerSideEncryptionRule {
                    apply_server_side_encryption_by_default: Some(
                        ServerSideEncryptionByDefault {
                            sse_algorithm: algorithm.to_owned(),
                            ..Default::default()
                        },
                    ),
                    ..Default::default()
                }],
            },
            ..Default::default()
        })
        .await
        .map_err(|e| GuardError::AWS(e.to_string()))
        .map(|_| ())
}

/// Returns the SSE algorithm of the first rule in the configuration, if any.
fn first_rule_algorithm(config: Option<ServerSideEncryptionConfiguration>) -> Option<String> {
    config?
        .rules
        .into_iter()
        .next()?
        .apply_server_side_encryption_by_default
        .map(|rule| rule.sse_algorithm)
}

/// Returns true if an S3 error body names the missing-encryption-configuration
/// error code.
fn is_missing_configuration(body: &str) -> bool {
    body.contains(ENCRYPTION_NOT_FOUND_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_missing_configuration_body() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <Error><Code>ServerSideEncryptionConfigurationNotFoundError</Code>\
            <Message>The server side encryption configuration was not found</Message>\
            <BucketName>my-new-bucket</BucketName></Error>";

        assert!(is_missing_configuration(body));
    }

    #[test]
    fn other_error_bodies_are_not_merged() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <Error><Code>AccessDenied</Code>\
            <Message>Access Denied</Message></Error>";

        assert!(!is_missing_configuration(body));
    }

    #[test]
    fn algorithm_comes_from_the_first_rule() {
        let config = ServerSideEncryptionConfiguration {
            rules: vec![ServerSideEncryptionRule {
                apply_server_side_encryption_by_default: Some(ServerSideEncryptionByDefault {
                    sse_algorithm: "aws:kms".to_owned(),
                    ..Default::default()
                }),
                ..Default::default()
            }],
        };

        assert_eq!(
            Some("aws:kms".to_owned()),
            first_rule_algorithm(Some(config))
        );
        assert_eq!(None, first_rule_algorithm(None));
    }
}
