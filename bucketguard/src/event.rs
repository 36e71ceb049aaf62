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

//! This module contains the [`BucketEvent`] type, the bucket management
//! notification that EventBridge delivers to the function when CloudTrail
//! records a bucket-level API call. Only the fields the enforcer consumes are
//! modeled; the rest of the EventBridge envelope is ignored on the wire.

use serde::{Deserialize, Serialize};

/// A bucket management event routed from CloudTrail via EventBridge.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct BucketEvent {
    /// The CloudTrail record carried in the event envelope.
    pub detail: EventDetail,
}

/// The CloudTrail record of the management API call.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// The name of the API action, e.g. `CreateBucket`.
    pub event_name: String,
    /// The request parameters of the API action.
    pub request_parameters: RequestParameters,
}

/// The request parameters of the recorded API call.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    /// The bucket the API call was issued against.
    pub bucket_name: String,
}

impl BucketEvent {
    /// Returns true if this notification records a bucket creation.
    pub fn is_bucket_creation(&self) -> bool {
        self.detail.event_name.contains("CreateBucket")
    }

    /// Returns the name of the bucket the event was recorded for.
    pub fn bucket_name(&self) -> &str {
        &self.detail.request_parameters.bucket_name
    }
}
