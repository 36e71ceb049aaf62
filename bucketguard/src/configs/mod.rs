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

//! This module provides the default configurations and the shared AWS service
//! clients for bucketguard.

use lazy_static::lazy_static;
use rusoto_core::Region;
use rusoto_s3::S3Client;

lazy_static! {
    /// Bucketguard associated services.
    /// Bucketguard S3 Client.
    pub static ref GUARD_S3_CLIENT: S3Client = S3Client::new(Region::default());
}
