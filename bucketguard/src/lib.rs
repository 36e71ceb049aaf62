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

#![warn(missing_docs, clippy::needless_borrow)]

//! Bucketguard reacts to S3 bucket-creation notifications and guarantees that
//! every new bucket ends up with AES-256 default server-side encryption,
//! without clobbering an already-correct configuration.

pub mod aws;
pub mod configs;
pub mod enforcer;
pub mod error;
pub mod event;
pub mod logging;
pub mod prelude;
pub mod store;
