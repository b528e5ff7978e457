// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod errors;
mod repository;

pub use errors::MetadataError;
pub use repository::MetadataRepository;

/// Numbering-plan corpus compiled into the crate: a binary
/// `PhoneMetadataCollection` generated from libphonenumber's
/// `PhoneNumberMetadata.xml`.
pub(crate) const BUNDLED_METADATA: &[u8] =
    include_bytes!("../../resources/PhoneNumberMetadata.pb");
