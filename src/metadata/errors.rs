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

use thiserror::Error;

/// Reasons a numbering-plan corpus is refused at construction time.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Could not parse metadata text: {0}")]
    Malformed(#[from] protobuf::text_format::ParseError),

    #[error("Could not decode metadata: {0}")]
    Decode(#[from] protobuf::Error),

    #[error("Region '{region}' has no valid calling code")]
    MissingCallingCode { region: String },

    #[error("Region '{0}' is declared more than once")]
    DuplicateRegion(String),

    #[error("Calling code {0} is shared by several regions but none is marked as main")]
    MissingMainRegion(i32),

    #[error("Calling code {0} has more than one main region")]
    MultipleMainRegions(i32),

    #[error("Region '{region}' has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        region: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
