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

/// Per-call knobs for [`crate::PhoneNumberUtil::parse_with_options`].
///
/// ```ignore
/// let options = ParseOptions::new()
///     .with_default_region("GB")
///     .with_extension_labels(&["poste"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    /// Region assumed when the text carries no calling code.
    pub default_region: Option<&'a str>,
    /// Accept numbers that satisfy a region's length rules but match none of
    /// its type patterns.
    pub ignore_type: bool,
    /// Replaces the built-in extension labels ("ext", "x", "#", ...).
    /// Matched case-insensitively.
    pub extension_labels: Option<&'a [&'a str]>,
}

impl<'a> ParseOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_region(mut self, region: &'a str) -> Self {
        self.default_region = Some(region);
        self
    }

    pub fn with_ignore_type(mut self, ignore_type: bool) -> Self {
        self.ignore_type = ignore_type;
        self
    }

    pub fn with_extension_labels(mut self, labels: &'a [&'a str]) -> Self {
        self.extension_labels = Some(labels);
        self
    }
}
