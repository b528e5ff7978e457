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

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use super::{CountryCodeSource, PhoneNumberType, helper_constants::PLUS_SIGN};

/// A validated phone number.
///
/// Only produced by [`crate::PhoneNumberUtil::parse`]. Two numbers are equal
/// when calling code, national number, leading zeros and extension agree;
/// the raw input, resolved region and type are carried for the caller's
/// information only.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    pub(super) country_code: i32,
    pub(super) national_number: u64,
    pub(super) number_of_leading_zeros: u32,
    pub(super) extension: Option<String>,
    pub(super) region_id: String,
    pub(super) raw_input: String,
    pub(super) number_type: PhoneNumberType,
    pub(super) country_code_source: CountryCodeSource,
}

impl PhoneNumber {
    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// National number without its leading zeros.
    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    /// Whether the national significant number starts with "0" (e.g. Italian
    /// fixed-line numbers).
    pub fn leading_zero(&self) -> bool {
        self.number_of_leading_zeros > 0
    }

    pub fn number_of_leading_zeros(&self) -> u32 {
        self.number_of_leading_zeros
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Region the number was validated against during parsing.
    ///
    /// When several regions of a shared calling code accept the number, the
    /// default region given to the parser wins, whereas
    /// [`PhoneNumberUtil::get_region_code`] walks the regions of the calling
    /// code in corpus order. "+1 800 234 5678" parsed with "CA" as default
    /// keeps "CA" here while `get_region_code` reports "US".
    ///
    /// [`PhoneNumberUtil::get_region_code`]: crate::PhoneNumberUtil::get_region_code
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn number_type(&self) -> PhoneNumberType {
        self.number_type
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.country_code == other.country_code
            && self.national_number == other.national_number
            && self.number_of_leading_zeros == other.number_of_leading_zeros
            && self.extension == other.extension
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country_code.hash(state);
        self.national_number.hash(state);
        self.number_of_leading_zeros.hash(state);
        self.extension.hash(state);
    }
}

/// Renders the number in E.164 form, e.g. `+390549555555`.
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PLUS_SIGN)?;
        write!(f, "{}", self.country_code)?;
        for _ in 0..self.number_of_leading_zeros {
            f.write_str("0")?;
        }
        write!(f, "{}", self.national_number)
    }
}
