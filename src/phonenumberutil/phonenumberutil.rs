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
    collections::{BTreeSet, HashSet},
    sync::Arc,
};

use log::{error, warn};

use super::{
    ParseOptions, PhoneNumber, PhoneNumberError, PhoneNumberType,
    errors::{InternalResult, PhoneNumberErrorInternal},
    helper_functions::get_supported_types_for_metadata,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    interfaces::MatcherApi,
    metadata::{MetadataError, MetadataRepository},
    phonemetadata::PhoneMetadata,
    regex_based_matcher::RegexBasedMatcher,
    regexp_cache::RegexCache,
};

/// Parsing, validation and formatting engine over one metadata repository.
///
/// The engine is immutable once built and can be shared between threads,
/// e.g. through an `Arc`.
pub struct PhoneNumberUtil {
    /// Numbering-plan data all decisions are taken from.
    pub(super) metadata: MetadataRepository,

    /// An API for validation checking.
    pub(super) matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    pub(super) reg_exps: PhoneNumberRegExpsAndMappings,
}

impl PhoneNumberUtil {
    /// Creates an engine over the bundled numbering-plan corpus.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in corpus is malformed, which is a packaging
    /// defect rather than a runtime condition.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(instance) => instance,
            Err(err) => {
                let err_message = format!("Could not parse compiled-in metadata: {:?}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Creates an engine over the bundled numbering-plan corpus, reporting a
    /// malformed corpus as an error.
    pub fn try_new() -> Result<Self, MetadataError> {
        Ok(Self::new_for_metadata(MetadataRepository::bundled()?))
    }

    /// Creates an engine over caller-supplied metadata.
    pub fn new_for_metadata(metadata: MetadataRepository) -> Self {
        let regexp_cache = Arc::new(RegexCache::with_capacity(metadata.regions().count() * 8));
        let reg_exps = match PhoneNumberRegExpsAndMappings::new(regexp_cache.clone()) {
            Ok(reg_exps) => reg_exps,
            Err(err) => {
                let err_message = format!("Built-in patterns failed to compile: {}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
        };
        Self {
            metadata,
            matcher_api: Box::new(RegexBasedMatcher::new(regexp_cache)),
            reg_exps,
        }
    }

    /// Parses a string and returns it as a validated phone number.
    ///
    /// `default_region` is the region the number is assumed to be dialled
    /// from when it carries no calling code of its own. Only numbers of a
    /// known type are accepted; see [`Self::parse_with_options`] to relax
    /// that.
    pub fn parse(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, PhoneNumberError> {
        let options = ParseOptions {
            default_region,
            ..Default::default()
        };
        self.parse_with_options(number_to_parse, &options)
    }

    /// Parses a string into a validated phone number, see [`ParseOptions`].
    pub fn parse_with_options(
        &self,
        number_to_parse: &str,
        options: &ParseOptions<'_>,
    ) -> Result<PhoneNumber, PhoneNumberError> {
        self.parse_helper(number_to_parse, options)
            .map_err(PhoneNumberErrorInternal::into_public)
    }

    fn parse_helper(
        &self,
        number_to_parse: &str,
        options: &ParseOptions<'_>,
    ) -> InternalResult<PhoneNumber> {
        let default_metadata = options
            .default_region
            .and_then(|region| self.default_region_metadata(region));

        let normalized = self.normalize(number_to_parse, options.extension_labels)?;
        let resolved = self.resolve_country_code(&normalized, default_metadata)?;
        let candidate = self.find_owning_region(
            resolved.country_code,
            &resolved.national_number,
            default_metadata.map(PhoneMetadata::id),
        )?;

        if candidate.number_type == PhoneNumberType::Unknown && !options.ignore_type {
            return Err(PhoneNumberError::InvalidNumber.into());
        }

        let national_number = candidate.national_number.as_str();
        let mut number_of_leading_zeros =
            national_number.len() - national_number.trim_start_matches('0').len();
        // A number consisting only of zeros keeps its last zero as the value.
        if number_of_leading_zeros == national_number.len() {
            number_of_leading_zeros = number_of_leading_zeros.saturating_sub(1);
        }
        let Ok(national_number_value) = national_number[number_of_leading_zeros..].parse::<u64>()
        else {
            return Err(PhoneNumberError::InvalidNumber.into());
        };

        Ok(PhoneNumber {
            country_code: resolved.country_code,
            national_number: national_number_value,
            number_of_leading_zeros: number_of_leading_zeros as u32,
            extension: normalized.extension.clone(),
            region_id: candidate.region_id.to_owned(),
            raw_input: number_to_parse.to_owned(),
            number_type: candidate.number_type,
            country_code_source: resolved.country_code_source,
        })
    }

    fn default_region_metadata(&self, region_code: &str) -> Option<&PhoneMetadata> {
        let metadata = self.metadata.region_metadata(region_code);
        if metadata.is_none() {
            warn!("Invalid or unknown region code provided: {}", region_code);
        }
        metadata
    }

    /// Checks whether a string parses into a valid phone number. Every
    /// parsing failure is reported as `false`.
    pub fn is_valid_phone_number(&self, number_to_parse: &str, default_region: Option<&str>) -> bool {
        self.parse(number_to_parse, default_region).is_ok()
    }

    /// All region ids known to the engine.
    pub fn all_countries(&self) -> BTreeSet<&str> {
        self.metadata.regions().collect()
    }

    /// Returns the country calling code for a specific region.
    pub fn country_code(&self, region_code: &str) -> Option<i32> {
        self.metadata.calling_code(region_code)
    }

    /// Regions sharing a calling code, main region first.
    pub fn countries(&self, country_calling_code: i32) -> Option<Vec<&str>> {
        self.metadata
            .region_ids(country_calling_code)
            .map(|region_ids| region_ids.iter().map(String::as_str).collect())
    }

    pub fn main_country(&self, country_calling_code: i32) -> Option<&str> {
        self.metadata.main_region_id(country_calling_code)
    }

    /// Returns the types for a given region which the library has metadata
    /// for. Will not include FixedLineOrMobile (if numbers in this region could
    /// be classified as FixedLineOrMobile, both FixedLine and Mobile would be
    /// present) and Unknown.
    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.metadata
            .region_metadata(region_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    pub fn metadata(&self) -> &MetadataRepository {
        &self.metadata
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
