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

use std::borrow::Cow;

use log::debug;

use super::{
    CountryCodeSource, PhoneNumberError, PhoneNumberUtil,
    errors::{InternalResult, ValidationError},
    helper_constants::{MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN},
    helper_functions::test_number_length,
    helper_types::{NormalizedNumber, PhoneNumberWithCountryCodeSource},
};
use crate::{phonemetadata::PhoneMetadata, regex_util::RegexConsume};

impl PhoneNumberUtil {
    /// Splits a known calling code off the front of `digits`, trying the
    /// longest candidate first. Calling codes never start with 0.
    pub(super) fn extract_country_code<'a>(&self, digits: &'a str) -> Option<(i32, &'a str)> {
        if digits.starts_with('0') {
            return None;
        }
        let max_len = MAX_LENGTH_COUNTRY_CODE.min(digits.len());
        for len in (1..=max_len).rev() {
            let Ok(potential_country_code) = digits[..len].parse::<i32>() else {
                continue;
            };
            if self.metadata.has_calling_code(potential_country_code) {
                return Some((potential_country_code, &digits[len..]));
            }
        }
        None
    }

    /// Strips the region's international dialling prefix from the start of
    /// the number. Returns `None` when it is absent or followed by a 0.
    pub(super) fn maybe_strip_international_prefix<'a>(
        &self,
        digits: &'a str,
        metadata: &PhoneMetadata,
    ) -> InternalResult<Option<&'a str>> {
        let international_prefix = metadata.international_prefix();
        if international_prefix.is_empty() {
            return Ok(None);
        }
        let idd_pattern = self.reg_exps.regexp_cache.get_regex(international_prefix)?;
        let Some(idd) = idd_pattern.find_start(digits) else {
            return Ok(None);
        };
        let rest = &digits[idd.end()..];
        // Only strip this if the first digit after the match is not a 0, since
        // country calling codes cannot begin with 0.
        if rest.starts_with('0') {
            return Ok(None);
        }
        Ok(Some(rest))
    }

    /// Detects the default region's calling code typed without a leading
    /// plus, e.g. "420 212 345 678" with the Czech Republic as default.
    ///
    /// The code is only split off when the number doesn't match the general
    /// pattern but the remainder does, or when the number is too long to be a
    /// national number of the region.
    fn maybe_strip_own_country_code<'a>(
        &self,
        digits: &'a str,
        metadata: &PhoneMetadata,
    ) -> InternalResult<Option<&'a str>> {
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(metadata.country_code());
        let Some(potential_national_number) = digits.strip_prefix(country_code) else {
            return Ok(None);
        };
        let general_desc = &metadata.general_desc;
        let stripped_national_number =
            self.maybe_strip_national_prefix(potential_national_number, metadata)?;

        if (!self.matcher_api.match_national_number(digits, general_desc)
            && self
                .matcher_api
                .match_national_number(&stripped_national_number, general_desc))
            || test_number_length(digits, metadata) == Err(ValidationError::TooLong)
        {
            return Ok(Some(potential_national_number));
        }
        Ok(None)
    }

    /// Determines the calling code of a normalized number and the digits
    /// left for the national number.
    pub(super) fn resolve_country_code<'a>(
        &self,
        number: &'a NormalizedNumber,
        default_region: Option<&PhoneMetadata>,
    ) -> InternalResult<PhoneNumberWithCountryCodeSource<'a>> {
        let digits = number.digits.as_str();

        let resolved = if number.has_plus {
            let Some((country_code, national_number)) = self.extract_country_code(digits) else {
                debug!("No calling code found after plus in '{digits}'");
                return Err(PhoneNumberError::InvalidCountryCode.into());
            };
            PhoneNumberWithCountryCodeSource::new(
                country_code,
                Cow::Borrowed(national_number),
                CountryCodeSource::FromNumberWithPlusSign,
            )
        } else if let Some(after_idd) = match default_region {
            Some(metadata) => self.maybe_strip_international_prefix(digits, metadata)?,
            None => None,
        } {
            if after_idd.len() <= MIN_LENGTH_FOR_NSN {
                debug!("Number '{digits}' is too short after the international prefix");
                return Err(PhoneNumberError::TooShort.into());
            }
            let Some((country_code, national_number)) = self.extract_country_code(after_idd)
            else {
                debug!("No calling code found after international prefix in '{digits}'");
                return Err(PhoneNumberError::InvalidCountryCode.into());
            };
            PhoneNumberWithCountryCodeSource::new(
                country_code,
                Cow::Borrowed(national_number),
                CountryCodeSource::FromNumberWithIdd,
            )
        } else if let Some(metadata) = default_region {
            match self.maybe_strip_own_country_code(digits, metadata)? {
                Some(national_number) => PhoneNumberWithCountryCodeSource::new(
                    metadata.country_code(),
                    Cow::Borrowed(national_number),
                    CountryCodeSource::FromNumberWithoutPlusSign,
                ),
                None => PhoneNumberWithCountryCodeSource::new(
                    metadata.country_code(),
                    Cow::Borrowed(digits),
                    CountryCodeSource::FromDefaultCountry,
                ),
            }
        } else {
            debug!("Number '{digits}' has no calling code and no default region was given");
            return Err(PhoneNumberError::InvalidCountryCode.into());
        };

        let national_number_len = resolved.national_number.len();
        if national_number_len < MIN_LENGTH_FOR_NSN {
            return Err(PhoneNumberError::TooShort.into());
        }
        if national_number_len > MAX_LENGTH_FOR_NSN {
            return Err(PhoneNumberError::TooLong.into());
        }
        debug!(
            "Resolved calling code {} ({:?}) for '{digits}'",
            resolved.country_code, resolved.country_code_source
        );
        Ok(resolved)
    }
}
