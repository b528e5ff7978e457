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

use log::error;

use super::{
    PhoneNumber, PhoneNumberError, PhoneNumberFormat, PhoneNumberUtil,
    errors::{InternalResult, PhoneNumberErrorInternal},
    helper_constants::{DEFAULT_EXTN_PREFIX, NOT_INTERNATIONALLY_FORMATTED, RFC3966_EXTN_PREFIX},
    helper_functions::prefix_number_with_country_calling_code,
};
use crate::{
    macros::owned_from_cow_or,
    phonemetadata::{NumberFormat, PhoneMetadata},
    regex_util::RegexConsume,
};

impl PhoneNumberUtil {
    /// Formats a phone number in the specified format using default rules.
    ///
    /// `with_prefix` controls the leading "+" and calling code of the E164
    /// and International formats; National never carries it and RFC3966
    /// always does.
    pub fn format(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        with_prefix: bool,
    ) -> Result<String, PhoneNumberError> {
        self.format_internal(phone_number, number_format, with_prefix)
            .map_err(PhoneNumberErrorInternal::into_public)
    }

    fn format_internal(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        with_prefix: bool,
    ) -> InternalResult<String> {
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = self.get_national_significant_number(phone_number);

        if let PhoneNumberFormat::E164 = number_format {
            // Early exit for E164 case since no formatting of the national
            // number needs to be applied. Extensions are not formatted.
            if with_prefix {
                prefix_number_with_country_calling_code(
                    country_calling_code,
                    PhoneNumberFormat::E164,
                    &mut formatted_number,
                );
            }
            return Ok(formatted_number);
        }

        let Some(metadata) = self
            .metadata
            .region_metadata(phone_number.region_id())
            .filter(|metadata| metadata.country_code() == country_calling_code)
        else {
            error!(
                "No metadata for region {} of calling code {country_calling_code}",
                phone_number.region_id()
            );
            return Err(PhoneNumberError::MetadataMissing.into());
        };
        // Regions sharing a calling code keep their formats in the main region
        // (e.g. NANPA territories are formatted with the rules of US).
        let format_metadata = if metadata.number_format.is_empty() {
            self.metadata
                .main_region(country_calling_code)
                .unwrap_or(metadata)
        } else {
            metadata
        };

        formatted_number = owned_from_cow_or!(
            self.format_nsn(&formatted_number, format_metadata, number_format)?,
            formatted_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        match number_format {
            PhoneNumberFormat::RFC3966 => prefix_number_with_country_calling_code(
                country_calling_code,
                number_format,
                &mut formatted_number,
            ),
            PhoneNumberFormat::International if with_prefix => {
                prefix_number_with_country_calling_code(
                    country_calling_code,
                    number_format,
                    &mut formatted_number,
                )
            }
            _ => {}
        }
        Ok(formatted_number)
    }

    /// Gets the national significant number of a phone number. Note a
    /// national significant number doesn't contain a national prefix or any
    /// formatting.
    pub fn get_national_significant_number(&self, phone_number: &PhoneNumber) -> String {
        let zeros_start = "0".repeat(phone_number.number_of_leading_zeros() as usize);
        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());
        fast_cat::concat_str!(&zeros_start, national_number)
    }

    fn format_nsn<'b>(
        &self,
        national_number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> InternalResult<Cow<'b, str>> {
        let Some(formatting_pattern) =
            self.choose_formatting_pattern_for_number(&metadata.number_format, national_number)?
        else {
            return Ok(Cow::Borrowed(national_number));
        };
        if number_format != PhoneNumberFormat::National
            && formatting_pattern.intl_format() == NOT_INTERNATIONALLY_FORMATTED
        {
            return Ok(Cow::Borrowed(national_number));
        }
        self.format_nsn_using_pattern(national_number, formatting_pattern, metadata, number_format)
    }

    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> InternalResult<Option<&'b NumberFormat>> {
        for format in available_formats {
            // We always use the last leading_digits_pattern, as it is the most
            // detailed.
            if let Some(leading_digits) = format.leading_digits_pattern.last() {
                if !self
                    .reg_exps
                    .regexp_cache
                    .get_regex(leading_digits)?
                    .matches_start(national_number)
                {
                    continue;
                }
            }
            let pattern_to_match = self
                .reg_exps
                .regexp_cache
                .get_anchored_regex(format.pattern())?;
            if pattern_to_match.is_match(national_number) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> InternalResult<Cow<'b, str>> {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format());
        match number_format {
            PhoneNumberFormat::National => {
                // Apply the national_prefix_formatting_rule as the formatting_pattern
                // contains only information on how the national significant number
                // should be formatted at this point.
                if let Some(rule) = national_prefix_formatting_rule(formatting_pattern, metadata) {
                    number_format_rule = Cow::Owned(
                        self.reg_exps
                            .first_group_capturing_pattern
                            .replace(formatting_pattern.format(), rule.as_str())
                            .into_owned(),
                    );
                }
            }
            _ => {
                if !formatting_pattern.intl_format().is_empty() {
                    number_format_rule = Cow::Borrowed(formatting_pattern.intl_format());
                }
            }
        }

        let pattern_to_match = self
            .reg_exps
            .regexp_cache
            .get_anchored_regex(formatting_pattern.pattern())?;
        let formatted_number = pattern_to_match.replace(national_number, number_format_rule.as_ref());

        if let PhoneNumberFormat::RFC3966 = number_format {
            // First consume any leading punctuation, if any was present, then
            // replace all separators with a "-".
            let leading_punctuation_end = self
                .reg_exps
                .separator_pattern
                .find_start(&formatted_number)
                .map_or(0, |found| found.end());
            let dashed = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted_number[leading_punctuation_end..], "-")
                .into_owned();
            return Ok(Cow::Owned(dashed));
        }
        Ok(formatted_number)
    }

    /// Returns the formatted extension of a phone number, if the phone number
    /// had an extension specified, else `None`.
    fn get_formatted_extension(
        phone_number: &PhoneNumber,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Option<String> {
        let extension = phone_number.extension().filter(|extension| !extension.is_empty())?;
        let prefix = if let PhoneNumberFormat::RFC3966 = number_format {
            RFC3966_EXTN_PREFIX
        } else if metadata.has_preferred_extn_prefix() {
            metadata.preferred_extn_prefix()
        } else {
            DEFAULT_EXTN_PREFIX
        };
        Some(fast_cat::concat_str!(prefix, extension))
    }
}

/// National-prefix formatting rule of a format, with `$NP` replaced by the
/// national prefix and `$FG` by `$1`. `None` when no prefix is to be written.
fn national_prefix_formatting_rule(
    formatting_pattern: &NumberFormat,
    metadata: &PhoneMetadata,
) -> Option<String> {
    let rule = if formatting_pattern.has_national_prefix_formatting_rule() {
        formatting_pattern.national_prefix_formatting_rule()
    } else {
        metadata.national_prefix_formatting_rule()
    };
    if rule.is_empty() {
        return None;
    }
    let national_prefix = metadata.national_prefix();
    // We don't want to have a rule for how to format the national prefix if
    // there isn't one.
    if national_prefix.is_empty() && rule.contains("$NP") {
        return None;
    }
    Some(rule.replace("$NP", national_prefix).replace("$FG", "$1"))
}
