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

use log::{error, trace};

use super::{
    NumberLengthType, PhoneNumber, PhoneNumberError, PhoneNumberType, PhoneNumberUtil,
    errors::{InternalResult, ValidationError},
    helper_functions::test_number_length,
    helper_types::RegionCandidate,
};
use crate::{
    i18n::RegionCode,
    phonemetadata::{PhoneMetadata, PhoneNumberDesc},
    regex_util::RegexConsume,
};

impl PhoneNumberUtil {
    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided, applying the region's transform rule when its parsing
    /// pattern captured something.
    pub(super) fn maybe_strip_national_prefix<'a>(
        &self,
        number: &'a str,
        metadata: &PhoneMetadata,
    ) -> InternalResult<Cow<'a, str>> {
        let possible_national_prefix = if metadata.has_national_prefix_for_parsing() {
            metadata.national_prefix_for_parsing()
        } else {
            metadata.national_prefix()
        };
        if number.is_empty() || possible_national_prefix.is_empty() {
            return Ok(Cow::Borrowed(number));
        }
        let prefix_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(possible_national_prefix)?;
        let Some(captures) = prefix_pattern.captures_start(number) else {
            return Ok(Cow::Borrowed(number));
        };
        let Some(whole_match) = captures.get(0) else {
            return Ok(Cow::Borrowed(number));
        };

        let transform_rule = metadata.national_prefix_transform_rule();
        // Some regions (e.g. Argentina) rewrite the prefix rather than drop it.
        // This happens only when the last group of the pattern captured digits.
        let last_group_captured = captures.len() > 1
            && captures
                .get(captures.len() - 1)
                .is_some_and(|group| !group.is_empty());

        let stripped = if !transform_rule.is_empty() && last_group_captured {
            let mut transformed = String::with_capacity(number.len());
            captures.expand(transform_rule, &mut transformed);
            transformed.push_str(&number[whole_match.end()..]);
            Cow::Owned(transformed)
        } else {
            if whole_match.is_empty() {
                return Ok(Cow::Borrowed(number));
            }
            Cow::Borrowed(&number[whole_match.end()..])
        };

        // If the original number was viable, and the resultant number is not,
        // we return the original.
        let general_desc = &metadata.general_desc;
        if self.matcher_api.match_national_number(number, general_desc)
            && !self.matcher_api.match_national_number(&stripped, general_desc)
        {
            trace!("Keeping national prefix of '{number}', the stripped form is not viable");
            return Ok(Cow::Borrowed(number));
        }
        // We require that the NSN remaining after stripping the national prefix
        // is of a possible length for the region.
        if matches!(
            test_number_length(&stripped, metadata),
            Err(ValidationError::TooShort | ValidationError::InvalidLength)
                | Ok(NumberLengthType::IsPossibleLocalOnly)
        ) {
            trace!("Keeping national prefix of '{number}', the stripped form has a bad length");
            return Ok(Cow::Borrowed(number));
        }
        trace!("Stripped national prefix: '{number}' -> '{stripped}'");
        Ok(stripped)
    }

    /// Validates a national-number candidate against one region. `None` means
    /// the region cannot own the number at all; a candidate typed
    /// [`PhoneNumberType::Unknown`] satisfied the region's length rules only.
    pub(super) fn validate_for_region<'b>(
        &self,
        region_id: &'b str,
        number: &str,
        metadata: &PhoneMetadata,
    ) -> InternalResult<Option<RegionCandidate<'b>>> {
        let national_number = self.maybe_strip_national_prefix(number, metadata)?;

        if metadata.has_leading_digits() {
            let leading_digits = self
                .reg_exps
                .regexp_cache
                .get_regex(metadata.leading_digits())?;
            if !leading_digits.matches_start(&national_number) {
                trace!("'{national_number}' is outside the leading digits of {region_id}");
                return Ok(None);
            }
        }
        if test_number_length(&national_number, metadata)
            != Ok(NumberLengthType::IsPossible)
        {
            trace!("'{national_number}' has no possible length for {region_id}");
            return Ok(None);
        }
        if national_number.starts_with('0') && !metadata.leading_zero_possible() {
            trace!("'{national_number}' needs a leading zero, {region_id} has none");
            return Ok(None);
        }

        let number_type = self.get_number_type_helper(&national_number, metadata);
        Ok(Some(RegionCandidate {
            region_id,
            national_number: national_number.into_owned(),
            number_type,
        }))
    }

    /// Picks the region owning `national_number` among those sharing
    /// `country_code`. The default region is tried first when it shares the
    /// code, then the remaining regions in index order (main region first).
    pub(super) fn find_owning_region(
        &self,
        country_code: i32,
        national_number: &str,
        default_region: Option<&str>,
    ) -> InternalResult<RegionCandidate<'_>> {
        let Some(region_ids) = self.metadata.region_ids(country_code) else {
            return Err(PhoneNumberError::InvalidCountryCode.into());
        };

        let mut ordered_regions: Vec<&str> = Vec::with_capacity(region_ids.len());
        if let Some(default_region) = default_region {
            if let Some(region_id) = region_ids.iter().find(|id| *id == default_region) {
                ordered_regions.push(region_id);
            }
        }
        for region_id in region_ids {
            if !ordered_regions.contains(&region_id.as_str()) {
                ordered_regions.push(region_id);
            }
        }

        let main_region_id = self.metadata.main_region_id(country_code);
        let mut main_region_fallback = None;
        for region_id in ordered_regions {
            let Some(metadata) = self.metadata.region_metadata(region_id) else {
                error!("Region {region_id} is listed for +{country_code} but has no metadata");
                return Err(PhoneNumberError::MetadataMissing.into());
            };
            let Some(candidate) = self.validate_for_region(region_id, national_number, metadata)?
            else {
                continue;
            };
            if candidate.number_type != PhoneNumberType::Unknown {
                trace!(
                    "'{national_number}' belongs to {region_id} as {:?}",
                    candidate.number_type
                );
                return Ok(candidate);
            }
            if main_region_id == Some(region_id) {
                main_region_fallback = Some(candidate);
            }
        }
        main_region_fallback.ok_or_else(|| {
            trace!("No region of +{country_code} accepts '{national_number}'");
            PhoneNumberError::InvalidNumber.into()
        })
    }

    /// Returns the region where a phone number is from, falling back to the
    /// main region of its calling code. Unknown calling codes give "ZZ".
    pub fn get_region_code(&self, phone_number: &PhoneNumber) -> &str {
        let country_code = phone_number.country_code();
        let Some(region_ids) = self.metadata.region_ids(country_code) else {
            trace!("Missing/invalid country calling code ({country_code})");
            return RegionCode::get_unknown();
        };
        if let [region_id] = region_ids {
            return region_id;
        }
        let national_number = self.get_national_significant_number(phone_number);
        match self.get_region_code_from_region_list(&national_number, region_ids) {
            Ok(Some(region_id)) => region_id,
            Ok(None) => self
                .metadata
                .main_region_id(country_code)
                .unwrap_or(RegionCode::get_unknown()),
            Err(err) => {
                error!("Could not resolve region of {phone_number}: {err}");
                self.metadata
                    .main_region_id(country_code)
                    .unwrap_or(RegionCode::get_unknown())
            }
        }
    }

    fn get_region_code_from_region_list<'b>(
        &self,
        national_number: &str,
        region_ids: &'b [String],
    ) -> InternalResult<Option<&'b str>> {
        for region_id in region_ids {
            // Metadata cannot be absent because the region ids come from the
            // calling code index.
            let Some(metadata) = self.metadata.region_metadata(region_id) else {
                continue;
            };
            if metadata.has_leading_digits() {
                if self
                    .reg_exps
                    .regexp_cache
                    .get_regex(metadata.leading_digits())?
                    .matches_start(national_number)
                {
                    return Ok(Some(region_id));
                }
            } else if self.get_number_type_helper(national_number, metadata)
                != PhoneNumberType::Unknown
            {
                return Ok(Some(region_id));
            }
        }
        Ok(None)
    }

    /// Gets the type of a valid phone number, classified against the region
    /// it is re-derived to belong to.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        let region_id = self.get_region_code(phone_number);
        let Some(metadata) = self.metadata.region_metadata(region_id) else {
            return PhoneNumberType::Unknown;
        };
        let national_number = self.get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_number, metadata)
    }

    pub(super) fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national_number, &metadata.premium_rate) {
            trace!("Number '{national_number}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, &metadata.toll_free) {
            trace!("Number '{national_number}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, &metadata.shared_cost) {
            trace!("Number '{national_number}' is a shared cost number.");
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, &metadata.voip) {
            trace!("Number '{national_number}' is a VOIP (Voice over IP) number.");
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, &metadata.personal_number) {
            trace!("Number '{national_number}' is a personal number.");
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, &metadata.pager) {
            trace!("Number '{national_number}' is a pager number.");
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, &metadata.uan) {
            trace!("Number '{national_number}' is a UAN.");
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, &metadata.voicemail) {
            trace!("Number '{national_number}' is a voicemail number.");
            return PhoneNumberType::VoiceMail;
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line);
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!(
                    "Number '{national_number}': fixed-line and mobile patterns equal, \
                     number is fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            } else if self.is_number_matching_desc(national_number, &metadata.mobile) {
                trace!(
                    "Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                     still fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, &metadata.mobile)
        {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        PhoneNumberType::Unknown
    }

    fn is_number_matching_desc(&self, national_number: &str, number_desc: &PhoneNumberDesc) -> bool {
        // Check if any possible number lengths are present; if so, we use them to
        // avoid checking the validation pattern if they don't match. If they are
        // absent, this means they match the general description, which we have
        // already checked before checking a specific number type.
        let actual_length = national_number.len() as i32;
        if !number_desc.possible_length.is_empty()
            && !number_desc.possible_length.contains(&actual_length)
        {
            return false;
        }
        self.matcher_api.match_national_number(national_number, number_desc)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::{PhoneNumberType, tests::get_phone_util};

    #[test]
    fn transform_rule_rewrites_prefix() {
        let util = get_phone_util();
        let metadata = util.metadata().region_metadata("AR").unwrap();
        assert_eq!(
            util.maybe_strip_national_prefix("0111512345678", metadata).unwrap(),
            "91112345678"
        );
        // plain trunk prefix
        assert_eq!(
            util.maybe_strip_national_prefix("01112345678", metadata).unwrap(),
            "1112345678"
        );
    }

    #[test]
    fn prefix_kept_when_stripped_form_is_not_viable() {
        let util = get_phone_util();
        let metadata = util.metadata().region_metadata("RU").unwrap();
        // "8..." is itself a viable Russian number here
        assert!(matches!(
            util.maybe_strip_national_prefix("8001234567", metadata).unwrap(),
            Cow::Borrowed("8001234567")
        ));
        assert_eq!(
            util.maybe_strip_national_prefix("89161955558", metadata).unwrap(),
            "9161955558"
        );
    }

    #[test]
    fn leading_digits_prefilter() {
        let util = get_phone_util();
        let metadata = util.metadata().region_metadata("KZ").unwrap();
        assert!(util
            .validate_for_region("KZ", "9161955558", metadata)
            .unwrap()
            .is_none());
        let candidate = util
            .validate_for_region("KZ", "7771108531", metadata)
            .unwrap()
            .unwrap();
        assert_eq!(candidate.number_type, PhoneNumberType::Mobile);
    }
}
