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

use log::{error, trace};
use regex::Regex;

use super::{
    PhoneNumberUtil,
    errors::{InternalResult, NotANumberError},
    helper_constants::MIN_LENGTH_FOR_NSN,
    helper_functions::create_custom_extn_pattern,
    helper_types::NormalizedNumber,
};

/// Maps digits of every supported script to ASCII and drops everything else.
pub(super) fn normalize_digits(number: &str) -> String {
    dec_from_char::normalize_decimals(number)
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

impl PhoneNumberUtil {
    /// Attempts to extract a possible number from the string passed in. This
    /// currently strips all leading characters that cannot be used to start a
    /// phone number. Characters that can be used to start a phone number are
    /// defined in the valid_start_char_pattern. If none of these characters are
    /// found in the number passed in, an error is returned. This function also
    /// attempts to strip off any alternative extensions or endings if two or
    /// more are present, such as in the case of: (530) 583-6985 x302/x2303. The
    /// second extension here makes this actually two phone numbers, (530)
    /// 583-6985 x302 and (530) 583-6985 x2303. We remove the second extension
    /// so that the first number is parsed correctly.
    pub(super) fn extract_possible_number<'a>(
        &self,
        phone_number: &'a str,
    ) -> Result<&'a str, NotANumberError> {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(phone_number) else {
            trace!("Number '{phone_number}' has no valid start character");
            return Err(NotANumberError::NoValidStartCharacter);
        };
        let mut extracted = &phone_number[start.start()..];

        // Remove trailing non-alpha non-numerical characters.
        if let Some(unwanted_end) = self.reg_exps.unwanted_end_char_pattern.find(extracted) {
            extracted = &extracted[..unwanted_end.start()];
        }
        // Check for extra numbers at the end.
        if let Some(first_number) = self
            .reg_exps
            .capture_up_to_second_number_start_pattern
            .captures(extracted)
            .and_then(|captures| captures.get(1))
        {
            extracted = first_number.as_str();
        }
        Ok(extracted)
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all. At the moment, checks to see that the string contains
    /// only plus signs, digits, punctuation and stars, and holds at least two
    /// digits.
    pub(super) fn is_viable_phone_number(&self, phone_number: &str) -> bool {
        self.reg_exps.valid_phone_number_pattern.is_match(phone_number)
            && normalize_digits(phone_number).len() >= MIN_LENGTH_FOR_NSN
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns it.
    pub(super) fn maybe_strip_extension<'a>(
        &self,
        phone_number: &'a str,
        extension_labels: Option<&[&str]>,
    ) -> (&'a str, Option<String>) {
        let custom_pattern: Regex;
        let extn_pattern = match extension_labels {
            Some(labels) if labels.iter().all(|label| label.is_empty()) => {
                return (phone_number, None);
            }
            Some(labels) => {
                // Caller labels are compiled per call and kept out of the
                // engine-wide cache.
                custom_pattern = match Regex::new(&create_custom_extn_pattern(labels)) {
                    Ok(pattern) => pattern,
                    Err(err) => {
                        error!("Extension labels {labels:?} give no usable pattern: {err}");
                        return (phone_number, None);
                    }
                };
                &custom_pattern
            }
            None => &self.reg_exps.extn_pattern,
        };

        let Some(captures) = extn_pattern.captures(phone_number) else {
            return (phone_number, None);
        };
        let Some(whole) = captures.get(0) else {
            return (phone_number, None);
        };
        let number_without_extension = &phone_number[..whole.start()];
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        if !self.is_viable_phone_number(number_without_extension) {
            return (phone_number, None);
        }
        // The extension digits sit in the first group that matched anything.
        let extension = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|group| normalize_digits(group.as_str()))
            .find(|digits| !digits.is_empty());
        match extension {
            Some(extension) => {
                trace!("Stripped extension '{extension}' from '{phone_number}'");
                (number_without_extension, Some(extension))
            }
            None => (phone_number, None),
        }
    }

    /// Reduces raw text to ASCII digits, a leading-plus marker and an optional
    /// extension.
    pub(super) fn normalize(
        &self,
        raw_input: &str,
        extension_labels: Option<&[&str]>,
    ) -> InternalResult<NormalizedNumber> {
        let number = self.extract_possible_number(raw_input)?;
        let (number, extension) = self.maybe_strip_extension(number, extension_labels);

        if !self.reg_exps.valid_phone_number_pattern.is_match(number) {
            trace!("Number '{number}' contains characters that are not allowed");
            return Err(NotANumberError::InvalidCharacters.into());
        }
        let has_plus = self.reg_exps.plus_chars_pattern.is_match(number);
        let digits = normalize_digits(number);
        if digits.len() < MIN_LENGTH_FOR_NSN {
            trace!("Number '{number}' has only {} digits", digits.len());
            return Err(NotANumberError::TooFewDigits.into());
        }
        Ok(NormalizedNumber {
            digits,
            has_plus,
            extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_digits;
    use crate::PhoneNumberUtil;

    #[test]
    fn custom_extension_labels_stay_out_of_the_cache() {
        let phone_util = PhoneNumberUtil::new();
        let input = "+33 6 89 55 55 55 poste 12";
        let cached_before = phone_util.reg_exps.regexp_cache.len();

        for labels in [&["poste"][..], &["poste", "apt"], &["apt", "poste"]] {
            for _ in 0..3 {
                assert_eq!(
                    ("+33 6 89 55 55 55", Some("12".to_owned())),
                    phone_util.maybe_strip_extension(input, Some(labels))
                );
            }
        }
        assert_eq!(cached_before, phone_util.reg_exps.regexp_cache.len());

        // A label the number doesn't carry leaves it untouched.
        assert_eq!((input, None), phone_util.maybe_strip_extension(input, Some(&["apt"][..])));
    }

    #[test]
    fn digits_of_any_script() {
        assert_eq!(normalize_digits("+971 (50) 123-4567"), "971501234567");
        // Arabic-Indic
        assert_eq!(normalize_digits("\u{0665}\u{0660}\u{0661}"), "501");
        // Eastern Arabic-Indic
        assert_eq!(normalize_digits("\u{06F5}\u{06F0}\u{06F1}"), "501");
        // Fullwidth
        assert_eq!(normalize_digits("\u{FF15}\u{FF10}\u{FF11}"), "501");
    }
}
