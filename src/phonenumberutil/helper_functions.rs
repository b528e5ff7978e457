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

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::phonemetadata::{PhoneMetadata, PhoneNumberDesc};

use super::{
    NumberLengthType, PhoneNumberFormat, PhoneNumberType,
    errors::ValidationError,
    helper_constants::{
        DIGITS, MAX_EXTENSION_DIGITS, OPTIONAL_EXT_SUFFIX, PLUS_SIGN,
        POSSIBLE_CHARS_AFTER_EXT_LABEL, POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        RFC3966_EXTN_PREFIX, RFC3966_PREFIX,
    },
};

/// Returns a pointer to the description inside the metadata of the appropriate
/// type.
pub(super) fn get_number_desc_by_type(
    metadata: &PhoneMetadata,
    phone_number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match phone_number_type {
        PhoneNumberType::PremiumRate => &metadata.premium_rate,
        PhoneNumberType::TollFree => &metadata.toll_free,
        PhoneNumberType::Mobile => &metadata.mobile,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &metadata.fixed_line,
        PhoneNumberType::SharedCost => &metadata.shared_cost,
        PhoneNumberType::VoIP => &metadata.voip,
        PhoneNumberType::PersonalNumber => &metadata.personal_number,
        PhoneNumberType::Pager => &metadata.pager,
        PhoneNumberType::UAN => &metadata.uan,
        PhoneNumberType::VoiceMail => &metadata.voicemail,
        // Instead of the default case, we only match `Unknown`
        PhoneNumberType::Unknown => &metadata.general_desc,
    }
}

/// Puts the calling code in front of an already formatted national number.
/// National format is returned untouched.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    if let PhoneNumberFormat::National = number_format {
        return;
    }
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    let new_str = match number_format {
        PhoneNumberFormat::E164 => {
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number)
        }
        PhoneNumberFormat::International => {
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number)
        }
        PhoneNumberFormat::RFC3966 => fast_cat::concat_str!(
            RFC3966_PREFIX,
            PLUS_SIGN,
            country_calling_code_str,
            "-",
            &formatted_number
        ),
        // here code is already returned
        PhoneNumberFormat::National => return,
    };
    *formatted_number = new_str;
}

/// Helper method for constructing regular expressions for parsing. Creates an
/// expression that captures up to max_length digits.
pub(super) fn extn_digits(max_length: u32) -> String {
    let mut buf = itoa::Buffer::new();
    let max_length_str = buf.format(max_length);
    fast_cat::concat_str!("([", DIGITS, "]{1,", max_length_str, "})")
}

// Helper initialiser method to create the regular-expression pattern to match
// extensions. Note that:
// - There are currently several capturing groups for the extension itself, the
// first non-empty one holds the digits.
// - The only capturing groups should be around the digits that you want to
// capture as part of the extension, or else parsing will fail!
pub(super) fn create_extn_pattern() -> String {
    // We cap the maximum length of an extension based on the ambiguity of the
    // way the extension is prefixed. As per ITU, the officially allowed
    // length for extensions is actually 40, but we don't support this since we
    // haven't seen real examples and this introduces many false interpretations
    // as the extension labels are not standardized.
    let ext_limit_after_explicit_label = MAX_EXTENSION_DIGITS;
    let ext_limit_after_likely_label = 15;
    let ext_limit_after_ambiguous_char = 9;
    let ext_limit_when_not_sure = 6;

    // Two options for representing any non-ASCII character like ó - the
    // character itself, and one in the unicode decomposed form with the
    // combining acute accent.
    let explicit_ext_labels = "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|(?:\u{FF45})?\u{FF58}\u{FF54}(?:\u{FF4E})?|\u{0434}\u{043E}\u{0431}|anexo)";
    // One-character symbols that can be used to indicate an extension, and less
    // commonly used or more ambiguous extension labels.
    let ambiguous_ext_labels = "(?:[x\u{FF58}#\u{FF03}~\u{FF5E}]|int|\u{FF49}\u{FF4E}\u{FF54})";
    // When extension is not separated clearly.
    let ambiguous_separator = "[- ]+";

    let rfc_extn = fast_cat::concat_str!(
        RFC3966_EXTN_PREFIX,
        &extn_digits(ext_limit_after_explicit_label)
    );
    let explicit_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        explicit_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_explicit_label),
        OPTIONAL_EXT_SUFFIX
    );
    let ambiguous_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        ambiguous_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_ambiguous_char),
        OPTIONAL_EXT_SUFFIX
    );
    let american_style_extn_with_suffix = fast_cat::concat_str!(
        ambiguous_separator,
        &extn_digits(ext_limit_when_not_sure),
        "#"
    );

    // ",," is commonly used for auto dialling the extension when connected.
    // Semi-colon works in Iphone and also in Android to pop up a button with
    // the extension number following.
    let auto_dialling_and_ext_labels_found = "(?:,{2}|;)";
    // This is same as POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL, but not
    // matching comma as extension label may have it.
    let possible_separators_number_ext_label_no_comma = "[ \u{00A0}\\t]*";

    let auto_dialling_extn = fast_cat::concat_str!(
        possible_separators_number_ext_label_no_comma,
        auto_dialling_and_ext_labels_found,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_likely_label),
        OPTIONAL_EXT_SUFFIX
    );
    let only_commas_extn = fast_cat::concat_str!(
        possible_separators_number_ext_label_no_comma,
        "(?:,)+",
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_ambiguous_char),
        OPTIONAL_EXT_SUFFIX
    );

    // The first alternative covers RFC 3966 format, where the extension is
    // added using ";ext=". The second more generic where extension is mentioned
    // with explicit labels like "ext:". In both the above cases we allow more
    // numbers in extension than any other extension labels. The third one
    // captures when single character extension labels or less commonly used
    // labels are present. The fourth one covers the special case of
    // American numbers where the extension is written with a hash at the end,
    // such as "- 503#". The last two are the auto-dialling forms.
    fast_cat::concat_str!(
        &rfc_extn,
        "|",
        &explicit_extn,
        "|",
        &ambiguous_extn,
        "|",
        &american_style_extn_with_suffix,
        "|",
        &auto_dialling_extn,
        "|",
        &only_commas_extn
    )
}

/// Builds an extension matcher recognising only the given labels.
pub(super) fn create_custom_extn_pattern(labels: &[&str]) -> String {
    let mut alternatives = String::new();
    for label in labels.iter().filter(|label| !label.is_empty()) {
        if !alternatives.is_empty() {
            alternatives.push('|');
        }
        alternatives.push_str(&regex::escape(label));
    }
    fast_cat::concat_str!(
        "(?i)(?:",
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        "(?:",
        &alternatives,
        ")",
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(MAX_EXTENSION_DIGITS),
        OPTIONAL_EXT_SUFFIX,
        ")$"
    )
}

/// Returns `true` if there is any possible number data set for a particular
/// PhoneNumberDesc.
pub(super) fn desc_has_possible_number_data(desc: &PhoneNumberDesc) -> bool {
    // If this is empty, it means numbers of this type inherit from the "general
    // desc" -> the value "-1" means that no numbers exist for this type.
    desc.possible_length.len() != 1 || desc.possible_length.first().is_some_and(|l| *l != -1)
}

/// Returns `true` if there is any data set for a particular PhoneNumberDesc.
pub(super) fn desc_has_data(desc: &PhoneNumberDesc) -> bool {
    // We don't bother checking the possible_length_local_only, since if this is
    // the only thing that's present we don't really support the type at all.
    desc.has_example_number()
        || (!desc.possible_length.is_empty() && desc_has_possible_number_data(desc))
        || desc.has_national_number_pattern()
}

/// Returns the types we have metadata for based on the PhoneMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(metadata: &PhoneMetadata) -> HashSet<PhoneNumberType> {
    PhoneNumberType::iter()
        // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
        // represents that a particular number type can't be
        // determined) or UNKNOWN (the non-type).
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| desc_has_data(get_number_desc_by_type(metadata, *number_type)))
        .collect()
}

/// Helper method to check a number against the possible lengths of the
/// region, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    phone_metadata: &PhoneMetadata,
) -> Result<NumberLengthType, ValidationError> {
    let general_desc = &phone_metadata.general_desc;
    let possible_lengths = &general_desc.possible_length;

    // A region without numbers carries a single possible length of -1.
    let (Some(&minimum_length), Some(&maximum_length)) =
        (possible_lengths.iter().min(), possible_lengths.iter().max())
    else {
        return Err(ValidationError::InvalidLength);
    };
    if minimum_length == -1 {
        return Err(ValidationError::InvalidLength);
    }

    let actual_length = phone_number.len() as i32;
    // There is never an overlap between the possible lengths and the
    // local-only lengths.
    if general_desc.possible_length_local_only.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }
    if minimum_length > actual_length {
        Err(ValidationError::TooShort)
    } else if maximum_length < actual_length {
        Err(ValidationError::TooLong)
    } else if possible_lengths.contains(&actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(ValidationError::InvalidLength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_with_lengths(general: &[i32], local: &[i32]) -> PhoneMetadata {
        let mut metadata = PhoneMetadata::new();
        let desc = metadata.general_desc.mut_or_insert_default();
        desc.possible_length = general.to_vec();
        desc.possible_length_local_only = local.to_vec();
        metadata
    }

    #[test]
    fn number_length_bounds() {
        let metadata = metadata_with_lengths(&[8, 10], &[7]);
        assert_eq!(
            test_number_length("1234567", &metadata),
            Ok(NumberLengthType::IsPossibleLocalOnly)
        );
        assert_eq!(
            test_number_length("123456", &metadata),
            Err(ValidationError::TooShort)
        );
        assert_eq!(
            test_number_length("123456789", &metadata),
            Err(ValidationError::InvalidLength)
        );
        assert_eq!(
            test_number_length("1234567890", &metadata),
            Ok(NumberLengthType::IsPossible)
        );
        assert_eq!(
            test_number_length("12345678901", &metadata),
            Err(ValidationError::TooLong)
        );
    }

    #[test]
    fn region_without_numbers_has_invalid_length() {
        let metadata = metadata_with_lengths(&[-1], &[]);
        assert_eq!(
            test_number_length("800123456", &metadata),
            Err(ValidationError::InvalidLength)
        );
    }

    #[test]
    fn unsupported_type_is_not_listed() {
        let mut metadata = metadata_with_lengths(&[9], &[]);
        metadata.toll_free.mut_or_insert_default().possible_length = vec![-1];
        metadata.mobile.mut_or_insert_default().set_national_number_pattern("6\\d{8}".to_owned());
        let supported = get_supported_types_for_metadata(&metadata);
        assert!(!supported.contains(&PhoneNumberType::TollFree));
        assert!(supported.contains(&PhoneNumberType::Mobile));
    }

    #[test]
    fn custom_extension_pattern_escapes_labels() {
        let pattern = create_custom_extn_pattern(&["poste", "a.b"]);
        let regex = regex::Regex::new(&pattern).unwrap();
        assert_eq!(&regex.captures("0123 POSTE: 12").unwrap()[1], "12");
        assert!(regex.captures("0123 aXb 12").is_none());
        assert_eq!(&regex.captures("0123 a.b 7#").unwrap()[1], "7");
    }

    #[test]
    fn prefixes_calling_code() {
        let mut number = "6 89 55 55 55".to_owned();
        prefix_number_with_country_calling_code(33, PhoneNumberFormat::International, &mut number);
        assert_eq!(number, "+33 6 89 55 55 55");

        let mut number = "6-89-55-55-55".to_owned();
        prefix_number_with_country_calling_code(33, PhoneNumberFormat::RFC3966, &mut number);
        assert_eq!(number, "tel:+33-6-89-55-55-55");

        let mut number = "06 89 55 55 55".to_owned();
        prefix_number_with_country_calling_code(33, PhoneNumberFormat::National, &mut number);
        assert_eq!(number, "06 89 55 55 55");
    }
}
