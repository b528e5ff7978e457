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

use std::sync::Arc;

use regex::Regex;

use crate::{
    phonenumberutil::{
        helper_constants::{
            CAPTURE_UP_TO_SECOND_NUMBER_START, DIGITS, PLUS_CHARS, STAR_SIGN, VALID_PUNCTUATION,
        },
        helper_functions::create_extn_pattern,
    },
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Cache for patterns coming from metadata. Shared with the matcher.
    pub regexp_cache: Arc<RegexCache>,

    /// Regular expression of acceptable characters that may start a phone number
    /// for the purposes of parsing. This allows us to strip away meaningless
    /// prefixes to phone numbers that may be mistakenly given to us. This consists
    /// of digits of any script and the plus symbol. It does not include other
    /// punctuation, as this will be stripped later during parsing and is of no
    /// information value when parsing a number.
    pub valid_start_char_pattern: Regex,

    /// Regular expression of valid characters before a marker that might indicate
    /// a second number.
    pub capture_up_to_second_number_start_pattern: Regex,

    /// Regular expression of trailing characters that we want to remove. We remove
    /// all characters that are not alpha or numerical characters. The hash
    /// character is retained here, as it may signify the previous block was an
    /// extension.
    pub unwanted_end_char_pattern: Regex,

    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// Regexp of all known extension prefixes used by different regions followed
    /// by 1 or more valid digits, for use when parsing. Anchored at the end of
    /// the input and matched case-insensitively.
    pub extn_pattern: Regex,

    /// Shape of a number once the extension is gone: optional leading plus
    /// signs, then digits of any script mixed with punctuation and stars.
    pub valid_phone_number_pattern: Regex,

    // The first_group_capturing_pattern was originally set to $1 but there
    // are some countries for which the first group is not used in the
    // national pattern (e.g. Argentina) so the $1 group does not match
    // correctly. Therefore, we use \d, so that the first group actually
    // used in the pattern will be matched.
    pub first_group_capturing_pattern: Regex,

    pub plus_chars_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new(regexp_cache: Arc<RegexCache>) -> Result<Self, InvalidRegexError> {
        // it'll be initialized only once per engine, so we can use slow format!
        let extn_patterns_for_parsing = create_extn_pattern();
        Ok(Self {
            regexp_cache,
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, DIGITS))?,
            capture_up_to_second_number_start_pattern: Regex::new(
                CAPTURE_UP_TO_SECOND_NUMBER_START,
            )?,
            unwanted_end_char_pattern: Regex::new("[^\\p{N}\\p{L}#]+$")?,
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION))?,
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", &extn_patterns_for_parsing))?,
            valid_phone_number_pattern: Regex::new(&format!(
                "^[{}]*[{}{}{}]*$",
                PLUS_CHARS, VALID_PUNCTUATION, STAR_SIGN, DIGITS
            ))?,
            first_group_capturing_pattern: Regex::new("(\\$\\d)")?,
            plus_chars_pattern: Regex::new(&format!("^[{}]+", PLUS_CHARS))?,
        })
    }
}
