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

use crate::regexp_cache::InvalidRegexError;

/// Why a piece of text could not be turned into a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PhoneNumberError {
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    /// No known calling code could be found and no usable default region
    /// was given.
    #[error("Invalid country code")]
    InvalidCountryCode,
    /// Too few digits remain after the calling code was removed.
    #[error("Number is too short")]
    TooShort,
    /// More digits than any phone number may have.
    #[error("Number is too long")]
    TooLong,
    /// The digits do not form a valid number for any candidate region.
    #[error("Invalid number")]
    InvalidNumber,
    /// Metadata for a region referenced by the calling-code index is absent.
    #[error("Metadata for the resolved region is missing")]
    MetadataMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NotANumberError {
    #[error("No valid start character found")]
    NoValidStartCharacter,
    #[error("Number contains characters that are not digits or punctuation")]
    InvalidCharacters,
    #[error("Too few digits")]
    TooFewDigits,
}

#[derive(Debug, PartialEq, Error)]
pub(crate) enum PhoneNumberErrorInternal {
    #[error("{0}")]
    FailedToParse(#[from] PhoneNumberError),
    #[error("{0}")]
    RegexError(#[from] InvalidRegexError),
}

pub(crate) type InternalResult<T> = std::result::Result<T, PhoneNumberErrorInternal>;

/// Possible outcomes when testing a digit count against permitted lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    /// This is also returned when there are no numbers of the requested type at
    /// all for this region.
    #[error("\
    The number is longer than the shortest valid numbers for this region,\
    shorter than the longest valid numbers for this region, and does not\
    itself have a number length that matches valid numbers for this region\
    ")]
    InvalidLength,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

impl From<NotANumberError> for PhoneNumberErrorInternal {
    fn from(value: NotANumberError) -> Self {
        PhoneNumberError::NotANumber(value).into()
    }
}

impl PhoneNumberErrorInternal {
    /// Metadata patterns are compiled when the repository is built, so a
    /// regex error here means the engine built a pattern of its own wrongly.
    pub fn into_public(self) -> PhoneNumberError {
        match self {
            PhoneNumberErrorInternal::FailedToParse(err) => err,
            PhoneNumberErrorInternal::RegexError(err) => {
                panic!("A valid regex is expected in metadata; this indicates a library bug! {}", err)
            }
        }
    }
}
