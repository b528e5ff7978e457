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

use log::error;

use crate::{
    interfaces,
    phonemetadata::PhoneNumberDesc,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: Arc<RegexCache>,
}

impl RegexBasedMatcher {
    pub fn new(cache: Arc<RegexCache>) -> Self {
        Self { cache }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
    ) -> Result<bool, InvalidRegexError> {
        Ok(self.cache.get_anchored_regex(number_pattern)?.is_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(&self, number: &str, number_desc: &PhoneNumberDesc) -> bool {
        let national_number_pattern = number_desc.national_number_pattern();
        // An absent pattern means the region has no numbers of this kind.
        if national_number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, national_number_pattern) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", national_number_pattern, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexBasedMatcher;
    use crate::{interfaces::MatcherApi, phonemetadata::PhoneNumberDesc, regexp_cache::RegexCache};

    fn desc(pattern: &str) -> PhoneNumberDesc {
        let mut desc = PhoneNumberDesc::new();
        desc.set_national_number_pattern(pattern.to_owned());
        desc
    }

    #[test]
    fn matches_whole_number_only() {
        let matcher = RegexBasedMatcher::new(Arc::new(RegexCache::new()));
        let desc = desc("9\\d{3}|9\\d{9}");
        assert!(matcher.match_national_number("9161955558", &desc));
        assert!(matcher.match_national_number("9161", &desc));
        assert!(!matcher.match_national_number("91619555581", &desc));
        assert!(!matcher.match_national_number("8161955558", &desc));
    }

    #[test]
    fn empty_pattern_never_matches() {
        let matcher = RegexBasedMatcher::new(Arc::new(RegexCache::new()));
        assert!(!matcher.match_national_number("123", &PhoneNumberDesc::new()));
    }
}
