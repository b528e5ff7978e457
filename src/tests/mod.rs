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

use std::sync::LazyLock;

use crate::PhoneNumberUtil;

mod formatting_tests;

static PHONE_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init();
    PhoneNumberUtil::new()
});

pub(crate) fn get_phone_util() -> &'static PhoneNumberUtil {
    &PHONE_UTIL
}
