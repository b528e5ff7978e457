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

mod country_code;
mod enums;
mod errors;
mod formatting;
mod helper_constants;
mod helper_functions;
mod helper_types;
mod normalization;
mod parse_options;
mod phone_number;
mod phone_number_regexps_and_mappings;
#[allow(clippy::module_inception)]
mod phonenumberutil;
mod validation;

pub use enums::{CountryCodeSource, PhoneNumberFormat, PhoneNumberType};
pub(crate) use enums::NumberLengthType;
pub use errors::{NotANumberError, PhoneNumberError};
pub use parse_options::ParseOptions;
pub use phone_number::PhoneNumber;
pub use phonenumberutil::PhoneNumberUtil;
