//! Parsing, validation and formatting of international phone numbers over a
//! protobuf-described numbering-plan corpus.
//!
//! ```ignore
//! use rphonenumberkit::{PhoneNumberFormat, PhoneNumberUtil};
//!
//! let phone_util = PhoneNumberUtil::new();
//! let number = phone_util.parse("+33 6 89 55 55 55", None)?;
//! assert_eq!(phone_util.format(&number, PhoneNumberFormat::E164, true)?, "+33689555555");
//! ```

mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod metadata;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use metadata::{MetadataError, MetadataRepository};
pub use phonenumberutil::{
    CountryCodeSource, NotANumberError, ParseOptions, PhoneNumber, PhoneNumberError,
    PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil,
};
pub use proto_gen::phonemetadata;
