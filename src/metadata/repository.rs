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

use std::collections::{HashMap, HashSet, VecDeque};

use log::{trace, warn};
use protobuf::Message;

use super::{BUNDLED_METADATA, MetadataError};
use crate::{
    i18n,
    phonemetadata::{PhoneMetadata, PhoneMetadataCollection},
};

/// Read-only store of per-region numbering-plan metadata.
///
/// Regions sharing a calling code are kept in an ordered list whose first
/// element is the main region for that code.
#[derive(Debug, Clone)]
pub struct MetadataRepository {
    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. Note regions under
    /// NANPA share the country calling code 1 and Russia and Kazakhstan share the
    /// country calling code 7. This is implemented as a sorted vector to
    /// achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,
}

impl MetadataRepository {
    /// Builds the repository from an already decoded collection.
    ///
    /// Every pattern of the collection is compiled once here, so a corpus
    /// with a broken pattern is rejected instead of failing on first use.
    pub fn new(collection: PhoneMetadataCollection) -> Result<Self, MetadataError> {
        check_collection_patterns(&collection)?;

        let mut region_to_metadata_map = HashMap::with_capacity(collection.metadata.len());
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        let mut main_regions = HashMap::<i32, usize>::new();

        for metadata in collection.metadata {
            let region_code = metadata.id().to_owned();
            if i18n::RegionCode::get_unknown() == region_code {
                warn!("Skipping metadata entry for the unknown region");
                continue;
            }
            let country_calling_code = metadata.country_code();
            if country_calling_code <= 0 {
                return Err(MetadataError::MissingCallingCode { region: region_code });
            }
            if region_to_metadata_map.contains_key(&region_code) {
                return Err(MetadataError::DuplicateRegion(region_code));
            }

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if metadata.main_country_for_code() {
                *main_regions.entry(country_calling_code).or_default() += 1;
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }
            region_to_metadata_map.insert(region_code, metadata);
        }

        let mut country_calling_code_to_region_code_map =
            Vec::with_capacity(country_calling_code_to_region_map.len());
        for (code, regions) in country_calling_code_to_region_map {
            match main_regions.get(&code).copied().unwrap_or(0) {
                // a single region is implicitly the main one
                0 if regions.len() > 1 => return Err(MetadataError::MissingMainRegion(code)),
                n if n > 1 => return Err(MetadataError::MultipleMainRegions(code)),
                _ => {}
            }
            country_calling_code_to_region_code_map.push((code, Vec::from(regions)));
        }
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_region_code_map.sort_by_key(|(code, _)| *code);

        trace!(
            "Loaded metadata for {} regions and {} calling codes",
            region_to_metadata_map.len(),
            country_calling_code_to_region_code_map.len()
        );
        Ok(Self {
            region_to_metadata_map,
            country_calling_code_to_region_code_map,
        })
    }

    /// Parses a `PhoneMetadataCollection` written in protobuf text format.
    pub fn from_text_format(text: &str) -> Result<Self, MetadataError> {
        let collection = protobuf::text_format::parse_from_str::<PhoneMetadataCollection>(text)?;
        Self::new(collection)
    }

    /// Decodes a binary-serialized `PhoneMetadataCollection`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetadataError> {
        let collection = PhoneMetadataCollection::parse_from_bytes(bytes)?;
        Self::new(collection)
    }

    /// The corpus compiled into the crate.
    pub fn bundled() -> Result<Self, MetadataError> {
        Self::from_bytes(BUNDLED_METADATA)
    }

    pub fn region_metadata(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    /// Region ids owning the calling code, main region first.
    pub fn region_ids(&self, country_calling_code: i32) -> Option<&[String]> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
    }

    pub fn main_region_id(&self, country_calling_code: i32) -> Option<&str> {
        self.region_ids(country_calling_code)
            .and_then(|regions| regions.first())
            .map(String::as_str)
    }

    pub fn main_region(&self, country_calling_code: i32) -> Option<&PhoneMetadata> {
        self.main_region_id(country_calling_code)
            .and_then(|region_code| self.region_metadata(region_code))
    }

    pub fn calling_code(&self, region_code: &str) -> Option<i32> {
        self.region_metadata(region_code)
            .map(|metadata| metadata.country_code())
    }

    pub fn has_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    /// Known calling codes in ascending order.
    pub fn calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }
}

fn check_collection_patterns(collection: &PhoneMetadataCollection) -> Result<(), MetadataError> {
    let mut checked_patterns = HashSet::new();
    for metadata in &collection.metadata {
        check_patterns(metadata, &mut checked_patterns)?;
    }
    trace!("Checked {} distinct metadata patterns", checked_patterns.len());
    Ok(())
}

/// Compiles each regular expression the engine may build from `metadata`.
/// Patterns already seen in another region are skipped.
fn check_patterns<'a>(
    metadata: &'a PhoneMetadata,
    checked_patterns: &mut HashSet<&'a str>,
) -> Result<(), MetadataError> {
    let descs = [
        &metadata.general_desc,
        &metadata.fixed_line,
        &metadata.mobile,
        &metadata.toll_free,
        &metadata.premium_rate,
        &metadata.shared_cost,
        &metadata.personal_number,
        &metadata.voip,
        &metadata.pager,
        &metadata.uan,
        &metadata.voicemail,
    ];
    let national_prefix_for_parsing = if metadata.has_national_prefix_for_parsing() {
        metadata.national_prefix_for_parsing()
    } else {
        metadata.national_prefix()
    };

    let patterns = descs
        .into_iter()
        .filter_map(|desc| desc.as_ref())
        .map(|desc| desc.national_number_pattern())
        .chain([
            national_prefix_for_parsing,
            metadata.international_prefix(),
            metadata.leading_digits(),
        ])
        .chain(metadata.number_format.iter().flat_map(|format| {
            std::iter::once(format.pattern())
                .chain(format.leading_digits_pattern.iter().map(String::as_str))
        }));

    for pattern in patterns {
        if pattern.is_empty() || !checked_patterns.insert(pattern) {
            continue;
        }
        // Only the syntax is of interest; the engine compiles lazily.
        if let Err(source) = regex::Regex::new(pattern) {
            return Err(MetadataError::InvalidPattern {
                region: metadata.id().to_owned(),
                pattern: pattern.to_owned(),
                source,
            });
        }
    }
    Ok(())
}
