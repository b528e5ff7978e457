use super::{get_phone_util, region_code::RegionCode};
use crate::{
    MetadataRepository, PhoneNumberError, PhoneNumberFormat, PhoneNumberUtil,
};

/// Formats `input` in every format with the calling code included.
fn format_all(
    phone_util: &PhoneNumberUtil,
    input: &str,
    default_region: Option<&str>,
) -> [String; 4] {
    let number = phone_util.parse(input, default_region).unwrap();
    [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
        PhoneNumberFormat::RFC3966,
    ]
    .map(|number_format| phone_util.format(&number, number_format, true).unwrap())
}

#[test]
fn format_fr_number() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+33689555555",
            "+33 6 89 55 55 55",
            "06 89 55 55 55",
            "tel:+33-6-89-55-55-55"
        ],
        format_all(&phone_util, "+33689555555", None)
    );
    // Shared-cost numbers put the trunk prefix apart from the first group.
    assert_eq!(
        [
            "+33810123456",
            "+33 810 12 34 56",
            "0 810 12 34 56",
            "tel:+33-810-12-34-56"
        ],
        format_all(&phone_util, "0810123456", Some(RegionCode::fr()))
    );
}

#[test]
fn format_without_prefix() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+33689555555", None).unwrap();

    assert_eq!(
        "689555555",
        phone_util.format(&number, PhoneNumberFormat::E164, false).unwrap()
    );
    assert_eq!(
        "6 89 55 55 55",
        phone_util
            .format(&number, PhoneNumberFormat::International, false)
            .unwrap()
    );
    // National never carries the calling code, RFC3966 always does.
    assert_eq!(
        "06 89 55 55 55",
        phone_util.format(&number, PhoneNumberFormat::National, false).unwrap()
    );
    assert_eq!(
        "tel:+33-6-89-55-55-55",
        phone_util.format(&number, PhoneNumberFormat::RFC3966, false).unwrap()
    );
}

#[test]
fn format_gb_number() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+442070313000",
            "+44 20 7031 3000",
            "020 7031 3000",
            "tel:+44-20-7031-3000"
        ],
        format_all(&phone_util, "+44 20 7031 3000", None)
    );
    assert_eq!(
        [
            "+447912345678",
            "+44 7912 345678",
            "07912 345678",
            "tel:+44-7912-345678"
        ],
        format_all(&phone_util, "07912 345678", Some(RegionCode::gb()))
    );
    assert_eq!(
        [
            "+447640123456",
            "+44 76 4012 3456",
            "076 4012 3456",
            "tel:+44-76-4012-3456"
        ],
        format_all(&phone_util, "+44 7640 123456", None)
    );
    assert_eq!(
        [
            "+448001234567",
            "+44 800 123 4567",
            "0800 123 4567",
            "tel:+44-800-123-4567"
        ],
        format_all(&phone_util, "+44 800 123 4567", None)
    );
}

#[test]
fn format_de_number() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+4930123456",
            "+49 30 123456",
            "030 123456",
            "tel:+49-30-123456"
        ],
        format_all(&phone_util, "+49 30 123456", None)
    );
    assert_eq!(
        [
            "+4915123456789",
            "+49 1512 3456789",
            "01512 3456789",
            "tel:+49-1512-3456789"
        ],
        format_all(&phone_util, "0151 23456789", Some(RegionCode::de()))
    );
}

#[test]
fn format_it_number() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+390236618300",
            "+39 02 3661 8300",
            "02 3661 8300",
            "tel:+39-02-3661-8300"
        ],
        format_all(&phone_util, "+39 02 3661 8300", None)
    );
    assert_eq!(
        [
            "+393456789012",
            "+39 345 678 9012",
            "345 678 9012",
            "tel:+39-345-678-9012"
        ],
        format_all(&phone_util, "+39 345 678 9012", None)
    );
}

#[test]
fn format_au_number() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+61212345678",
            "+61 2 1234 5678",
            "(02) 1234 5678",
            "tel:+61-2-1234-5678"
        ],
        format_all(&phone_util, "+61 2 1234 5678", None)
    );
    assert_eq!(
        [
            "+61412345678",
            "+61 412 345 678",
            "0412 345 678",
            "tel:+61-412-345-678"
        ],
        format_all(&phone_util, "0412 345 678", Some(RegionCode::au()))
    );
}

#[test]
fn format_asian_numbers() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+81312345678",
            "+81 3-1234-5678",
            "03-1234-5678",
            "tel:+81-3-1234-5678"
        ],
        format_all(&phone_util, "+81 3 1234 5678", None)
    );
    assert_eq!(
        [
            "+819012345678",
            "+81 90-1234-5678",
            "090-1234-5678",
            "tel:+81-90-1234-5678"
        ],
        format_all(&phone_util, "090-1234-5678", Some(RegionCode::jp()))
    );
    // Chinese mobile numbers are written without the trunk prefix.
    assert_eq!(
        [
            "+8613123456789",
            "+86 131 2345 6789",
            "131 2345 6789",
            "tel:+86-131-2345-6789"
        ],
        format_all(&phone_util, "+86 131 2345 6789", None)
    );
    assert_eq!(
        [
            "+861012345678",
            "+86 10 1234 5678",
            "010 1234 5678",
            "tel:+86-10-1234-5678"
        ],
        format_all(&phone_util, "+86 10 1234 5678", None)
    );
}

#[test]
fn format_in_number() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+916297062979",
            "+91 62970 62979",
            "062970 62979",
            "tel:+91-62970-62979"
        ],
        format_all(&phone_util, "6297062979", Some(RegionCode::in_()))
    );
    assert_eq!(
        [
            "+9118001234567",
            "+91 1800 123 4567",
            "1800 123 4567",
            "tel:+91-1800-123-4567"
        ],
        format_all(&phone_util, "1800 123 4567", Some(RegionCode::in_()))
    );
}

#[test]
fn format_nationally_only_pattern() {
    let phone_util = get_phone_util();

    // Dutch short numbers are grouped at home only.
    assert_eq!(
        ["+3114020", "+31 14020", "14 020", "tel:+31-14020"],
        format_all(&phone_util, "14020", Some(RegionCode::nl()))
    );
    assert_eq!(
        [
            "+41446681800",
            "+41 44 668 18 00",
            "044 668 18 00",
            "tel:+41-44-668-18-00"
        ],
        format_all(&phone_util, "+41 44 668 1800", None)
    );
}

#[test]
fn format_shared_calling_code() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+79161955558",
            "+7 916 195-55-58",
            "8 (916) 195-55-58",
            "tel:+7-916-195-55-58"
        ],
        format_all(&phone_util, "89161955558", Some(RegionCode::ru()))
    );
    // Kazakhstan borrows the formats of Russia, which group its numbers
    // differently.
    assert_eq!(
        [
            "+77771108531",
            "+7 777 110 8531",
            "8 (777) 110 8531",
            "tel:+7-777-110-8531"
        ],
        format_all(&phone_util, "+7 777 110 85 31", None)
    );
    assert_eq!(
        [
            "+16502530000",
            "+1 650-253-0000",
            "(650) 253-0000",
            "tel:+1-650-253-0000"
        ],
        format_all(&phone_util, "+1 650 253 0000", None)
    );
    // The Bahamas borrow the formats of the US.
    assert_eq!(
        [
            "+12423591234",
            "+1 242-359-1234",
            "(242) 359-1234",
            "tel:+1-242-359-1234"
        ],
        format_all(&phone_util, "+1 242 359 1234", None)
    );
}

#[test]
fn format_with_national_prefix_transform() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+5491112345678",
            "+54 9 11 1234-5678",
            "011 15-1234-5678",
            "tel:+54-9-11-1234-5678"
        ],
        format_all(&phone_util, "011 15-1234-5678", Some(RegionCode::ar()))
    );
    assert_eq!(
        [
            "+541112345678",
            "+54 11 1234-5678",
            "011 1234-5678",
            "tel:+54-11-1234-5678"
        ],
        format_all(&phone_util, "+54 11 1234-5678", None)
    );
    assert_eq!(
        [
            "+5511961234567",
            "+55 11 96123-4567",
            "(11) 96123-4567",
            "tel:+55-11-96123-4567"
        ],
        format_all(&phone_util, "0 15 11 96123 4567", Some(RegionCode::br()))
    );
    assert_eq!(
        [
            "+551123456789",
            "+55 11 2345-6789",
            "(11) 2345-6789",
            "tel:+55-11-2345-6789"
        ],
        format_all(&phone_util, "+55 11 2345 6789", None)
    );
}

#[test]
fn format_with_extension() {
    let phone_util = get_phone_util();

    assert_eq!(
        [
            "+12025550000",
            "+1 202-555-0000 ext. 84",
            "(202) 555-0000 ext. 84",
            "tel:+1-202-555-0000;ext=84"
        ],
        format_all(&phone_util, "+1 202-555-0000 ext. 84", None)
    );
    // Regions may prefer their own extension prefix.
    assert_eq!(
        [
            "+447739555555",
            "+44 7739 555555 x28",
            "07739 555555 x28",
            "tel:+44-7739-555555;ext=28"
        ],
        format_all(&phone_util, "+44 7739 555555 x28", None)
    );
}

#[test]
fn format_with_missing_metadata() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+44 7739 555555", None).unwrap();

    let fr_only = PhoneNumberUtil::new_for_metadata(
        MetadataRepository::from_text_format(
            r#"
            metadata {
              id: "FR"
              country_code: 33
              national_prefix: "0"
              general_desc {
                national_number_pattern: "[1-9]\\d{8}"
                possible_length: 9
              }
            }
            "#,
        )
        .unwrap(),
    );
    assert_eq!(
        Err(PhoneNumberError::MetadataMissing),
        fr_only.format(&number, PhoneNumberFormat::International, true)
    );
    assert_eq!(
        Err(PhoneNumberError::MetadataMissing),
        fr_only.format(&number, PhoneNumberFormat::National, true)
    );
    // E164 needs nothing but the number itself.
    assert_eq!(
        Ok("+447739555555".to_owned()),
        fr_only.format(&number, PhoneNumberFormat::E164, true)
    );
}

#[test]
fn national_significant_number_and_display() {
    let phone_util = get_phone_util();

    let number = phone_util.parse("+390549555555", None).unwrap();
    assert_eq!("0549555555", phone_util.get_national_significant_number(&number));
    assert_eq!("+390549555555", number.to_string());

    let number = phone_util.parse("+33689555555", None).unwrap();
    assert_eq!("689555555", phone_util.get_national_significant_number(&number));
    assert_eq!("+33689555555", number.to_string());
}
