use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphonenumberkit::{PhoneNumber, PhoneNumberFormat, PhoneNumberUtil};

use phonenumber::{
    self as rlp,
    country::Id::{self, AR, AU, FR, GB, IT, RU, US},
    Mode,
};

type TestEntity = (&'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", "US", US),
        ("+1 202-555-0000 ext. 84", "US", US),
        ("+44 20 7031 3000", "GB", GB),
        ("07912 345678", "GB", GB),
        ("011 15-1234-5678", "AR", AR),
        ("02 3661 8300", "IT", IT),
        ("0412 345 678", "AU", AU),
        ("8 916 195-55-58", "RU", RU),
        ("06 89 55 55 55", "FR", FR),
    ]
}

fn convert_to_rlp_numbers(numbers: &[TestEntity]) -> Vec<rlp::PhoneNumber> {
    numbers
        .iter()
        .filter_map(|s| rlp::parse(Some(s.2), s.0).ok())
        .collect()
}

fn convert_to_rphonenumberkit_numbers(
    phone_util: &PhoneNumberUtil,
    numbers: &[TestEntity],
) -> Vec<PhoneNumber> {
    numbers
        .iter()
        .map(|s| phone_util.parse(s.0, Some(s.1)).unwrap())
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let phone_util = PhoneNumberUtil::new();

    let numbers = setup_numbers();
    let rlp_numbers = convert_to_rlp_numbers(&numbers);
    let numbers = convert_to_rphonenumberkit_numbers(&phone_util, &numbers);

    let mut group = c.benchmark_group("Formatting Comparison");

    let mut test = |format_a: PhoneNumberFormat, format_b: Mode| {
        group.bench_function(format!("rphonenumberkit: format({:?})", format_a), |b| {
            b.iter(|| {
                for number in &numbers {
                    phone_util
                        .format(black_box(number), black_box(format_a), true)
                        .unwrap();
                }
            })
        });

        group.bench_function(format!("rust-phonenumber: format({:?})", format_b), |b| {
            b.iter(|| {
                for number in &rlp_numbers {
                    rlp::format(black_box(number)).mode(format_b).to_string();
                }
            })
        });
    };

    test(PhoneNumberFormat::E164, Mode::E164);
    test(PhoneNumberFormat::International, Mode::International);
    test(PhoneNumberFormat::National, Mode::National);
    test(PhoneNumberFormat::RFC3966, Mode::Rfc3966);
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
