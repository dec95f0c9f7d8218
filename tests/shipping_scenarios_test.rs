use cep_shipping::{
    calculate_shipping, format_currency, is_valid, mask, Cep, RateTable, ShippingError,
    ShippingRegion,
};

const SAMPLE_INPUTS: &[&str] = &[
    "",
    "0",
    "123",
    "12345",
    "123456",
    "1234567",
    "01310000",
    "01310-000",
    "01.310-000",
    "CEP 20040-020, Rio",
    "99999999",
    "9999999999999",
    "abc-def",
    "  80010 010  ",
    "1a2b3c4d5e6f7g8h",
    "٠١٢٣٤٥٦٧٨",
];

fn ascii_digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

#[test]
fn test_mask_properties_over_samples() {
    for input in SAMPLE_INPUTS {
        let masked = mask(input);

        assert!(masked.len() <= 9, "{:?} -> {:?}", input, masked);
        assert_eq!(mask(&masked), masked, "mask not idempotent for {:?}", input);
        assert_eq!(
            is_valid(&masked),
            ascii_digit_count(input) >= 8,
            "validity mismatch for {:?} -> {:?}",
            input,
            masked
        );
    }
}

#[test]
fn test_capital_scenario() {
    let masked = mask("01310000");
    assert_eq!(masked, "01310-000");
    assert!(is_valid(&masked));

    let result = calculate_shipping(&masked).unwrap();
    assert_eq!(result.region, ShippingRegion::Capital);
    assert_eq!(result.price, 1500);
    assert_eq!((result.days_min, result.days_max), (1, 2));
}

#[test]
fn test_remote_catch_all_scenario() {
    let masked = mask("99999999");
    assert_eq!(masked, "99999-999");
    assert!(is_valid(&masked));

    let result = calculate_shipping(&masked).unwrap();
    assert_eq!(result.region, ShippingRegion::Remote);

    let widest = RateTable::default()
        .rates()
        .iter()
        .map(|rate| rate.days_max - rate.days_min)
        .max()
        .unwrap();
    assert_eq!(result.days_max - result.days_min, widest);
}

#[test]
fn test_partial_code_is_not_quoted() {
    let masked = mask("123");
    assert_eq!(masked, "123");
    assert!(!is_valid(&masked));
    assert!(matches!(
        calculate_shipping(&masked),
        Err(ShippingError::InvalidCep { .. })
    ));
}

#[test]
fn test_every_prefix_maps_to_one_region() {
    let table = RateTable::default();
    for prefix in (0..=99_999u32).step_by(7) {
        let cep = Cep::parse(&format!("{:05}-000", prefix)).unwrap();
        let first = calculate_shipping(cep.as_str()).unwrap();
        let again = calculate_shipping(cep.as_str()).unwrap();
        assert_eq!(first, again);
        assert_eq!(table.lookup(prefix).unwrap().region, first.region);
    }
}

#[test]
fn test_suffix_does_not_affect_quote() {
    let a = calculate_shipping("20040-000").unwrap();
    let b = calculate_shipping("20040-999").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.region, ShippingRegion::Interior);
}

#[test]
fn test_every_region_is_reachable() {
    let quoted: Vec<ShippingRegion> = ["00500-000", "01310-000", "13000-000", "40000-000", "90000-000"]
        .iter()
        .map(|cep| calculate_shipping(cep).unwrap().region)
        .collect();

    for region in ShippingRegion::ALL {
        assert!(quoted.contains(&region), "{:?} unreachable", region);
    }
}

#[test]
fn test_currency_for_order_lines() {
    assert_eq!(format_currency(1250000), "R$ 12.500,00");
    assert_eq!(format_currency(380000), "R$ 3.800,00");
    assert_eq!(format_currency(1630000), "R$ 16.300,00");
}
