use carbonintensity_api::endpoint::ENDPOINTS;
use carbonintensity_api::path::{encode_segment, render_path};
use carbonintensity_api::{ErrorKind, Operation, ParamKind, RenderedRequest, Segment};

const FROM: &str = "2023-01-01T00:00Z";
const TO: &str = "2023-01-02T00:00Z";

fn render(op: Operation, params: &[&str]) -> String {
    RenderedRequest::new(op, params).unwrap().path
}

#[test]
fn national_intensity_paths() {
    assert_eq!(render(Operation::CurrentIntensity, &[]), "/intensity");
    assert_eq!(render(Operation::TodaysIntensity, &[]), "/intensity/date");
    assert_eq!(
        render(Operation::IntensityForDate, &["2023-01-01"]),
        "/intensity/date/2023-01-01"
    );
    assert_eq!(render(Operation::IntensityFactors, &[]), "/intensity/factors");
    assert_eq!(
        render(Operation::IntensityAt, &[FROM]),
        "/intensity/2023-01-01T00%3A00Z"
    );
    assert_eq!(
        render(Operation::Intensity24hPast, &[FROM]),
        "/intensity/2023-01-01T00%3A00Z/pt24h"
    );
    assert_eq!(
        render(Operation::IntensityStats, &[FROM, TO]),
        "/intensity/stats/2023-01-01T00%3A00Z/2023-01-02T00%3A00Z"
    );
}

#[test]
fn generation_paths() {
    assert_eq!(render(Operation::CurrentGeneration, &[]), "/generation");
    assert_eq!(
        render(Operation::Generation24hPast, &[FROM]),
        "/generation/2023-01-01T00%3A00Z/pt24h"
    );
    assert_eq!(
        render(Operation::GenerationBetween, &[FROM, TO]),
        "/generation/2023-01-01T00%3A00Z/2023-01-02T00%3A00Z"
    );
}

#[test]
fn regional_paths() {
    assert_eq!(render(Operation::RegionalCurrent, &[]), "/regional");
    assert_eq!(render(Operation::RegionalEngland, &[]), "/regional/england");
    assert_eq!(render(Operation::RegionalWales, &[]), "/regional/wales");
    assert_eq!(
        render(Operation::RegionalPostcode, &["RG41"]),
        "/regional/postcode/RG41"
    );
    assert_eq!(
        render(Operation::RegionalRegionId, &["3"]),
        "/regional/regionid/3"
    );
    assert_eq!(
        render(Operation::Regional48hForwardRegionId, &[FROM, "3"]),
        "/regional/intensity/2023-01-01T00%3A00Z/fw48h/regionid/3"
    );
    assert_eq!(
        render(Operation::RegionalBetweenPostcode, &[FROM, TO, "SW1A"]),
        "/regional/intensity/2023-01-01T00%3A00Z/2023-01-02T00%3A00Z/postcode/SW1A"
    );
    assert_eq!(
        render(Operation::RegionalBetweenRegionId, &[FROM, TO, "13"]),
        "/regional/intensity/2023-01-01T00%3A00Z/2023-01-02T00%3A00Z/regionid/13"
    );
}

#[test]
fn full_postcode_with_space_stays_in_one_segment() {
    assert_eq!(
        render(Operation::RegionalPostcode, &["SW1A 1AA"]),
        "/regional/postcode/SW1A%201AA"
    );
}

#[test]
fn slash_in_value_is_encoded() {
    let path = render(Operation::RegionalRegionId, &["1/../../admin"]);
    assert_eq!(path, "/regional/regionid/1%2F..%2F..%2Fadmin");
    assert_eq!(path.split('/').count() - 1, 3);
}

#[test]
fn custom_template_rendering() {
    let segments = [
        Segment::Literal("intensity"),
        Segment::Param(ParamKind::From),
        Segment::Literal("fw24h"),
    ];
    assert_eq!(
        render_path(&segments, &["2024-02-29T23:30Z"]).unwrap(),
        "/intensity/2024-02-29T23%3A30Z/fw24h"
    );
}

#[test]
fn encoding_errors() {
    assert_eq!(encode_segment("").unwrap_err().kind(), ErrorKind::Encoding);
    assert_eq!(
        RenderedRequest::new(Operation::RegionalBetween, &[FROM, TO, "extra"])
            .unwrap_err()
            .kind(),
        ErrorKind::Encoding
    );
}

#[test]
fn catalog_size() {
    assert_eq!(ENDPOINTS.len(), 33);
    assert_eq!(
        ENDPOINTS.iter().filter(|e| e.name.ends_with("-postcode")).count(),
        5
    );
    assert_eq!(
        ENDPOINTS.iter().filter(|e| e.name.ends_with("-regionid")).count(),
        5
    );
}
