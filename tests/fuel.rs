mod common;

use axum::http::StatusCode;
use common::{TestCase, get, post_form, run_group_test};
use enercalc::Deployment;

#[tokio::test]
async fn test_coal_composition_group() {
    let cases = vec![
        TestCase {
            name: "Donetsk coal",
            fields: vec![
                ("hydrogen", "1.9"),
                ("carbon", "21.1"),
                ("sulfur", "2.6"),
                ("nitrogen", "0.2"),
                ("oxygen", "7.1"),
                ("moisture", "53"),
                ("ash", "14.1"),
            ],
            expected: vec![
                ("/coefs/dry", 2.127659574468085),
                ("/coefs/combustible", 3.0395136778115504),
                ("/compositionDry/carbon", 44.8936170212766),
                ("/compositionCombustible/hydrogen", 5.775075987841945),
                ("/lowHeatingValues/raw", 7.2953),
                ("/lowHeatingValues/dry", 18.341063829787235),
                ("/lowHeatingValues/combustible", 26.201519756838906),
            ],
        },
        TestCase {
            name: "Simple blend",
            fields: vec![
                ("carbon", "50"),
                ("hydrogen", "5"),
                ("oxygen", "10"),
                ("sulfur", "1"),
                ("moisture", "10"),
                ("ash", "5"),
            ],
            expected: vec![
                ("/coefs/dry", 100.0 / 90.0),
                ("/coefs/combustible", 100.0 / 85.0),
                ("/compositionDry/carbon", 50.0 * 100.0 / 90.0),
                ("/compositionCombustible/carbon", 50.0 * 100.0 / 85.0),
            ],
        },
        TestCase {
            name: "Out of range",
            fields: vec![("carbon", "120"), ("hydrogen", "-3"), ("moisture", "10")],
            expected: vec![
                ("/compositionDry/carbon", 120.0 * 100.0 / 90.0),
                ("/compositionDry/hydrogen", -3.0 * 100.0 / 90.0),
            ],
        },
    ];

    run_group_test(Deployment::Fuel, "/evaluate1", cases, 1e-12).await;
}

#[tokio::test]
async fn test_fuel_oil_group() {
    let cases = vec![TestCase {
        name: "High-sulfur mazut",
        fields: vec![
            ("carbon", "85.5"),
            ("hydrogen", "11.2"),
            ("oxygen", "0.8"),
            ("sulfur", "2.5"),
            ("combustibleLHV", "40.4"),
            ("rawMoisture", "2"),
            ("dryAsh", "0.15"),
            ("combustibleVanadium", "333.3"),
        ],
        expected: vec![
            ("/rawComposition/carbon", 83.66175),
            ("/rawComposition/hydrogen", 10.9592),
            ("/rawComposition/oxygen", 0.7828),
            ("/rawComposition/sulfur", 2.44625),
            ("/rawComposition/moisture", 2.0),
            ("/rawComposition/ash", 0.147),
            ("/rawComposition/vanadium", 326.634),
            ("/rawLHV", 39.4814),
        ],
    }];

    run_group_test(Deployment::Fuel, "/evaluate2", cases, 1e-9).await;
}

#[tokio::test]
async fn test_dry_composition_scales_every_component_but_moisture() {
    let fields = [
        ("hydrogen", "4.2"),
        ("carbon", "61.3"),
        ("sulfur", "0.8"),
        ("nitrogen", "1.1"),
        ("oxygen", "9.6"),
        ("moisture", "12.5"),
        ("ash", "10.5"),
    ];
    let json = post_form(Deployment::Fuel, "/evaluate1", &fields).await.json();
    let dry = json["compositionDry"].as_object().unwrap();

    assert!(!dry.contains_key("moisture"));
    assert_eq!(dry.len(), 6);
    for (name, raw) in fields.iter().filter(|(name, _)| *name != "moisture") {
        let raw: f64 = raw.parse().unwrap();
        let expected = raw * 100.0 / (100.0 - 12.5);
        let actual = dry[*name].as_f64().unwrap();
        assert!((actual - expected).abs() < 1e-12, "{name}: {actual} != {expected}");
    }
}

#[tokio::test]
async fn test_composition_keys_are_sorted() {
    let reply = post_form(Deployment::Fuel, "/evaluate2", &[("carbon", "80")]).await;
    let text = reply.text();
    let order: Vec<usize> = ["ash", "carbon", "hydrogen", "moisture", "oxygen", "sulfur", "vanadium"]
        .iter()
        .map(|key| text.find(&format!("\"{key}\"")).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "keys out of order: {text}");
}

#[tokio::test]
async fn test_fully_wet_sample_cannot_be_encoded() {
    let reply = post_form(Deployment::Fuel, "/evaluate1", &[("moisture", "100")]).await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.text(), "Failed to encode response");
}

#[tokio::test]
async fn test_pages_are_served() {
    for (path, marker) in [("/", "/calc1"), ("/calc1", "/evaluate1"), ("/calc2", "/evaluate2")] {
        let reply = get(Deployment::Fuel, path).await;
        assert_eq!(reply.status, StatusCode::OK, "{path}");
        assert!(reply.text().contains(marker), "{path} should mention {marker}");
    }
}
