use shamir_core::params::default_modulus;
use shamir_core::testcase::{parse_test_cases, run_all};

const TEST_CASES: &str = r#"[
    {
        "threshold": 2,
        "shares": [
            { "x": "1", "base": "10", "value": "8" },
            { "x": "2", "base": "2", "value": "1011" },
            { "x": "3", "function": "sum", "operands": ["10", "4"] },
            { "x": "4", "base": "16", "value": "2" }
        ]
    },
    {
        "threshold": 3,
        "shares": [
            { "x": "1", "base": "10", "value": "8" },
            { "x": "2", "base": "oops", "value": "11" }
        ]
    },
    {
        "threshold": 3,
        "shares": [
            { "x": "1", "base": "10", "value": "6" },
            { "x": "2", "base": "10", "value": "11" },
            { "x": "3", "base": "4", "value": "102" },
            { "x": "4", "base": "10", "value": "27" },
            { "x": "5", "base": "10", "value": "38" }
        ]
    }
]"#;

/// Run a batch of encoded test cases end to end. The second case has too
/// few decodable shares and is skipped with a warning; the others print
/// their recovered secrets.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cases = parse_test_cases(TEST_CASES)
        .expect("embedded test cases should deserialize");
    let results = run_all(&cases, &default_modulus());

    assert_eq!(results.len(), 2, "exactly one case should be skipped");

    for (index, secret) in results {
        println!("case {index}: secret {secret}");
    }
}
