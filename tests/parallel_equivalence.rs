#![cfg(feature = "parallel")]

use lps_engine::{FinderKind, PalindromeService};
use proptest::prelude::*;

fn sequential(service: &PalindromeService, inputs: &[String]) -> Vec<(String, usize, usize)> {
    inputs
        .iter()
        .map(|s| {
            let m = service.find_longest(s);
            (m.text().to_string(), m.start(), m.len())
        })
        .collect()
}

proptest! {
    #[test]
    fn batch_matches_sequential(inputs in proptest::collection::vec("[abc]{0,30}", 0..40)) {
        for kind in FinderKind::ALL {
            let service = PalindromeService::from_kind(kind);
            let batch: Vec<_> = service
                .find_longest_batch(&inputs)
                .into_iter()
                .map(|m| (m.text().to_string(), m.start(), m.len()))
                .collect();
            prop_assert_eq!(batch, sequential(&service, &inputs));
        }
    }
}

#[test]
fn batch_finders_agree() {
    let inputs: Vec<String> = (0..200)
        .map(|i| format!("{}x{}", "ab".repeat(i % 7), "ba".repeat(i % 5)))
        .collect();
    let linear = PalindromeService::manacher_default().find_longest_batch(&inputs);
    let quadratic = PalindromeService::expand_center().find_longest_batch(&inputs);
    assert_eq!(linear, quadratic);
}
