//! Stability tests using provenance tags on duplicate values.
//!
//! Every element carries the index it occupied in the input. A stable sort
//! keeps equal values in tag order; the tag never participates in
//! comparisons, so instability is observable without affecting the sort.

use sortlab::dataset::is_sorted;
use sortlab::{Algorithm, Config, NullObserver, RunController};

const STABLE: [Algorithm; 5] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::Merge,
    Algorithm::Radix,
    Algorithm::Counting,
];

/// Equal values must appear in ascending tag order after a stable sort.
fn assert_stable(data: &[sortlab::Element], algorithm: Algorithm) {
    for pair in data.windows(2) {
        if pair[0].value == pair[1].value {
            assert!(
                pair[0].tag < pair[1].tag,
                "{algorithm} reordered equal values: tag {} before {}",
                pair[0].tag,
                pair[1].tag
            );
        }
    }
}

fn sort(algorithm: Algorithm, values: &[u32]) -> Vec<sortlab::Element> {
    let mut controller = RunController::new(Config::headless());
    controller.load(values, sortlab::Shape::Random).unwrap();
    controller.start(algorithm, &mut NullObserver).unwrap();
    controller.data().to_vec()
}

#[test]
fn stable_algorithms_preserve_duplicate_order() {
    let values = [4, 4, 1, 2, 2, 4, 1, 2, 9, 9, 1];
    for algorithm in STABLE {
        let data = sort(algorithm, &values);
        assert!(is_sorted(&data));
        assert_stable(&data, algorithm);
    }
}

#[test]
fn stable_algorithms_survive_all_equal_input() {
    let values = [7u32; 12];
    for algorithm in STABLE {
        let data = sort(algorithm, &values);
        let tags: Vec<u32> = data.iter().map(|e| e.tag).collect();
        assert_eq!(tags, (0..12).collect::<Vec<u32>>(), "{algorithm}");
    }
}

#[test]
fn radix_stays_stable_across_digit_passes() {
    // Values that collide in the ones digit but differ in higher digits,
    // plus exact duplicates; multiple passes must not scramble ties.
    let values = [21, 11, 121, 21, 11, 31, 21];
    let data = sort(Algorithm::Radix, &values);
    assert!(is_sorted(&data));
    assert_stable(&data, Algorithm::Radix);
}

#[test]
fn counting_scenario_orders_duplicates_by_input_position() {
    let data = sort(Algorithm::Counting, &[4, 4, 1, 2, 2]);
    let pairs: Vec<(u32, u32)> = data.iter().map(|e| (e.value, e.tag)).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3), (2, 4), (4, 0), (4, 1)]);
}
