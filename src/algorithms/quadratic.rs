//! Quadratic comparison sorts: bubble, selection, insertion.

use crate::scheduler::{Cancelled, StepScheduler};
use crate::types::Element;

/// Repeated adjacent passes without an early-exit check, so a full run
/// performs exactly Σ(n−i−1) comparisons.
pub(crate) fn bubble(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    let n = data.len();
    if n < 2 {
        return Ok(());
    }
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if s.compare(data, j, j + 1)? {
                s.swap(data, j, j + 1)?;
            }
        }
    }
    Ok(())
}

/// Scan the unsorted remainder for its minimum; at most one swap per
/// position. Long-range swaps make this unstable.
pub(crate) fn selection(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    let n = data.len();
    if n < 2 {
        return Ok(());
    }
    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            if s.compare(data, min, j)? {
                min = j;
            }
        }
        if min != i {
            s.swap(data, i, min)?;
        }
    }
    Ok(())
}

/// Shift-right-while-strictly-greater against the extracted key: one access
/// per shift plus the final placement. The strict comparison keeps equal
/// keys in input order.
pub(crate) fn insertion(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    let n = data.len();
    for i in 1..n {
        let key = s.read(data, i)?;
        let mut j = i;
        while j > 0 {
            if s.compare_values(data[j - 1], key, &[j - 1, i])? {
                let shifted = data[j - 1];
                s.write(data, j, shifted)?;
                j -= 1;
            } else {
                break;
            }
        }
        s.write(data, j, key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::algorithms::testutil::sort;
    use crate::dataset::{is_sorted, values};
    use crate::types::Algorithm;

    #[test]
    fn bubble_scenario_counts() {
        // 15 comparisons (5+4+3+2+1); 8 swaps, one per inversion.
        let (data, counters) = sort(Algorithm::Bubble, &[5, 3, 8, 1, 9, 2]);
        assert_eq!(values(&data), vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(counters.comparisons, 15);
        assert_eq!(counters.swaps, 8);
    }

    #[test]
    fn bubble_sorted_input_still_compares_fully() {
        let (data, counters) = sort(Algorithm::Bubble, &[1, 2, 3, 4]);
        assert!(is_sorted(&data));
        assert_eq!(counters.comparisons, 6);
        assert_eq!(counters.swaps, 0);
    }

    #[test]
    fn selection_swaps_at_most_once_per_position() {
        let (data, counters) = sort(Algorithm::Selection, &[9, 8, 7, 6, 5]);
        assert!(is_sorted(&data));
        assert_eq!(counters.comparisons, 10);
        assert!(counters.swaps <= 4);
    }

    #[test]
    fn insertion_sorted_input_is_linear() {
        let (data, counters) = sort(Algorithm::Insertion, &[1, 2, 3, 4, 5]);
        assert!(is_sorted(&data));
        // One failed shift comparison per position after the first.
        assert_eq!(counters.comparisons, 4);
        assert_eq!(counters.swaps, 0);
    }

    #[test]
    fn degenerate_inputs() {
        for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
            let (empty, counters) = sort(algorithm, &[]);
            assert!(empty.is_empty());
            assert_eq!(counters.total_ops(), 0);

            let (single, _) = sort(algorithm, &[7]);
            assert_eq!(values(&single), vec![7]);
        }
    }
}
