//! Linearithmic comparison sorts: merge, quick, heap.

use crate::scheduler::{Cancelled, StepScheduler};
use crate::types::Element;

/// Top-down merge sort, splitting at `⌊(left + right) / 2⌋`.
pub(crate) fn merge(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    let n = data.len();
    if n > 1 {
        merge_range(data, s, 0, n - 1)?;
    }
    Ok(())
}

fn merge_range(
    data: &mut [Element],
    s: &mut StepScheduler<'_>,
    left: usize,
    right: usize,
) -> Result<(), Cancelled> {
    if left >= right {
        return Ok(());
    }
    let mid = left + (right - left) / 2;
    merge_range(data, s, left, mid)?;
    merge_range(data, s, mid + 1, right)?;
    merge_halves(data, s, left, mid, right)
}

/// Merge two adjacent sorted ranges. The left element wins ties, which is
/// what keeps the sort stable; remainders drain without further
/// comparisons.
fn merge_halves(
    data: &mut [Element],
    s: &mut StepScheduler<'_>,
    left: usize,
    mid: usize,
    right: usize,
) -> Result<(), Cancelled> {
    let lo = data[left..=mid].to_vec();
    let hi = data[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < lo.len() && j < hi.len() {
        if s.compare_values(lo[i], hi[j], &[left + i, mid + 1 + j])? {
            s.write(data, k, hi[j])?;
            j += 1;
        } else {
            s.write(data, k, lo[i])?;
            i += 1;
        }
        k += 1;
    }
    while i < lo.len() {
        s.write(data, k, lo[i])?;
        i += 1;
        k += 1;
    }
    while j < hi.len() {
        s.write(data, k, hi[j])?;
        j += 1;
        k += 1;
    }
    Ok(())
}

/// Quick sort with Lomuto partitioning.
pub(crate) fn quick(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    let n = data.len();
    if n > 1 {
        quick_range(data, s, 0, n - 1)?;
    }
    Ok(())
}

fn quick_range(
    data: &mut [Element],
    s: &mut StepScheduler<'_>,
    low: usize,
    high: usize,
) -> Result<(), Cancelled> {
    if low >= high {
        return Ok(());
    }
    let p = partition(data, s, low, high)?;
    if p > low {
        quick_range(data, s, low, p - 1)?;
    }
    if p < high {
        quick_range(data, s, p + 1, high)?;
    }
    Ok(())
}

/// Lomuto partition with the last element as pivot. Elements strictly less
/// than the pivot swap into the growing left partition; the pivot swaps
/// into its final position.
fn partition(
    data: &mut [Element],
    s: &mut StepScheduler<'_>,
    low: usize,
    high: usize,
) -> Result<usize, Cancelled> {
    let pivot = data[high];
    let mut i = low;
    for j in low..high {
        if s.compare_values(pivot, data[j], &[j, high])? {
            s.swap(data, i, j)?;
            i += 1;
        }
    }
    s.swap(data, i, high)?;
    Ok(i)
}

/// Heap sort: build a max-heap by sifting down from the last internal node,
/// then repeatedly swap the root behind the shrinking heap and re-sift.
pub(crate) fn heap(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    let n = data.len();
    if n < 2 {
        return Ok(());
    }
    for i in (0..n / 2).rev() {
        sift_down(data, s, n, i)?;
    }
    for end in (1..n).rev() {
        s.swap(data, 0, end)?;
        sift_down(data, s, end, 0)?;
    }
    Ok(())
}

fn sift_down(
    data: &mut [Element],
    s: &mut StepScheduler<'_>,
    heap_len: usize,
    start: usize,
) -> Result<(), Cancelled> {
    let mut root = start;
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < heap_len && s.compare(data, left, largest)? {
            largest = left;
        }
        if right < heap_len && s.compare(data, right, largest)? {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }
        s.swap(data, root, largest)?;
        root = largest;
    }
}
