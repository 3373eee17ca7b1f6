//! Distribution sorts: LSD radix and counting.
//!
//! Both place elements back-to-front through prefix-summed bucket counts,
//! the classic construction that preserves input order for equal keys.

use crate::scheduler::{Cancelled, StepScheduler};
use crate::types::{Element, Role};

/// LSD radix sort: one stable counting pass per decimal digit, least
/// significant first, until the digit exponent exceeds the maximum value.
pub(crate) fn radix(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    if data.len() < 2 {
        return Ok(());
    }
    let max = data.iter().map(|e| e.value).max().unwrap_or(0);
    let mut exp: u32 = 1;
    while max / exp > 0 {
        digit_pass(data, s, exp)?;
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }
    Ok(())
}

fn digit_pass(
    data: &mut [Element],
    s: &mut StepScheduler<'_>,
    exp: u32,
) -> Result<(), Cancelled> {
    let n = data.len();
    let mut count = [0usize; 10];

    for i in 0..n {
        let digit = ((s.read(data, i)?.value / exp) % 10) as usize;
        count[digit] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }

    let mut output = vec![Element::new(0, 0); n];
    for i in (0..n).rev() {
        let element = data[i];
        let digit = ((element.value / exp) % 10) as usize;
        count[digit] -= 1;
        output[count[digit]] = element;
        s.access(2);
        s.pause(&[i], Role::Swapping)?;
    }

    for (i, &element) in output.iter().enumerate() {
        data[i] = element;
        s.access(1);
    }
    Ok(())
}

/// One bucket per distinct value in `[min, max]`; ranges beyond this cap
/// would allocate unboundedly from caller-loaded data.
const MAX_COUNTING_RANGE: usize = 1 << 20;

/// Counting sort bucketed by value offset from the minimum; prefix sums
/// plus back-to-front placement keep it stable.
pub(crate) fn counting(data: &mut [Element], s: &mut StepScheduler<'_>) -> Result<(), Cancelled> {
    let n = data.len();
    if n < 2 {
        return Ok(());
    }
    let min = data.iter().map(|e| e.value).min().unwrap_or(0);
    let max = data.iter().map(|e| e.value).max().unwrap_or(0);
    let range = (max - min) as usize + 1;
    assert!(
        range <= MAX_COUNTING_RANGE,
        "counting sort value range of {range} exceeds {MAX_COUNTING_RANGE} buckets"
    );

    let mut count = vec![0usize; range];
    for i in 0..n {
        let value = s.read(data, i)?.value;
        count[(value - min) as usize] += 1;
    }
    for b in 1..range {
        count[b] += count[b - 1];
    }

    let mut output = vec![Element::new(0, 0); n];
    for i in (0..n).rev() {
        let element = data[i];
        let bucket = (element.value - min) as usize;
        count[bucket] -= 1;
        output[count[bucket]] = element;
        s.access(2);
        s.pause(&[i], Role::Swapping)?;
    }

    for (i, &element) in output.iter().enumerate() {
        data[i] = element;
        s.access(1);
    }
    Ok(())
}
