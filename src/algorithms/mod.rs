//! Instrumented sorting algorithm library.
//!
//! Each algorithm mutates the working slice exclusively through the
//! scheduler's instrumented primitives, so the counters and the observer
//! see every comparison and move. Cancellation is polled at loop heads and
//! before each operation; a cancelled invocation returns immediately and
//! leaves the slice in its current, possibly partially sorted state.

mod distribution;
mod linearithmic;
mod quadratic;

use crate::scheduler::{Cancelled, StepScheduler};
use crate::types::{Algorithm, Element};

/// Run `algorithm` over `data` to completion or cancellation.
pub fn execute(
    algorithm: Algorithm,
    data: &mut [Element],
    sched: &mut StepScheduler<'_>,
) -> Result<(), Cancelled> {
    match algorithm {
        Algorithm::Bubble => quadratic::bubble(data, sched),
        Algorithm::Selection => quadratic::selection(data, sched),
        Algorithm::Insertion => quadratic::insertion(data, sched),
        Algorithm::Merge => linearithmic::merge(data, sched),
        Algorithm::Quick => linearithmic::quick(data, sched),
        Algorithm::Heap => linearithmic::heap(data, sched),
        Algorithm::Radix => distribution::radix(data, sched),
        Algorithm::Counting => distribution::counting(data, sched),
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use crate::scheduler::{CancelToken, Counters, NullObserver, Pacing, StepScheduler};
    use crate::types::{Algorithm, Element};

    /// Run an algorithm unpaced over tagged values; panics on cancellation.
    pub fn sort(algorithm: Algorithm, values: &[u32]) -> (Vec<Element>, Counters) {
        let mut data = crate::dataset::tagged(values);
        let mut observer = NullObserver;
        let mut sched = StepScheduler::new(Pacing::Unpaced, CancelToken::new(), &mut observer);
        super::execute(algorithm, &mut data, &mut sched)
            .expect("uncancelled run must complete");
        (data, sched.counters())
    }
}
