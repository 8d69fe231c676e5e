//! 二分查找与线性查找

use std::cmp::Ordering;
use std::time::Duration;

use super::{
    BINARY_VISITED_PAUSE, CURRENT_PAUSE, LINEAR_VISITED_PAUSE, Outcome, SearchTrace, TraceBuilder,
};
use crate::models::BarState;

/// 二分查找，`values` 必须升序
pub fn binary_search(values: &[i64], target: i64) -> SearchTrace {
    let mut trace = TraceBuilder::default();
    if values.is_empty() {
        return trace.finish(Outcome::NotFound);
    }

    let mut low = 0usize;
    let mut high = values.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        trace.mark(mid, BarState::Current, CURRENT_PAUSE);

        match values[mid].cmp(&target) {
            Ordering::Equal => {
                trace.mark(mid, BarState::Found, Duration::ZERO);
                return trace.finish(Outcome::Found(mid));
            }
            Ordering::Less => {
                trace.mark(mid, BarState::Visited, BINARY_VISITED_PAUSE);
                low = mid + 1;
            }
            Ordering::Greater => {
                trace.mark(mid, BarState::Visited, BINARY_VISITED_PAUSE);
                // mid == 0 时右边界变为 -1，搜索结束
                match mid.checked_sub(1) {
                    Some(next) => high = next,
                    None => break,
                }
            }
        }
    }

    trace.finish(Outcome::NotFound)
}

/// 线性查找，从下标 0 开始逐个比较
pub fn linear_search(values: &[i64], target: i64) -> SearchTrace {
    let mut trace = TraceBuilder::default();

    for (index, value) in values.iter().enumerate() {
        trace.mark(index, BarState::Current, CURRENT_PAUSE);

        if *value == target {
            trace.mark(index, BarState::Found, Duration::ZERO);
            return trace.finish(Outcome::Found(index));
        }
        trace.mark(index, BarState::Visited, LINEAR_VISITED_PAUSE);
    }

    trace.finish(Outcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_VALUES;
    use crate::search::{NOT_FOUND_PAUSE, Step};

    #[test]
    fn test_binary_hits_middle_first() {
        let trace = binary_search(&DEFAULT_VALUES, 24);
        assert_eq!(trace.outcome, Outcome::Found(4));
        assert_eq!(trace.comparisons, 1);
        assert_eq!(
            trace.steps,
            vec![
                Step::Mark {
                    index: 4,
                    state: BarState::Current,
                    pause: CURRENT_PAUSE
                },
                Step::Mark {
                    index: 4,
                    state: BarState::Found,
                    pause: Duration::ZERO
                },
                Step::Finish {
                    outcome: Outcome::Found(4),
                    pause: Duration::ZERO
                },
            ]
        );
    }

    #[test]
    fn test_binary_probe_path() {
        // 89: mid=4 -> 7 -> 8 -> 9
        let trace = binary_search(&DEFAULT_VALUES, 89);
        assert_eq!(trace.probes(), vec![4, 7, 8, 9]);
        assert_eq!(trace.outcome, Outcome::Found(9));

        // 3: mid=4 -> 1 -> 0
        let trace = binary_search(&DEFAULT_VALUES, 3);
        assert_eq!(trace.probes(), vec![4, 1, 0]);
    }

    #[test]
    fn test_binary_below_minimum_stops_at_zero() {
        let trace = binary_search(&DEFAULT_VALUES, 1);
        assert_eq!(trace.outcome, Outcome::NotFound);
        assert_eq!(trace.probes(), vec![4, 1, 0]);
        assert_eq!(
            trace.steps.last(),
            Some(&Step::Finish {
                outcome: Outcome::NotFound,
                pause: NOT_FOUND_PAUSE
            })
        );
    }

    #[test]
    fn test_linear_not_found_checks_everything() {
        let trace = linear_search(&DEFAULT_VALUES, 100);
        assert_eq!(trace.outcome, Outcome::NotFound);
        assert_eq!(trace.comparisons, 10);
        // 10 x (current + visited) + finish
        assert_eq!(trace.steps.len(), 21);
    }

    #[test]
    fn test_linear_pauses() {
        let trace = linear_search(&DEFAULT_VALUES, 7);
        let expected = CURRENT_PAUSE + LINEAR_VISITED_PAUSE + CURRENT_PAUSE;
        assert_eq!(trace.total_pause(), expected);
    }

    #[test]
    fn test_empty_slice() {
        for trace in [binary_search(&[], 5), linear_search(&[], 5)] {
            assert_eq!(trace.comparisons, 0);
            assert_eq!(trace.outcome, Outcome::NotFound);
            assert_eq!(trace.steps.len(), 1);
        }
    }
}
