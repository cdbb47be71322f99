use tracing::debug;

/// How a discovered path list is split evenly across workers.
///
/// The padded count is the smallest total at or above the real path count
/// that divides evenly by the worker count; the padding never corresponds to
/// real paths, so chunk boundaries are always clamped to the real length when
/// slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    /// Smallest count >= path_count divisible by worker_count
    pub padded_count: usize,
    /// padded_count - path_count
    pub padding: usize,
    pub worker_count: usize,
    /// padded_count / worker_count
    pub chunk_size: usize,
}

impl PartitionPlan {
    pub fn new(path_count: usize, worker_count: usize) -> Self {
        if worker_count == 0 {
            // Degenerate: no workers means no chunks and no division.
            return Self {
                padded_count: path_count,
                padding: 0,
                worker_count: 0,
                chunk_size: 0,
            };
        }

        let mut padded = path_count;
        while padded % worker_count != 0 {
            padded += 1;
        }

        let plan = Self {
            padded_count: padded,
            padding: padded - path_count,
            worker_count,
            chunk_size: padded / worker_count,
        };
        debug!(
            "partition plan: paths={} padding={} workers={} chunk_size={}",
            plan.padded_count, plan.padding, plan.worker_count, plan.chunk_size
        );
        plan
    }

    /// Slices `items` into one chunk per worker.
    ///
    /// Boundaries are derived from the real length, not the padded count, so
    /// every item lands in exactly one chunk and trailing chunks shrink (or
    /// empty out) when the count does not divide evenly.
    pub fn chunks<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        let mut chunks = Vec::with_capacity(self.worker_count);
        for worker in 0..self.worker_count {
            let start = (worker * self.chunk_size).min(items.len());
            let end = ((worker + 1) * self.chunk_size).min(items.len());
            chunks.push(&items[start..end]);
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_paths_three_workers() {
        let plan = PartitionPlan::new(7, 3);
        assert_eq!(plan.padded_count, 9);
        assert_eq!(plan.padding, 2);
        assert_eq!(plan.chunk_size, 3);

        let items: Vec<usize> = (0..7).collect();
        let chunks = plan.chunks(&items);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], &[0, 1, 2]);
        assert_eq!(chunks[1], &[3, 4, 5]);
        assert_eq!(chunks[2], &[6]);
    }

    #[test]
    fn test_plan_invariants_hold_over_small_grid() {
        for path_count in 0..=32 {
            for worker_count in 1..=8 {
                let plan = PartitionPlan::new(path_count, worker_count);
                assert_eq!(plan.padded_count % worker_count, 0);
                assert!(plan.padded_count >= path_count);
                assert!(plan.padded_count - path_count < worker_count);
                assert_eq!(plan.chunk_size, plan.padded_count / worker_count);
            }
        }
    }

    #[test]
    fn test_chunks_reconstruct_original_exactly() {
        for path_count in 0..=32 {
            for worker_count in 1..=8 {
                let items: Vec<usize> = (0..path_count).collect();
                let plan = PartitionPlan::new(items.len(), worker_count);
                let rebuilt: Vec<usize> =
                    plan.chunks(&items).into_iter().flatten().copied().collect();
                assert_eq!(rebuilt, items, "paths={path_count} workers={worker_count}");
            }
        }
    }

    #[test]
    fn test_zero_workers_zero_paths_is_zero_work() {
        let plan = PartitionPlan::new(0, 0);
        assert_eq!(plan.chunk_size, 0);
        let items: Vec<usize> = Vec::new();
        assert!(plan.chunks(&items).is_empty());
    }

    #[test]
    fn test_more_workers_than_paths_leaves_empty_chunks() {
        let items: Vec<usize> = (0..2).collect();
        let plan = PartitionPlan::new(items.len(), 5);
        let chunks = plan.chunks(&items);
        assert_eq!(chunks.len(), 5);
        let nonempty: Vec<_> = chunks.iter().filter(|c| !c.is_empty()).collect();
        assert_eq!(nonempty.len(), 2);
    }
}
