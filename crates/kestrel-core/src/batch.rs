/// Split records into consecutive batches of at most `batch_size`,
/// preserving order. A zero size yields a single batch.
pub fn split_into_batches<T>(records: Vec<T>, batch_size: usize) -> Vec<Vec<T>> {
    if batch_size == 0 {
        return if records.is_empty() { vec![] } else { vec![records] };
    }

    let mut batches = Vec::new();
    let mut current = Vec::new();

    for record in records {
        current.push(record);
        if current.len() == batch_size {
            batches.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        batches.push(current);
    }

    batches
}

/// Round-robin batch-to-worker assignment: `result[i]` is the worker
/// index for batch `i`.
pub fn assign_workers(batch_count: usize, workers: usize) -> Vec<usize> {
    let workers = workers.max(1);
    (0..batch_count).map(|i| i % workers).collect()
}
