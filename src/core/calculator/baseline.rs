/// Elementwise sum of equally long rows; empty input gives an empty row.
///
/// `[[1,2,4,5],[6,5,4,3],[6,5,8,3]]` → `[13,12,16,11]`
pub fn sum_all_rows(rows: &[Vec<u32>]) -> Vec<u32> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut total = first.clone();
    for row in &rows[1..] {
        for (acc, v) in total.iter_mut().zip(row) {
            *acc += v;
        }
    }
    total
}

/// Stacking offsets: `baseline[i][c]` is the sum of `durations[0..i][c]`.
///
/// Row 0 is all zeros, each day column is accumulated independently.
pub fn stack_offsets(durations: &[Vec<u32>]) -> Vec<Vec<u32>> {
    let Some(first) = durations.first() else {
        return Vec::new();
    };

    let mut running = vec![0u32; first.len()];
    let mut out = Vec::with_capacity(durations.len());

    for row in durations {
        out.push(running.clone());
        for (acc, d) in running.iter_mut().zip(row) {
            *acc += d;
        }
    }

    out
}
