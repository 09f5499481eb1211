/// Splits `total_width` across `magnitudes` (sorted descending) in proportion to
/// each magnitude. Every share but the last is rounded to the nearest pixel
/// (ties to even); the last absorbs the rounding remainder so the widths always
/// sum to `total_width`.
pub fn allocate_widths(magnitudes: &[u64], total_width: i64) -> Vec<i64> {
    let Some(last) = magnitudes.len().checked_sub(1) else {
        return Vec::new();
    };

    let sum = match magnitudes.iter().sum::<u64>() {
        0 => 1,
        s => s,
    };

    let mut widths = Vec::with_capacity(magnitudes.len());
    let mut running = 0;
    for &magnitude in &magnitudes[..last] {
        let share = (magnitude as f64 / sum as f64 * total_width as f64).round_ties_even() as i64;
        widths.push(share);
        running += share;
    }
    widths.push(total_width - running);
    widths
}

pub fn percent_of(magnitude: u64, sum: u64) -> u32 {
    if sum == 0 {
        return 0;
    }
    (magnitude as f64 * 100.0 / sum as f64).round_ties_even() as u32
}
