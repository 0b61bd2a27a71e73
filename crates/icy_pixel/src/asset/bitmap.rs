/// Left justifies bit rows against bit 63.
///
/// Without a `fixed_width` the shift is taken from the numerically largest row,
/// otherwise the rows are assumed to be `fixed_width` bits wide. Returns the
/// shifted rows and the count of unused low bits, so the bitmap is
/// `64 - unused` columns wide.
pub fn left_justify(rows: &[u64], fixed_width: Option<u32>) -> (Vec<u64>, u32) {
    let shift = match fixed_width {
        Some(width) => 64 - width.min(64),
        None => rows.iter().copied().max().unwrap_or(0).leading_zeros(),
    };
    let rows: Vec<u64> = rows.iter().map(|row| row.checked_shl(shift).unwrap_or(0)).collect();
    let unused = rows.iter().map(|row| row.trailing_zeros()).min().unwrap_or(64);
    (rows, unused)
}

/// Number of significant bits of the widest row.
pub fn bit_width(rows: &[u64]) -> u32 {
    rows.iter().map(|row| 64 - row.leading_zeros()).max().unwrap_or(0)
}
