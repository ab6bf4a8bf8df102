use alloy::primitives::U256;

/// Render a base-unit amount as a human decimal string.
pub fn format_units(amount: U256, decimals: u32) -> String {
    if amount.is_zero() { return "0".into(); }
    if amount > U256::from(u128::MAX) {
        return format!("{amount}");
    }
    let v: u128 = amount.try_into().unwrap();
    let scale = 10u128.saturating_pow(decimals.min(38));
    let whole = v / scale;
    let frac = v % scale;
    if frac == 0 {
        format!("{whole}")
    } else {
        let mut frac_str = format!("{:0width$}", frac, width = decimals as usize);
        while frac_str.ends_with('0') { frac_str.pop(); }
        format!("{whole}.{frac_str}")
    }
}

/// Lossy base-unit -> f64 conversion for the human-scale arithmetic.
/// Works for any U256, not just values that fit u128.
pub fn units_to_f64(amount: U256, decimals: u32) -> f64 {
    let mut x = 0f64;
    for limb in amount.into_limbs().iter().rev() {
        x = x * 18_446_744_073_709_551_616.0 + *limb as f64; // 2^64
    }
    x / 10f64.powi(decimals as i32)
}
