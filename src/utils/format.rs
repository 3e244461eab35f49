/// Shortest form of a number as a browser prints it: integral values without
/// a fraction (`35.0` -> `"35"`), exponent notation from 1e21 up and below
/// 1e-6 (`1e+21`, `1e-7`).
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    let abs = v.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", v);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{}", v)
}

pub fn format_dollars(v: f64) -> String {
    format!("{}$", format_number(v))
}

/// Axis tick label, at most two decimals, trailing zeros dropped.
pub fn format_tick(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}
