//! Coerces raw form input into a [`SoilSample`].
//!
//! Numbers are read by their leading decimal prefix: leading whitespace is
//! skipped and the longest numeric prefix wins, so `"2.5 ha"` is `2.5` and a
//! month of `"6.9"` is `6`. Only base 10 is understood, so `"0x10"` is `0`.
//! Input with no numeric prefix, and a month too large for an `i64`, become
//! `None` and go out as `null`.

use crate::models::sample::{FormFields, SoilSample};

/// Build the request payload from the current form values. Pure.
pub fn normalize(form: &FormFields) -> SoilSample {
    SoilSample {
        area: parse_float_prefix(form.value("area")),
        soil_type: form.value("soil_type").to_string(),
        duration: form.value("duration").to_string(),
        month: parse_int_prefix(form.value("month")),
        nitrogen: optional_float(form.value("N")),
        phosphorus: optional_float(form.value("P")),
        potassium: optional_float(form.value("K")),
        ph: optional_float(form.value("pH")),
        moisture: optional_float(form.value("moisture")),
        symptoms: optional_text(form.value("symptoms")),
    }
}

fn optional_float(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        None
    } else {
        parse_float_prefix(raw)
    }
}

fn optional_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let int_end = scan_digits(bytes, end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = scan_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let sign = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let end = scan_digits(bytes, sign);
    if end == sign {
        return None;
    }
    s[..end].parse::<i64>().ok()
}
