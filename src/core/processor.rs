use crate::domain::model::DataRecord;

/// Formats a record as `Processing <name> with value <value>`.
pub fn process_data(data: &DataRecord) -> String {
    format!("Processing {} with value {}", data.name, format_value(data.value))
}

/// Renders a number the way ECMAScript `Number.prototype.toString` does:
/// `-0` prints as `0`, magnitudes below `1e-6` or from `1e21` up switch to
/// exponent form (`1e+21`, `1.5e-7`), and non-finite values print as
/// `NaN` / `Infinity`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e-7`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat(n.unsigned_abs() as usize), digits)
    } else {
        let e = n - 1;
        let exp_sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, e.unsigned_abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, e.unsigned_abs())
        }
    };

    format!("{}{}", sign, body)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RecordProcessor;

impl RecordProcessor {
    pub fn new() -> Self {
        Self
    }

    /// One processing line per record, in input order.
    pub fn process_all(&self, records: &[DataRecord]) -> Vec<String> {
        tracing::debug!("Processing {} records", records.len());
        records.iter().map(process_data).collect()
    }

    pub fn render(&self, records: &[DataRecord]) -> String {
        let mut output = String::new();
        for line in self.process_all(records) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TEST_CONFIG;

    #[test]
    fn test_process_sample_record() {
        assert_eq!(process_data(&TEST_CONFIG), "Processing test with value 42");
    }

    #[test]
    fn test_process_arbitrary_records() {
        let cases = [
            (DataRecord::new("alpha", 1.5), "Processing alpha with value 1.5"),
            (DataRecord::new("beta", -3.0), "Processing beta with value -3"),
            (DataRecord::new("", 0.0), "Processing  with value 0"),
            (
                DataRecord::new("with spaces", 1000000.0),
                "Processing with spaces with value 1000000",
            ),
        ];

        for (record, expected) in cases {
            assert_eq!(process_data(&record), expected);
        }
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(
            process_data(&DataRecord::new("x", -0.0)),
            "Processing x with value 0"
        );
    }

    #[test]
    fn test_large_magnitude_uses_exponent_form() {
        assert_eq!(
            process_data(&DataRecord::new("x", 1e21)),
            "Processing x with value 1e+21"
        );
        assert_eq!(format_value(-2.5e22), "-2.5e+22");
        assert_eq!(format_value(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn test_small_magnitude_uses_exponent_form() {
        assert_eq!(
            process_data(&DataRecord::new("x", 1e-7)),
            "Processing x with value 1e-7"
        );
        assert_eq!(format_value(1.2345e-7), "1.2345e-7");
        assert_eq!(format_value(0.000001), "0.000001");
        assert_eq!(format_value(-0.00012), "-0.00012");
    }

    #[test]
    fn test_format_value_plain_forms() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(1234.5), "1234.5");
        assert_eq!(format_value(1000000.0), "1000000");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_value_non_finite() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_render_preserves_order() {
        let records = vec![DataRecord::new("b", 2.0), DataRecord::new("a", 1.0)];
        let output = RecordProcessor::new().render(&records);
        assert_eq!(
            output,
            "Processing b with value 2\nProcessing a with value 1\n"
        );
    }

    #[test]
    fn test_render_empty_batch() {
        assert_eq!(RecordProcessor::new().render(&[]), "");
    }
}
