//!
//! Byte count formatting.
//!

/// Bytes in a kibibyte.
const KIB: u128 = 1024;

/// Bytes in a mebibyte.
const MIB: u128 = 1024 * 1024;

///
/// Formats a byte count for humans.
///
/// Counts below 1K are printed as is, larger ones in `K` or `M` with two decimals.
/// Accepts totals wider than a single measurement.
///
/// # Example
///
/// ```rust
/// use skp_membench_report::util::bytes::pretty_byte_str;
///
/// assert_eq!(pretty_byte_str(512), "512");
/// assert_eq!(pretty_byte_str(2048), "2.00K");
/// assert_eq!(pretty_byte_str(1572864), "1.50M");
/// ```
///
pub fn pretty_byte_str(bytes: u128) -> String {
    if bytes < KIB {
        bytes.to_string()
    } else if bytes < MIB {
        format!("{:.2}K", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2}M", bytes as f64 / MIB as f64)
    }
}
