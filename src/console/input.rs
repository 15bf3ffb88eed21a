/// Parses a stock field the way a browser `parseInt(value, 10)` would,
/// refusing anything negative.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of digits is read and anything after it ignored. `"12abc"` is 12, `"abc"`
/// and `"-3"` are rejected, `"-0"` is 0.
pub fn parse_stock_input(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: u64 = rest[..digits]
        .bytes()
        .try_fold(0u64, |acc, b| {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        })?;
    if negative && value != 0 {
        return None;
    }
    u32::try_from(value).ok()
}
