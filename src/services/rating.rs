pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';
pub const MAX_STARS: usize = 5;

/// Numeric rating from the export
///
/// Accepts any float text and truncates toward zero ("4.9" is 4). Anything
/// unparseable, non-finite, or out of range is pulled into `0..=5`.
pub fn parse_rating(raw: &str) -> usize {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc().clamp(0.0, MAX_STARS as f64) as usize,
        _ => 0,
    }
}

/// Rating as a five-glyph bar, e.g. `★★★☆☆`
pub fn rating_to_stars(raw: &str) -> String {
    let filled = parse_rating(raw);

    std::iter::repeat(FILLED_STAR)
        .take(filled)
        .chain(std::iter::repeat(EMPTY_STAR).take(MAX_STARS - filled))
        .collect()
}
