/// Splits pasted participant text on commas and newlines, trimming each name
/// and dropping empty entries.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .trim()
        .split(|c: char| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prize count typed into the configuration form. Anything unparsable or
/// below one falls back to 1.
pub fn parse_prize_count(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(count) if count >= 1 => u32::try_from(count).unwrap_or(u32::MAX),
        _ => 1,
    }
}
