use itertools::Itertools;

use crate::pattern::MOUNTPOINT_REGEX;

/// Entries per line before the volume list wraps.
pub const VOLUMES_PER_LINE: usize = 7;

/// Every volume letter in `contents`, in file order.
///
/// Voltab files are scanned as free text rather than parsed as JSON.
pub fn mountpoint_letters(contents: &str) -> Vec<char> {
    MOUNTPOINT_REGEX
        .captures_iter(contents)
        .filter_map(|captures| captures.get(1))
        .filter_map(|letter| letter.as_str().chars().next())
        .collect()
}

pub fn format_volume_list(letters: &[char]) -> String {
    let lines = letters
        .iter()
        .map(|letter| format!("{}: ", letter))
        .chunks(VOLUMES_PER_LINE);

    lines.into_iter().map(|mut line| line.join("")).join("\n")
}
