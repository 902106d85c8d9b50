use std::sync::LazyLock;

use regex::Regex;

/// `"hostName";s:<len>:"<value>"` inside a PHP-serialized agentInfo blob.
pub static HOST_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""hostName";s:\d+:"([^"]*)""#).expect("Failed to compile host name regex")
});

pub static TRAILING_EPOCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)$").expect("Failed to compile trailing epoch regex")
});

pub static MOUNTPOINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""mountpoint":"([A-Z])"#).expect("Failed to compile mountpoint regex")
});
