use std::{env, fmt::Display, sync::LazyLock};

use chrono::{Local, TimeZone};
use chrono_tz::Tz;

use crate::pattern::TRAILING_EPOCH_REGEX;

/// Same layout as the default output of `date`.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Returns the trailing run of digits of `path` as epoch seconds.
///
/// A run that does not fit in an `i64` is treated as absent.
pub fn extract_trailing_epoch(path: &str) -> Option<i64> {
    TRAILING_EPOCH_REGEX
        .captures(path)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Zone `date` would use: `TZ` first, then the system zone.
///
/// `None` when the zone is not a known IANA name, in which case formatting
/// falls back to chrono's `Local` and its numeric offset.
pub static LOCAL_ZONE: LazyLock<Option<Tz>> = LazyLock::new(|| match env::var("TZ") {
    Ok(name) => zone_from_name(&name),
    Err(_) => iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| zone_from_name(&name)),
});

/// Resolves a `TZ`-style value such as `UTC`, `:Europe/Berlin` or
/// `/usr/share/zoneinfo/America/New_York`. An empty value means UTC.
pub fn zone_from_name(name: &str) -> Option<Tz> {
    let name = name.trim().trim_start_matches(':');

    if name.is_empty() {
        return Some(Tz::UTC);
    }

    let name = name.rsplit_once("zoneinfo/").map_or(name, |(_, zone)| zone);

    name.parse().ok()
}

pub fn format_epoch<Z>(epoch: i64, tz: &Z) -> Option<String>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    tz.timestamp_opt(epoch, 0)
        .single()
        .map(|datetime| datetime.format(DATE_FORMAT).to_string())
}

pub fn format_local(epoch: i64) -> Option<String> {
    match *LOCAL_ZONE {
        Some(tz) => format_epoch(epoch, &tz),
        None => format_epoch(epoch, &Local),
    }
}
