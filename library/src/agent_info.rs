use crate::pattern::HOST_NAME_REGEX;

/// Pulls the host name out of an agentInfo file without deserializing it.
///
/// The files are not guaranteed to be well formed, so only the first
/// `hostName` string field is looked at and everything else is ignored.
pub fn extract_host_name(contents: &str) -> Option<String> {
    HOST_NAME_REGEX
        .captures(contents)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().to_string())
}
