//! Small formatting helpers shared across panels.

pub const TWITTER_URL: &str = "https://www.twitter.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com";

/// Formats a counter, optionally abbreviating thousands as `1.2K` style.
pub fn format_count(count: u64, abbreviate: bool) -> String {
	if !abbreviate || count < 1000 {
		return count.to_string();
	}
	let mut value = count as f64;
	let mut unit = "";
	for candidate in ["K", "M", "B"] {
		if value < 1000.0 {
			break;
		}
		value /= 1000.0;
		unit = candidate;
	}
	let rounded = (value * 10.0).round() / 10.0;
	if rounded.fract() == 0.0 {
		format!("{}{unit}", rounded as u64)
	} else {
		format!("{rounded:.1}{unit}")
	}
}

/// Counter text for a tab badge. Zero renders no badge at all.
pub fn tab_counter(count: u64, abbreviate: bool) -> Option<String> {
	(count > 0).then(|| format_count(count, abbreviate))
}

/// Strips whitespace and a leading `@` from a social media handle.
pub fn sanitise_handle(input: &str) -> &str {
	input.trim().trim_start_matches('@')
}

/// Expands a handle into a full profile URL on `base`.
///
/// Handles that already carry a scheme pass through unchanged; handles that
/// start with the site host only gain a scheme.
pub fn handle_url(base: &str, handle: &str) -> String {
	let handle = sanitise_handle(handle);
	if handle.starts_with("http://") || handle.starts_with("https://") {
		return handle.to_owned();
	}
	let host = base
		.trim_start_matches("https://")
		.trim_start_matches("http://");
	if handle.starts_with(host) {
		return format!("https://{handle}");
	}
	format!("{}/{handle}", base.trim_end_matches('/'))
}

/// Makes a stored URL clickable, defaulting the scheme to `http://`.
/// Empty and whitespace-only input yields `None`.
pub fn sanitise_url(url: &str) -> Option<String> {
	let url = url.trim();
	if url.is_empty() {
		return None;
	}
	if url.starts_with("http://") || url.starts_with("https://") {
		Some(url.to_owned())
	} else {
		Some(format!("http://{url}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_abbreviate_past_a_thousand() {
		assert_eq!(format_count(999, true), "999");
		assert_eq!(format_count(1200, true), "1.2K");
		assert_eq!(format_count(2_000_000, true), "2M");
		assert_eq!(format_count(1200, false), "1200");
	}

	#[test]
	fn zero_count_has_no_badge() {
		assert_eq!(tab_counter(0, true), None);
		assert_eq!(tab_counter(7, false), Some("7".into()));
	}

	#[test]
	fn handles_expand_against_base() {
		assert_eq!(handle_url(TWITTER_URL, "@janedoe"), "https://www.twitter.com/janedoe");
		assert_eq!(
			handle_url(TWITTER_URL, "www.twitter.com/janedoe"),
			"https://www.twitter.com/janedoe"
		);
		assert_eq!(
			handle_url(INSTAGRAM_URL, "https://example.com/me"),
			"https://example.com/me"
		);
	}

	#[test]
	fn urls_gain_a_default_scheme() {
		assert_eq!(sanitise_url("example.com"), Some("http://example.com".into()));
		assert_eq!(sanitise_url("https://example.com"), Some("https://example.com".into()));
		assert_eq!(sanitise_url("   "), None);
	}
}
