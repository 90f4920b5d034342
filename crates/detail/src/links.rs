//! Header presentation helpers: the alias line and clickable links.

use std::sync::LazyLock;

use mediathek_core::PerformerRecord;
use mediathek_core::text::{INSTAGRAM_URL, TWITTER_URL, handle_url, sanitise_url};
use regex::Regex;

/// Matches `[url]` spans in free-text details. Only spans whose body starts
/// with `http` or `www.` count; newlines and nested brackets end a span.
// TODO: drop once the server stores multiple URLs per performer instead of
// URLs embedded in the details text.
static DETAIL_URLS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[((?:http|www\.)[^\n\]]+)\]").expect("pattern is valid"));

/// Extracts the bracketed URLs from a details text, scheme-defaulted and in
/// order of appearance.
pub fn details_links(details: &str) -> Vec<String> {
	DETAIL_URLS
		.captures_iter(details)
		.filter_map(|caps| caps.get(1))
		.filter_map(|m| sanitise_url(m.as_str()))
		.collect()
}

/// Everything clickable in the performer header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
	pub url: Option<String>,
	pub details: Vec<String>,
	pub twitter: Option<String>,
	pub instagram: Option<String>,
}

pub fn link_set(record: &PerformerRecord) -> LinkSet {
	LinkSet {
		url: record.url.as_deref().and_then(sanitise_url),
		details: record.details.as_deref().map(details_links).unwrap_or_default(),
		twitter: record.twitter.as_deref().map(|handle| handle_url(TWITTER_URL, handle)),
		instagram: record
			.instagram
			.as_deref()
			.map(|handle| handle_url(INSTAGRAM_URL, handle)),
	}
}

/// Alias line rendered under the performer name, if there are any aliases.
pub fn alias_line(record: &PerformerRecord) -> Option<String> {
	(!record.aliases.is_empty()).then(|| record.aliases.join(", "))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn bracketed_urls_are_extracted_in_order() {
		let details = "Interview at [https://example.com/a]. Fan page:\n[www.example.com/b] and [not a url].";
		assert_eq!(
			details_links(details),
			vec!["https://example.com/a".to_owned(), "http://www.example.com/b".to_owned()]
		);
	}

	#[test]
	fn span_stops_at_newline() {
		assert_eq!(details_links("[https://example.com\n/broken]"), Vec::<String>::new());
	}

	#[test]
	fn plain_text_has_no_links() {
		assert_eq!(details_links("no brackets here"), Vec::<String>::new());
		assert_eq!(details_links("[bracketed plain text]"), Vec::<String>::new());
	}
}
