//! Text helpers for turning identifiers and lists into readable prose

/// Convert an identifier into a readable phrase.
///
/// Underscores become spaces, a trailing `_id` is dropped and only the first
/// letter is capitalized.
///
/// # Examples
///
/// ```
/// use labelify_utils::text::humanize;
///
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("author_id"), "Author");
/// assert_eq!(humanize("Email"), "Email");
/// ```
pub fn humanize(identifier: &str) -> String {
	let trimmed = identifier.trim_start_matches('_');
	let base = match trimmed.strip_suffix("_id") {
		Some(stripped) if !stripped.is_empty() => stripped,
		_ => trimmed,
	};

	let phrase = base.replace('_', " ").to_lowercase();
	let mut chars = phrase.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Join items as a sentence: `a, b and c`.
///
/// # Examples
///
/// ```
/// use labelify_utils::text::to_sentence;
///
/// assert_eq!(to_sentence(&["one"]), "one");
/// assert_eq!(to_sentence(&["one", "two"]), "one and two");
/// assert_eq!(to_sentence(&["one", "two", "three"]), "one, two and three");
/// ```
pub fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
	match items {
		[] => String::new(),
		[only] => only.as_ref().to_string(),
		[init @ .., last] => {
			let head = init
				.iter()
				.map(|item| item.as_ref())
				.collect::<Vec<_>>()
				.join(", ");
			format!("{} and {}", head, last.as_ref())
		}
	}
}
