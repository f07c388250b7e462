//! Tag name normalization.
//!
//! Element names are written as camel-cased identifiers at the call site
//! (`customCard`, `myXCoord`) and rendered as hyphenated lowercase markup
//! tag names (`custom-card`, `my-x-coord`).

/// Converts a camel-cased identifier into a hyphenated, lowercase tag name.
///
/// A hyphen is inserted before a capital letter that either starts a
/// capitalised run or ends one (the capital directly preceding a lowercase
/// letter). The positions before the first and after the last character
/// count as capitals, so neither end of the identifier produces a hyphen of
/// its own.
///
/// Only ASCII `A`-`Z` count as capitals. Digits and punctuation pass through
/// unchanged and behave like lowercase letters for the boundary test.
/// Non-ASCII input is passed through without case folding.
///
/// # Example
///
/// ```
/// use elemental_core::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("div"), "div");
/// assert_eq!(to_kebab_case("customCard"), "custom-card");
/// assert_eq!(to_kebab_case("myXCoord"), "my-x-coord");
/// assert_eq!(to_kebab_case("innerHTML"), "inner-html");
/// ```
pub fn to_kebab_case(camel_cased: &str) -> String {
	let chars: Vec<char> = camel_cased.chars().collect();
	let mut kebab_cased = String::with_capacity(camel_cased.len() + 4);

	for (i, &current) in chars.iter().enumerate() {
		let prev_upper = i == 0 || chars[i - 1].is_ascii_uppercase();
		let current_upper = current.is_ascii_uppercase();
		let next_upper = chars.get(i + 1).is_none_or(|next| next.is_ascii_uppercase());

		let starts_run = !prev_upper && current_upper;
		let ends_run = current_upper && !next_upper;
		// A leading capital never gets a hyphen in front of it
		if (starts_run || ends_run) && !kebab_cased.is_empty() {
			kebab_cased.push('-');
		}
		kebab_cased.push(current.to_ascii_lowercase());
	}

	kebab_cased
}

/// Returns whether `name` can be used as a tag or attribute name.
///
/// Rejects the empty string, whitespace, control characters and the markup
/// delimiters `"`, `'`, `<`, `>`, `/` and `=`. A browser rejects the same
/// names with an `InvalidCharacterError`.
///
/// ```
/// use elemental_core::naming::is_valid_name;
///
/// assert!(is_valid_name("data-id"));
/// assert!(!is_valid_name("x onclick=y"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}
