//! HTML utilities for escaping and attribute serialization

use indexmap::IndexMap;

/// Ordered HTML attributes. Serialization follows insertion order.
pub type Attributes = IndexMap<String, String>;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use labelify_utils::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape attribute value for use in HTML
///
/// Like [`escape`], but also encodes line breaks and tabs so the value
/// survives attribute normalization.
///
/// # Examples
///
/// ```
/// use labelify_utils::html::escape_attr;
///
/// assert_eq!(escape_attr("value"), "value");
/// assert_eq!(escape_attr("value with \"quotes\""),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Serialize attributes as ` key="value"` pairs.
///
/// Every pair is prefixed with a single space so the result can be appended
/// directly after a tag name. Values are escaped with [`escape_attr`].
///
/// # Examples
///
/// ```
/// use labelify_utils::html::{Attributes, render_attributes};
///
/// let mut attrs = Attributes::new();
/// attrs.insert("type".to_string(), "submit".to_string());
/// attrs.insert("title".to_string(), "Save & exit".to_string());
///
/// assert_eq!(render_attributes(&attrs), r#" type="submit" title="Save &amp; exit""#);
/// assert_eq!(render_attributes(&Attributes::new()), "");
/// ```
pub fn render_attributes(attrs: &Attributes) -> String {
	let mut html = String::new();
	for (key, value) in attrs {
		html.push(' ');
		html.push_str(key);
		html.push_str("=\"");
		html.push_str(&escape_attr(value));
		html.push('"');
	}
	html
}
