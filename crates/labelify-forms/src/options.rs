//! Options for forms, field calls, labels and submit controls

use crate::error::{FormError, FormResult};
use labelify_utils::html::Attributes;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The `label` option of a field call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOption {
	/// Render the default label (`label: true`)
	Show,
	/// Suppress the label (`label: false`)
	Hide,
	/// Render the label with this text
	Text(String),
}

impl From<bool> for LabelOption {
	fn from(show: bool) -> Self {
		if show { Self::Show } else { Self::Hide }
	}
}

impl From<&str> for LabelOption {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for LabelOption {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

/// Options of a single field call
///
/// `label` and `no_label` steer the label decoration; the attributes are
/// forwarded to the field helper (a `class` is also put on the label).
///
/// # Examples
///
/// ```
/// use labelify_forms::{FieldOptions, LabelOption};
///
/// let options = FieldOptions::new().with_label("Full name").with_class("required");
///
/// assert_eq!(options.label(), Some(&LabelOption::Text("Full name".to_string())));
/// assert_eq!(options.class(), Some("required"));
/// assert!(!options.is_no_label());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
	label: Option<LabelOption>,
	no_label: bool,
	attributes: Attributes,
}

impl FieldOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_label(mut self, label: impl Into<LabelOption>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Suppress the label for this call
	pub fn with_no_label(mut self) -> Self {
		self.no_label = true;
		self
	}

	pub fn with_class(self, class: &str) -> Self {
		self.with_attr("class", class)
	}

	/// Add an HTML attribute forwarded to the field helper
	pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
		self.attributes.insert(name.to_string(), value.into());
		self
	}

	pub fn label(&self) -> Option<&LabelOption> {
		self.label.as_ref()
	}

	pub fn is_no_label(&self) -> bool {
		self.no_label
	}

	pub fn class(&self) -> Option<&str> {
		self.attributes.get("class").map(String::as_str)
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}
}

/// Options of a standalone label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOptions {
	value: Option<String>,
	attributes: Attributes,
}

impl LabelOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Label text overriding column metadata and the humanized field name
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	pub fn with_class(self, class: &str) -> Self {
		self.with_attr("class", class)
	}

	pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
		self.attributes.insert(name.to_string(), value.into());
		self
	}

	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}
}

/// HTML options of a submit control
///
/// A `type` of `button` renders a `<button>` element instead of an `<input>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOptions {
	attributes: Attributes,
}

impl SubmitOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Render a `<button>` element
	pub fn as_button(self) -> Self {
		self.with_type("button")
	}

	pub fn with_type(self, kind: &str) -> Self {
		self.with_attr("type", kind)
	}

	pub fn with_class(self, class: &str) -> Self {
		self.with_attr("class", class)
	}

	pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
		self.attributes.insert(name.to_string(), value.into());
		self
	}

	pub fn is_button(&self) -> bool {
		self.attributes.get("type").map(String::as_str) == Some("button")
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}
}

/// Selects field helpers whose label is suppressed form-wide
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SuppressionRule", into = "SuppressionRule")]
pub enum LabelSuppression {
	/// Exactly this helper
	Selector(String),
	/// Every helper whose name matches
	Pattern(Regex),
}

impl LabelSuppression {
	pub fn selector(selector: &str) -> Self {
		Self::Selector(selector.to_string())
	}

	/// Compile `pattern` into a suppression rule
	///
	/// # Examples
	///
	/// ```
	/// use labelify_forms::LabelSuppression;
	///
	/// let rule = LabelSuppression::pattern("^(check_box|select)$").unwrap();
	/// assert!(rule.matches("select"));
	/// assert!(!rule.matches("text_field"));
	///
	/// assert!(LabelSuppression::pattern("(").is_err());
	/// ```
	pub fn pattern(pattern: &str) -> FormResult<Self> {
		Ok(Self::Pattern(Regex::new(pattern)?))
	}

	pub fn matches(&self, selector: &str) -> bool {
		match self {
			Self::Selector(name) => name == selector,
			Self::Pattern(regex) => regex.is_match(selector),
		}
	}
}

/// Serialized form of [`LabelSuppression`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SuppressionRule {
	Selector(String),
	Pattern(String),
}

impl TryFrom<SuppressionRule> for LabelSuppression {
	type Error = FormError;

	fn try_from(rule: SuppressionRule) -> Result<Self, Self::Error> {
		match rule {
			SuppressionRule::Selector(selector) => Ok(Self::Selector(selector)),
			SuppressionRule::Pattern(pattern) => Self::pattern(&pattern),
		}
	}
}

impl From<LabelSuppression> for SuppressionRule {
	fn from(rule: LabelSuppression) -> Self {
		match rule {
			LabelSuppression::Selector(selector) => Self::Selector(selector),
			LabelSuppression::Pattern(regex) => Self::Pattern(regex.as_str().to_string()),
		}
	}
}

/// Options of a form
///
/// Deserializable so form defaults can live in settings files:
///
/// ```
/// use labelify_forms::FormOptions;
///
/// let options: FormOptions = serde_json::from_str(r#"{
/// 	"url": "/people",
/// 	"html": { "method": "get", "class": "search" },
/// 	"no_label_for": [{ "selector": "check_box" }, { "pattern": "^select" }]
/// }"#).unwrap();
///
/// assert_eq!(options.url.as_deref(), Some("/people"));
/// assert!(options.suppresses_label_for("check_box"));
/// assert!(options.suppresses_label_for("select_date"));
/// assert!(!options.suppresses_label_for("text_field"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
	/// Form action
	pub url: Option<String>,
	/// Attributes of the `<form>` element, including `method`
	pub html: Attributes,
	/// Helpers rendered without label
	pub no_label_for: Vec<LabelSuppression>,
}

impl FormOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	pub fn with_method(self, method: &str) -> Self {
		self.with_html_attr("method", method)
	}

	pub fn with_html_attr(mut self, name: &str, value: impl Into<String>) -> Self {
		self.html.insert(name.to_string(), value.into());
		self
	}

	pub fn with_no_label_for(mut self, rule: LabelSuppression) -> Self {
		self.no_label_for.push(rule);
		self
	}

	pub fn suppresses_label_for(&self, selector: &str) -> bool {
		self.no_label_for.iter().any(|rule| rule.matches(selector))
	}
}
