//! Bound objects
//!
//! A form renders fields for a bound object. [`FormObject`] is the
//! introspection surface the builders need from it: field values for the
//! helpers, validation errors, human readable column names and associated
//! objects for nested scopes. Every capability except [`FormObject::value`]
//! is optional and defaults to "not supported".

use indexmap::IndexMap;
use std::collections::HashMap;

/// Key of form-level (non-field-specific) errors.
pub const BASE_KEY: &str = "base";

/// Validation errors of a bound object, grouped by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
	messages: IndexMap<String, Vec<String>>,
}

impl Errors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an error message to `field`
	pub fn add(&mut self, field: &str, message: impl Into<String>) {
		self.messages
			.entry(field.to_string())
			.or_default()
			.push(message.into());
	}

	/// Add a form-level error message
	pub fn add_to_base(&mut self, message: impl Into<String>) {
		self.add(BASE_KEY, message);
	}

	/// Messages for `field`, or `None` when it has none
	///
	/// # Examples
	///
	/// ```
	/// use labelify_forms::Errors;
	///
	/// let mut errors = Errors::new();
	/// errors.add("name", "can't be blank");
	///
	/// assert_eq!(errors.on("name"), Some(&["can't be blank".to_string()][..]));
	/// assert_eq!(errors.on("email"), None);
	/// ```
	pub fn on(&self, field: &str) -> Option<&[String]> {
		self.messages
			.get(field)
			.filter(|messages| !messages.is_empty())
			.map(Vec::as_slice)
	}

	/// Form-level messages, or `None` when there are none
	pub fn on_base(&self) -> Option<&[String]> {
		self.on(BASE_KEY)
	}

	pub fn is_empty(&self) -> bool {
		self.messages.values().all(Vec::is_empty)
	}

	/// Total number of messages over all fields
	pub fn count(&self) -> usize {
		self.messages.values().map(Vec::len).sum()
	}

	pub fn clear(&mut self) {
		self.messages.clear();
	}
}

/// An object a form can be bound to
pub trait FormObject {
	/// Current value of `field`, as rendered into the field's markup
	fn value(&self, field: &str) -> Option<String>;

	/// Validation errors, when the object supports them
	fn errors(&self) -> Option<&Errors> {
		None
	}

	/// Human readable column name for `field`, when the object has column metadata
	fn human_name(&self, _field: &str) -> Option<String> {
		None
	}

	/// Associated object reachable through `name`
	fn association(&self, _name: &str) -> Option<&dyn FormObject> {
		None
	}
}

/// A dynamic [`FormObject`] assembled at runtime
///
/// # Examples
///
/// ```
/// use labelify_forms::{FormObject, FormRecord};
///
/// let person = FormRecord::new()
/// 	.with_value("name", "Tester")
/// 	.with_human_name("name", "Full name")
/// 	.with_association("address", FormRecord::new().with_value("city", "Amsterdam"));
///
/// assert_eq!(person.value("name").as_deref(), Some("Tester"));
/// assert_eq!(person.human_name("name").as_deref(), Some("Full name"));
/// assert!(person.errors().is_none());
///
/// let address = person.association("address").unwrap();
/// assert_eq!(address.value("city").as_deref(), Some("Amsterdam"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormRecord {
	values: HashMap<String, String>,
	errors: Option<Errors>,
	human_names: HashMap<String, String>,
	associations: HashMap<String, FormRecord>,
}

impl FormRecord {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_value(mut self, field: &str, value: impl Into<String>) -> Self {
		self.values.insert(field.to_string(), value.into());
		self
	}

	/// Attach an error collection, enabling error queries on the record
	pub fn with_errors(mut self, errors: Errors) -> Self {
		self.errors = Some(errors);
		self
	}

	pub fn with_human_name(mut self, field: &str, human_name: impl Into<String>) -> Self {
		self.human_names
			.insert(field.to_string(), human_name.into());
		self
	}

	pub fn with_association(mut self, name: &str, record: FormRecord) -> Self {
		self.associations.insert(name.to_string(), record);
		self
	}

	/// Mutable access to the errors, enabling error queries if they were not yet
	pub fn errors_mut(&mut self) -> &mut Errors {
		self.errors.get_or_insert_with(Errors::new)
	}
}

impl FormObject for FormRecord {
	fn value(&self, field: &str) -> Option<String> {
		self.values.get(field).cloned()
	}

	fn errors(&self) -> Option<&Errors> {
		self.errors.as_ref()
	}

	fn human_name(&self, field: &str) -> Option<String> {
		self.human_names.get(field).cloned()
	}

	fn association(&self, name: &str) -> Option<&dyn FormObject> {
		self.associations
			.get(name)
			.map(|record| record as &dyn FormObject)
	}
}
