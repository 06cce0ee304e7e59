//! Field helpers
//!
//! A field helper renders the control for one field of the bound object.
//! Helpers are registered by name in a [`HelperRegistry`]; builders dispatch
//! field calls to them by that name. The standard set covers
//! `text_field`, `password_field`, `hidden_field`, `text_area`, `check_box`
//! and `select`. Applications register their own helpers next to them.

use crate::error::{FormError, FormResult};
use crate::model::FormObject;
use labelify_utils::html::{Attributes, escape, render_attributes};
use serde_json::Value;
use std::collections::HashMap;

/// A field helper callback
pub type FieldHelper = Box<dyn Fn(&HelperCall<'_>) -> FormResult<String> + Send + Sync>;

/// Everything a field helper gets to see of a field call
pub struct HelperCall<'c> {
	pub object_name: &'c str,
	pub field: &'c str,
	/// Extra positional arguments of the call
	pub args: &'c [Value],
	/// The bound object, if any
	pub object: Option<&'c dyn FormObject>,
	/// HTML attributes for the rendered control
	pub attributes: &'c Attributes,
	/// Content block of the call, for helpers wrapping content
	pub block: Option<&'c dyn Fn() -> String>,
}

impl HelperCall<'_> {
	/// The `id` attribute of the control: `{object}_{field}`
	///
	/// Characters outside `[A-Za-z0-9_]` are replaced by `_`.
	pub fn id(&self) -> String {
		dom_id(self.object_name, self.field)
	}

	/// The `name` attribute of the control: `{object}[{field}]`
	pub fn name(&self) -> String {
		format!("{}[{}]", self.object_name, self.field)
	}

	/// Current value of the field on the bound object
	pub fn value(&self) -> Option<String> {
		self.object.and_then(|object| object.value(self.field))
	}

	/// Extra argument at `position`
	pub fn arg(&self, position: usize) -> Option<&Value> {
		self.args.get(position)
	}

	/// Content of the call's block, or an empty string without one
	pub fn block_content(&self) -> String {
		self.block.map(|block| block()).unwrap_or_default()
	}
}

/// Named field helpers
pub struct HelperRegistry {
	helpers: HashMap<String, FieldHelper>,
}

impl HelperRegistry {
	/// An empty registry
	pub fn empty() -> Self {
		Self {
			helpers: HashMap::new(),
		}
	}

	/// A registry with the standard helpers
	pub fn new() -> Self {
		let mut registry = Self::empty();
		registry.register("text_field", |call| Ok(input_tag("text", call, true)));
		registry.register("password_field", |call| {
			Ok(input_tag("password", call, false))
		});
		registry.register("hidden_field", |call| Ok(input_tag("hidden", call, true)));
		registry.register("text_area", text_area);
		registry.register("check_box", check_box);
		registry.register("select", select);
		registry
	}

	/// Register `helper` under `name`, replacing a helper of the same name
	pub fn register<F>(&mut self, name: &str, helper: F)
	where
		F: Fn(&HelperCall<'_>) -> FormResult<String> + Send + Sync + 'static,
	{
		self.helpers.insert(name.to_string(), Box::new(helper));
	}

	pub fn contains(&self, name: &str) -> bool {
		self.helpers.contains_key(name)
	}

	pub fn get(&self, name: &str) -> Option<&FieldHelper> {
		self.helpers.get(name)
	}

	/// Render `call` with the helper registered as `selector`
	pub fn call(&self, selector: &str, call: &HelperCall<'_>) -> FormResult<String> {
		let helper = self
			.get(selector)
			.ok_or_else(|| FormError::UnknownHelper(selector.to_string()))?;
		helper(call)
	}
}

impl Default for HelperRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// `{object}_{field}` with characters outside `[A-Za-z0-9_]` replaced by `_`
pub(crate) fn dom_id(object_name: &str, field: &str) -> String {
	format!("{}_{}", object_name, field)
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
		.collect()
}

/// Convert an extra argument into attribute text
fn value_to_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Base attributes of a control, followed by the call's attributes
fn control_attributes(base: Vec<(&str, String)>, call: &HelperCall<'_>) -> Attributes {
	let mut attrs: Attributes = base
		.into_iter()
		.map(|(key, value)| (key.to_string(), value))
		.collect();
	for (key, value) in call.attributes {
		attrs.insert(key.clone(), value.clone());
	}
	attrs
}

fn input_tag(input_type: &str, call: &HelperCall<'_>, with_value: bool) -> String {
	let mut base = vec![
		("type", input_type.to_string()),
		("id", call.id()),
		("name", call.name()),
	];
	if with_value && let Some(value) = call.value() {
		base.push(("value", value));
	}
	format!("<input{}/>", render_attributes(&control_attributes(base, call)))
}

fn text_area(call: &HelperCall<'_>) -> FormResult<String> {
	let attrs = control_attributes(vec![("id", call.id()), ("name", call.name())], call);
	Ok(format!(
		"<textarea{}>{}</textarea>",
		render_attributes(&attrs),
		escape(&call.value().unwrap_or_default())
	))
}

/// A checkbox preceded by a hidden input carrying the unchecked value
///
/// Extra arguments: checked value (default `1`), unchecked value (default `0`).
fn check_box(call: &HelperCall<'_>) -> FormResult<String> {
	let checked_value = call.arg(0).map(value_to_string).unwrap_or_else(|| "1".to_string());
	let unchecked_value = call.arg(1).map(value_to_string).unwrap_or_else(|| "0".to_string());

	let mut hidden = Attributes::new();
	hidden.insert("type".to_string(), "hidden".to_string());
	hidden.insert("name".to_string(), call.name());
	hidden.insert("value".to_string(), unchecked_value);

	let mut base = vec![
		("type", "checkbox".to_string()),
		("id", call.id()),
		("name", call.name()),
		("value", checked_value.clone()),
	];
	if call.value().as_deref() == Some(checked_value.as_str()) {
		base.push(("checked", "checked".to_string()));
	}

	Ok(format!(
		"<input{}/><input{}/>",
		render_attributes(&hidden),
		render_attributes(&control_attributes(base, call))
	))
}

/// A select box over the choices in the first extra argument
///
/// Choices are strings (label and value alike) or `[label, value]` pairs.
fn select(call: &HelperCall<'_>) -> FormResult<String> {
	let choices = call
		.arg(0)
		.and_then(Value::as_array)
		.ok_or_else(|| FormError::MissingArgument {
			selector: "select".to_string(),
			position: 0,
			expected: "an array of choices",
		})?;
	let selected = call.value();

	let mut options = String::new();
	for choice in choices {
		let (label, value) = match choice {
			Value::Array(pair) if pair.len() == 2 => {
				(value_to_string(&pair[0]), value_to_string(&pair[1]))
			}
			other => {
				let text = value_to_string(other);
				(text.clone(), text)
			}
		};
		let selected_attr = if selected.as_deref() == Some(value.as_str()) {
			r#" selected="selected""#
		} else {
			""
		};
		options.push_str(&format!(
			r#"<option value="{}"{}>{}</option>"#,
			escape(&value),
			selected_attr,
			escape(&label)
		));
	}

	let attrs = control_attributes(vec![("id", call.id()), ("name", call.name())], call);
	Ok(format!("<select{}>{}</select>", render_attributes(&attrs), options))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::FormRecord;
	use rstest::rstest;
	use serde_json::json;

	fn call<'c>(
		field: &'c str,
		args: &'c [Value],
		object: Option<&'c dyn FormObject>,
		attributes: &'c Attributes,
	) -> HelperCall<'c> {
		HelperCall {
			object_name: "person",
			field,
			args,
			object,
			attributes,
			block: None,
		}
	}

	#[rstest]
	fn test_text_field() {
		let person = FormRecord::new().with_value("name", "Tester");
		let attrs = Attributes::new();
		let registry = HelperRegistry::new();

		let html = registry
			.call("text_field", &call("name", &[], Some(&person), &attrs))
			.unwrap();

		assert_eq!(
			html,
			r#"<input type="text" id="person_name" name="person[name]" value="Tester"/>"#
		);
	}

	#[rstest]
	fn test_text_field_without_object_has_no_value() {
		let mut attrs = Attributes::new();
		attrs.insert("class".to_string(), "required".to_string());
		let registry = HelperRegistry::new();

		let html = registry
			.call("text_field", &call("name", &[], None, &attrs))
			.unwrap();

		assert_eq!(
			html,
			r#"<input type="text" id="person_name" name="person[name]" class="required"/>"#
		);
	}

	#[rstest]
	fn test_password_field_never_renders_value() {
		let person = FormRecord::new().with_value("password", "secret");
		let attrs = Attributes::new();

		let html = HelperRegistry::new()
			.call("password_field", &call("password", &[], Some(&person), &attrs))
			.unwrap();

		assert!(!html.contains("secret"));
		assert!(html.contains(r#"type="password""#));
	}

	#[rstest]
	fn test_text_area_escapes_value() {
		let person = FormRecord::new().with_value("biography", "<b>bold</b>");
		let attrs = Attributes::new();

		let html = HelperRegistry::new()
			.call("text_area", &call("biography", &[], Some(&person), &attrs))
			.unwrap();

		assert_eq!(
			html,
			r#"<textarea id="person_biography" name="person[biography]">&lt;b&gt;bold&lt;/b&gt;</textarea>"#
		);
	}

	#[rstest]
	#[case("1", true)]
	#[case("0", false)]
	fn test_check_box(#[case] admin: &str, #[case] checked: bool) {
		let person = FormRecord::new().with_value("admin", admin);
		let attrs = Attributes::new();

		let html = HelperRegistry::new()
			.call("check_box", &call("admin", &[], Some(&person), &attrs))
			.unwrap();

		assert!(html.starts_with(r#"<input type="hidden" name="person[admin]" value="0"/>"#));
		assert_eq!(html.contains(r#"checked="checked""#), checked);
	}

	#[rstest]
	fn test_check_box_custom_values() {
		let person = FormRecord::new().with_value("role", "admin");
		let attrs = Attributes::new();
		let args = [json!("admin"), json!("user")];

		let html = HelperRegistry::new()
			.call("check_box", &call("role", &args, Some(&person), &attrs))
			.unwrap();

		assert_eq!(
			html,
			concat!(
				r#"<input type="hidden" name="person[role]" value="user"/>"#,
				r#"<input type="checkbox" id="person_role" name="person[role]" value="admin" checked="checked"/>"#
			)
		);
	}

	#[rstest]
	fn test_select_marks_current_value() {
		let person = FormRecord::new().with_value("country", "nl");
		let attrs = Attributes::new();
		let args = [json!([["Netherlands", "nl"], ["Belgium", "be"], "other"])];

		let html = HelperRegistry::new()
			.call("select", &call("country", &args, Some(&person), &attrs))
			.unwrap();

		assert_eq!(
			html,
			concat!(
				r#"<select id="person_country" name="person[country]">"#,
				r#"<option value="nl" selected="selected">Netherlands</option>"#,
				r#"<option value="be">Belgium</option>"#,
				r#"<option value="other">other</option>"#,
				"</select>"
			)
		);
	}

	#[rstest]
	fn test_select_requires_choices() {
		let attrs = Attributes::new();

		let result = HelperRegistry::new().call("select", &call("country", &[], None, &attrs));

		assert!(matches!(
			result,
			Err(FormError::MissingArgument { position: 0, .. })
		));
	}

	#[rstest]
	fn test_unknown_helper() {
		let attrs = Attributes::new();

		let result = HelperRegistry::new().call("date_select", &call("born_on", &[], None, &attrs));

		assert!(matches!(result, Err(FormError::UnknownHelper(ref name)) if name == "date_select"));
	}

	#[rstest]
	fn test_register_overrides_and_uses_block() {
		let mut registry = HelperRegistry::empty();
		registry.register("wrap", |call| {
			Ok(format!("<div>{}</div>", call.block_content()))
		});
		let attrs = Attributes::new();
		let block = || "body".to_string();
		let mut helper_call = call("name", &[], None, &attrs);
		helper_call.block = Some(&block);

		assert!(registry.contains("wrap"));
		assert!(!registry.contains("text_field"));
		assert_eq!(registry.call("wrap", &helper_call).unwrap(), "<div>body</div>");
	}

	#[rstest]
	fn test_id_sanitizes_nested_names() {
		let attrs = Attributes::new();
		let helper_call = HelperCall {
			object_name: "person[address]",
			field: "city",
			args: &[],
			object: None,
			attributes: &attrs,
			block: None,
		};

		assert_eq!(helper_call.id(), "person_address__city");
		assert_eq!(helper_call.name(), "person[address][city]");
	}
}
