//! The labelled form builder
//!
//! [`LabelledFormBuilder`] decorates every field call with a `<label>` that
//! contains the field's name and validation errors, then forwards the call
//! to the field helper registered under the call's selector. Labels are left
//! out for `hidden_field`, for helpers suppressed form-wide through
//! [`FormOptions::no_label_for`], and for calls passing `label: false` or
//! `no_label`.

use crate::error::FormResult;
use crate::helpers::{HelperCall, dom_id};
use crate::model::FormObject;
use crate::options::{FieldOptions, FormOptions, LabelOption, LabelOptions, SubmitOptions};
use crate::template::{FormBuilder, FormTemplate};
use labelify_i18n::gettext;
use labelify_utils::html::{Attributes, escape, escape_attr, render_attributes};
use labelify_utils::text::{humanize, to_sentence};
use serde_json::Value;

/// Value of a submit control rendered without explicit value
pub const DEFAULT_SUBMIT_VALUE: &str = "Submit";

/// Helper rendered without label regardless of options
const HIDDEN_FIELD: &str = "hidden_field";

/// A single field call: helper selector, field, extra arguments, options and
/// an optional content block
pub struct FieldCall<'c> {
	selector: String,
	field: String,
	args: Vec<Value>,
	options: FieldOptions,
	block: Option<&'c dyn Fn() -> String>,
}

impl<'c> FieldCall<'c> {
	pub fn new(selector: &str, field: &str) -> Self {
		Self {
			selector: selector.to_string(),
			field: field.to_string(),
			args: Vec::new(),
			options: FieldOptions::default(),
			block: None,
		}
	}

	/// Append an extra positional argument
	pub fn with_arg(mut self, arg: Value) -> Self {
		self.args.push(arg);
		self
	}

	pub fn with_options(mut self, options: FieldOptions) -> Self {
		self.options = options;
		self
	}

	pub fn with_block(mut self, block: &'c dyn Fn() -> String) -> Self {
		self.block = Some(block);
		self
	}

	pub fn selector(&self) -> &str {
		&self.selector
	}

	pub fn field(&self) -> &str {
		&self.field
	}

	pub fn args(&self) -> &[Value] {
		&self.args
	}

	pub fn options(&self) -> &FieldOptions {
		&self.options
	}

	pub fn block(&self) -> Option<&'c dyn Fn() -> String> {
		self.block
	}
}

/// Form builder adding labels and error messages to field calls
///
/// # Examples
///
/// ```
/// use labelify_forms::{
/// 	FieldOptions, FormBuilder, FormOptions, FormRecord, FormTemplate, labelled_form_for,
/// };
///
/// let template = FormTemplate::new();
/// let person = FormRecord::new().with_value("first_name", "Ada");
/// let mut output = String::new();
///
/// labelled_form_for(&template, &mut output, "person", Some(&person), &FormOptions::new(), |f| {
/// 	f.concat(&f.text_field("first_name", FieldOptions::new())?);
/// 	f.concat(&f.hidden_field("id", FieldOptions::new())?);
/// 	Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(
/// 	output,
/// 	concat!(
/// 		r#"<form method="post">"#,
/// 		r#"<label for="person_first_name"><span class="field_name">First name</span></label>"#,
/// 		r#"<input type="text" id="person_first_name" name="person[first_name]" value="Ada"/>"#,
/// 		r#"<input type="hidden" id="person_id" name="person[id]"/>"#,
/// 		"</form>"
/// 	)
/// );
/// ```
pub struct LabelledFormBuilder<'a> {
	object_name: String,
	object: Option<&'a dyn FormObject>,
	template: &'a FormTemplate,
	options: &'a FormOptions,
	output: String,
}

impl<'a> LabelledFormBuilder<'a> {
	pub fn object_name(&self) -> &str {
		&self.object_name
	}

	pub fn object(&self) -> Option<&'a dyn FormObject> {
		self.object
	}

	/// Markup appended to the form body so far
	pub fn output(&self) -> &str {
		&self.output
	}

	/// Render a field call: the label (when due) followed by the helper's markup
	///
	/// Fails with [`FormError::UnknownHelper`](crate::FormError::UnknownHelper)
	/// when no helper is registered under the call's selector.
	pub fn invoke(&self, call: FieldCall<'_>) -> FormResult<String> {
		let mut html = String::new();
		if let Some(label_options) = self.label_directive(&call) {
			html.push_str(&self.label(call.field(), label_options));
		}

		tracing::debug!(
			selector = call.selector(),
			field = call.field(),
			object = %self.object_name,
			"dispatching field helper"
		);
		html.push_str(&self.template.call_helper(
			call.selector(),
			&HelperCall {
				object_name: &self.object_name,
				field: call.field(),
				args: call.args(),
				object: self.object,
				attributes: call.options().attributes(),
				block: call.block(),
			},
		)?);
		Ok(html)
	}

	/// Label options for `call`, or `None` when the label is suppressed
	fn label_directive(&self, call: &FieldCall<'_>) -> Option<LabelOptions> {
		let selector = call.selector();
		if selector == HIDDEN_FIELD || self.options.suppresses_label_for(selector) {
			tracing::debug!(selector, field = call.field(), "label suppressed for helper");
			return None;
		}

		let options = call.options();
		if options.is_no_label() {
			return None;
		}

		let mut label = LabelOptions::new();
		match options.label() {
			Some(LabelOption::Hide) => return None,
			Some(LabelOption::Text(text)) => label = label.with_value(text.clone()),
			Some(LabelOption::Show) | None => {}
		}
		if let Some(class) = options.class() {
			label = label.with_class(class);
		}
		Some(label)
	}

	pub fn text_field(&self, field: &str, options: FieldOptions) -> FormResult<String> {
		self.invoke(FieldCall::new("text_field", field).with_options(options))
	}

	pub fn password_field(&self, field: &str, options: FieldOptions) -> FormResult<String> {
		self.invoke(FieldCall::new("password_field", field).with_options(options))
	}

	pub fn hidden_field(&self, field: &str, options: FieldOptions) -> FormResult<String> {
		self.invoke(FieldCall::new("hidden_field", field).with_options(options))
	}

	pub fn text_area(&self, field: &str, options: FieldOptions) -> FormResult<String> {
		self.invoke(FieldCall::new("text_area", field).with_options(options))
	}

	pub fn check_box(&self, field: &str, options: FieldOptions) -> FormResult<String> {
		self.invoke(FieldCall::new("check_box", field).with_options(options))
	}

	/// Select box over `choices`: strings or `[label, value]` pairs
	pub fn select(&self, field: &str, choices: Value, options: FieldOptions) -> FormResult<String> {
		self.invoke(
			FieldCall::new("select", field)
				.with_arg(choices)
				.with_options(options),
		)
	}

	/// Submit control with style class `submit`
	///
	/// A `type` of `button` renders a `<button>` wrapping the value in a
	/// `<span>`; otherwise an `<input type="submit">` is rendered. The value
	/// is translated.
	///
	/// # Examples
	///
	/// ```
	/// use labelify_forms::{FormBuilder, FormOptions, FormTemplate, LabelledFormBuilder, SubmitOptions};
	///
	/// let template = FormTemplate::new();
	/// let options = FormOptions::new();
	/// let f = LabelledFormBuilder::new("person", None, &template, &options);
	///
	/// assert_eq!(
	/// 	f.submit("save", SubmitOptions::new().with_class("button")),
	/// 	r#"<input type="submit" value="save" class="submit button"/>"#
	/// );
	/// assert_eq!(
	/// 	f.submit("save", SubmitOptions::new().as_button()),
	/// 	r#"<button type="submit" class="submit"><span>save</span></button>"#
	/// );
	/// ```
	pub fn submit(&self, value: &str, options: SubmitOptions) -> String {
		let class = match options.attributes().get("class") {
			Some(extra) if !extra.is_empty() => format!("submit {}", extra),
			_ => "submit".to_string(),
		};
		let value = gettext(value);
		let extra = options
			.attributes()
			.iter()
			.filter(|(key, _)| *key != "type" && *key != "class");

		let mut attrs = Attributes::new();
		if options.is_button() {
			attrs.insert("type".to_string(), "submit".to_string());
			attrs.insert("class".to_string(), class);
			attrs.extend(extra.map(|(key, value)| (key.clone(), value.clone())));
			format!(
				"<button{}><span>{}</span></button>",
				render_attributes(&attrs),
				escape(&value)
			)
		} else {
			let kind = options
				.attributes()
				.get("type")
				.cloned()
				.unwrap_or_else(|| "submit".to_string());
			attrs.insert("type".to_string(), kind);
			attrs.insert("value".to_string(), value);
			attrs.insert("class".to_string(), class);
			attrs.extend(extra.map(|(key, value)| (key.clone(), value.clone())));
			format!("<input{}/>", render_attributes(&attrs))
		}
	}

	/// Submit control labelled `Submit`
	pub fn submit_default(&self) -> String {
		self.submit(DEFAULT_SUBMIT_VALUE, SubmitOptions::new())
	}

	/// Label for `field`, pointing at the control rendered for it
	///
	/// The text is the explicit label value, else the bound object's human
	/// column name, else the humanized field name. Field errors are nested
	/// in the label.
	pub fn label(&self, field: &str, options: LabelOptions) -> String {
		let text = match options.value() {
			Some(value) => value.to_string(),
			None => self
				.object
				.and_then(|object| object.human_name(field))
				.unwrap_or_else(|| humanize(field)),
		};

		format!(
			r#"<label for="{}"{}><span class="field_name">{}</span>{}</label>"#,
			escape_attr(&dom_id(&self.object_name, field)),
			render_attributes(options.attributes()),
			escape(&gettext(&text)),
			self.error_messages(field).unwrap_or_default()
		)
	}

	/// Error messages on `field`, translated and joined as a sentence
	pub fn error_messages(&self, field: &str) -> Option<String> {
		let messages = self.object?.errors()?.on(field)?;
		let translated: Vec<String> = messages.iter().map(|message| gettext(message)).collect();
		Some(format!(
			r#"<span class="error_message">{}</span>"#,
			escape(&to_sentence(&translated))
		))
	}

	/// Scope part of the form to another object
	///
	/// The previous binding is restored when `body` returns, fails or panics.
	pub fn with_object<R>(
		&mut self,
		object_name: &str,
		object: Option<&'a dyn FormObject>,
		body: impl FnOnce(&mut Self) -> R,
	) -> R {
		let previous_name = std::mem::replace(&mut self.object_name, object_name.to_string());
		let previous_object = std::mem::replace(&mut self.object, object);
		let mut scope = scopeguard::guard(self, move |builder| {
			builder.object_name = previous_name;
			builder.object = previous_object;
		});
		body(&mut **scope)
	}

	/// Scope part of the form to the object associated through `association`
	///
	/// Without a bound object the scope is bound to no object.
	pub fn with_association<R>(
		&mut self,
		association: &str,
		body: impl FnOnce(&mut Self) -> R,
	) -> R {
		let object = self
			.object
			.and_then(|object| object.association(association));
		self.with_object(association, object, body)
	}
}

impl<'a> FormBuilder<'a> for LabelledFormBuilder<'a> {
	fn new(
		object_name: &str,
		object: Option<&'a dyn FormObject>,
		template: &'a FormTemplate,
		options: &'a FormOptions,
	) -> Self {
		Self {
			object_name: object_name.to_string(),
			object,
			template,
			options,
			output: String::new(),
		}
	}

	fn concat(&mut self, html: &str) {
		self.output.push_str(html);
	}

	fn into_output(self) -> String {
		self.output
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FormError;
	use crate::model::{Errors, FormRecord};
	use crate::options::LabelSuppression;
	use rstest::rstest;
	use std::panic::{AssertUnwindSafe, catch_unwind};

	fn builder<'a>(
		template: &'a FormTemplate,
		options: &'a FormOptions,
		object: Option<&'a dyn FormObject>,
	) -> LabelledFormBuilder<'a> {
		LabelledFormBuilder::new("person", object, template, options)
	}

	#[rstest]
	fn test_label_humanizes_field() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let f = builder(&template, &options, None);

		assert_eq!(
			f.label("first_name", LabelOptions::new()),
			r#"<label for="person_first_name"><span class="field_name">First name</span></label>"#
		);
	}

	#[rstest]
	fn test_label_points_at_nested_control() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let f = LabelledFormBuilder::new("person[address]", None, &template, &options);

		let html = f.text_field("city", FieldOptions::new()).unwrap();

		assert_eq!(
			html,
			concat!(
				r#"<label for="person_address__city"><span class="field_name">City</span></label>"#,
				r#"<input type="text" id="person_address__city" name="person[address][city]"/>"#
			)
		);
	}

	#[rstest]
	fn test_label_prefers_value_over_human_name() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let person = FormRecord::new().with_human_name("name", "human name");
		let f = builder(&template, &options, Some(&person));

		let default = f.label("name", LabelOptions::new());
		let explicit = f.label("name", LabelOptions::new().with_value("test label"));

		assert!(default.contains(r#"<span class="field_name">human name</span>"#));
		assert!(explicit.contains(r#"<span class="field_name">test label</span>"#));
	}

	#[rstest]
	fn test_label_nests_field_errors() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let mut errors = Errors::new();
		errors.add("name", "name error1");
		errors.add("name", "name error2");
		let person = FormRecord::new().with_errors(errors);
		let f = builder(&template, &options, Some(&person));

		assert_eq!(
			f.label("name", LabelOptions::new().with_class("required")),
			concat!(
				r#"<label for="person_name" class="required">"#,
				r#"<span class="field_name">Name</span>"#,
				r#"<span class="error_message">name error1 and name error2</span>"#,
				"</label>"
			)
		);
	}

	#[rstest]
	fn test_error_messages_escape_markup() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let mut errors = Errors::new();
		errors.add("name", "must not contain <script>");
		let person = FormRecord::new().with_errors(errors);
		let f = builder(&template, &options, Some(&person));

		assert_eq!(
			f.error_messages("name").as_deref(),
			Some(r#"<span class="error_message">must not contain &lt;script&gt;</span>"#)
		);
		assert_eq!(f.error_messages("email"), None);
	}

	#[rstest]
	#[case::default(FieldOptions::new(), true)]
	#[case::label_true(FieldOptions::new().with_label(true), true)]
	#[case::label_false(FieldOptions::new().with_label(false), false)]
	#[case::no_label(FieldOptions::new().with_no_label(), false)]
	#[case::label_text(FieldOptions::new().with_label("alt"), true)]
	fn test_label_decision(#[case] field_options: FieldOptions, #[case] labelled: bool) {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let f = builder(&template, &options, None);

		let html = f.text_field("name", field_options).unwrap();

		assert_eq!(html.contains(r#"<label for="person_name""#), labelled);
		assert!(html.contains(r#"<input type="text" id="person_name""#));
	}

	#[rstest]
	fn test_hidden_field_is_never_labelled() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let f = builder(&template, &options, None);

		let html = f
			.hidden_field("token", FieldOptions::new().with_label("Token"))
			.unwrap();

		assert_eq!(html, r#"<input type="hidden" id="person_token" name="person[token]"/>"#);
	}

	#[rstest]
	fn test_no_label_for_pattern() {
		let template = FormTemplate::new();
		let options =
			FormOptions::new().with_no_label_for(LabelSuppression::pattern("^(text|check)_").unwrap());
		let f = builder(&template, &options, None);

		assert!(!f.text_area("bio", FieldOptions::new()).unwrap().contains("<label"));
		assert!(!f.check_box("admin", FieldOptions::new()).unwrap().contains("<label"));
		assert!(
			f.password_field("password", FieldOptions::new())
				.unwrap()
				.contains("<label")
		);
	}

	#[rstest]
	fn test_label_carries_field_class() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let f = builder(&template, &options, None);

		let html = f
			.text_field("name", FieldOptions::new().with_class("required").with_label("alt"))
			.unwrap();

		assert_eq!(
			html,
			concat!(
				r#"<label for="person_name" class="required"><span class="field_name">alt</span></label>"#,
				r#"<input type="text" id="person_name" name="person[name]" class="required"/>"#
			)
		);
	}

	#[rstest]
	fn test_unknown_selector_propagates() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let f = builder(&template, &options, None);

		let result = f.invoke(FieldCall::new("color_field", "accent"));

		assert!(matches!(result, Err(FormError::UnknownHelper(ref name)) if name == "color_field"));
	}

	#[rstest]
	fn test_submit_merges_attributes() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let f = builder(&template, &options, None);

		assert_eq!(
			f.submit(
				"save",
				SubmitOptions::new()
					.as_button()
					.with_class("save-button")
					.with_attr("name", "commit")
			),
			r#"<button type="submit" class="submit save-button" name="commit"><span>save</span></button>"#
		);
		assert_eq!(
			f.submit_default(),
			r#"<input type="submit" value="Submit" class="submit"/>"#
		);
	}

	#[rstest]
	fn test_with_object_restores_binding_after_error() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let person = FormRecord::new().with_value("name", "Tester");
		let address = FormRecord::new();
		let mut f = builder(&template, &options, Some(&person));

		let result: FormResult<()> = f.with_object("address", Some(&address), |a| {
			assert_eq!(a.object_name(), "address");
			Err(FormError::Render("boom".to_string()))
		});

		assert!(result.is_err());
		assert_eq!(f.object_name(), "person");
		assert_eq!(
			f.object().and_then(|object| object.value("name")).as_deref(),
			Some("Tester")
		);
	}

	#[rstest]
	fn test_with_object_restores_binding_after_panic() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let person = FormRecord::new();
		let mut f = builder(&template, &options, Some(&person));

		let outcome = catch_unwind(AssertUnwindSafe(|| {
			let _ = f.with_object("address", None, |_| -> FormResult<()> { panic!("body failed") });
		}));

		assert!(outcome.is_err());
		assert_eq!(f.object_name(), "person");
		assert!(f.object().is_some());
	}

	#[rstest]
	fn test_with_association_without_object() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let mut f = builder(&template, &options, None);

		let html = f
			.with_association("address", |a| {
				assert!(a.object().is_none());
				a.text_field("city", FieldOptions::new())
			})
			.unwrap();

		assert!(html.starts_with(r#"<label for="address_city">"#));
		assert_eq!(f.object_name(), "person");
	}

	#[rstest]
	fn test_nested_scopes_unwind_in_order() {
		let template = FormTemplate::new();
		let options = FormOptions::new();
		let person = FormRecord::new().with_association(
			"address",
			FormRecord::new().with_association("country", FormRecord::new().with_value("code", "NL")),
		);
		let mut f = builder(&template, &options, Some(&person));

		f.with_association("address", |a| {
			a.with_association("country", |c| {
				let html = c.text_field("code", FieldOptions::new())?;
				c.concat(&html);
				Ok::<_, FormError>(())
			})?;
			assert_eq!(a.object_name(), "address");
			Ok::<_, FormError>(())
		})
		.unwrap();

		assert_eq!(f.object_name(), "person");
		assert!(f.output().contains(r#"<label for="country_code">"#));
		assert!(f.output().contains(r#"value="NL""#));
	}
}
