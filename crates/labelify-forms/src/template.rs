//! Form rendering primitives
//!
//! [`FormTemplate`] owns the field helpers and renders the `<form>` element
//! around a builder body. Which builder the body receives is chosen by the
//! caller through the [`FormBuilder`] type parameter of
//! [`FormTemplate::form_for`].

use crate::builder::FieldCall;
use crate::error::FormResult;
use crate::helpers::{HelperCall, HelperRegistry};
use crate::model::FormObject;
use crate::options::FormOptions;
use labelify_utils::html::{Attributes, render_attributes};

/// A builder handed to the body of a form
pub trait FormBuilder<'a>: Sized {
	fn new(
		object_name: &str,
		object: Option<&'a dyn FormObject>,
		template: &'a FormTemplate,
		options: &'a FormOptions,
	) -> Self;

	/// Append markup to the form body
	fn concat(&mut self, html: &str);

	/// The accumulated form body
	fn into_output(self) -> String;
}

/// Field helpers plus the `form_for` primitive
#[derive(Default)]
pub struct FormTemplate {
	helpers: HelperRegistry,
}

impl FormTemplate {
	/// A template with the standard field helpers
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an application specific field helper
	///
	/// # Examples
	///
	/// ```
	/// use labelify_forms::{FieldCall, FormOptions, FormRecord, FormTemplate, LabelledFormBuilder, FormBuilder};
	///
	/// let mut template = FormTemplate::new();
	/// template.register_helper("color_field", |call| {
	/// 	Ok(format!(r#"<input type="color" id="{}"/>"#, call.id()))
	/// });
	///
	/// let options = FormOptions::new();
	/// let builder = LabelledFormBuilder::new("theme", None, &template, &options);
	/// let html = builder.invoke(FieldCall::new("color_field", "accent")).unwrap();
	///
	/// assert!(html.ends_with(r#"<input type="color" id="theme_accent"/>"#));
	/// ```
	pub fn register_helper<F>(&mut self, name: &str, helper: F)
	where
		F: Fn(&HelperCall<'_>) -> FormResult<String> + Send + Sync + 'static,
	{
		self.helpers.register(name, helper);
	}

	pub fn has_helper(&self, name: &str) -> bool {
		self.helpers.contains(name)
	}

	/// Render a field call with the helper registered as `selector`
	pub fn call_helper(&self, selector: &str, call: &HelperCall<'_>) -> FormResult<String> {
		self.helpers.call(selector, call)
	}

	/// The opening `<form>` tag
	///
	/// The method defaults to `post`; other `html` attributes follow it.
	pub fn form_tag(&self, options: &FormOptions) -> String {
		let mut attrs = Attributes::new();
		if let Some(url) = &options.url {
			attrs.insert("action".to_string(), url.clone());
		}
		let method = options
			.html
			.get("method")
			.cloned()
			.unwrap_or_else(|| "post".to_string());
		attrs.insert("method".to_string(), method);
		for (key, value) in options.html.iter().filter(|(key, _)| *key != "method") {
			attrs.insert(key.clone(), value.clone());
		}
		format!("<form{}>", render_attributes(&attrs))
	}

	/// Render a form for `object` into `output`
	///
	/// The body receives a builder of type `B` and fills the form through it.
	/// An error from the body aborts rendering and leaves `output` untouched.
	pub fn form_for<'a, B, F>(
		&'a self,
		output: &mut String,
		object_name: &str,
		object: Option<&'a dyn FormObject>,
		options: &'a FormOptions,
		body: F,
	) -> FormResult<()>
	where
		B: FormBuilder<'a>,
		F: FnOnce(&mut B) -> FormResult<()>,
	{
		tracing::debug!(object = object_name, bound = object.is_some(), "rendering form");
		let mut builder = B::new(object_name, object, self, options);
		body(&mut builder)?;

		output.push_str(&self.form_tag(options));
		output.push_str(&builder.into_output());
		output.push_str("</form>");
		Ok(())
	}
}

/// Builder dispatching field calls straight to the helpers, without labels
pub struct PlainFormBuilder<'a> {
	object_name: String,
	object: Option<&'a dyn FormObject>,
	template: &'a FormTemplate,
	output: String,
}

impl PlainFormBuilder<'_> {
	pub fn invoke(&self, call: FieldCall<'_>) -> FormResult<String> {
		self.template.call_helper(
			call.selector(),
			&HelperCall {
				object_name: &self.object_name,
				field: call.field(),
				args: call.args(),
				object: self.object,
				attributes: call.options().attributes(),
				block: call.block(),
			},
		)
	}
}

impl<'a> FormBuilder<'a> for PlainFormBuilder<'a> {
	fn new(
		object_name: &str,
		object: Option<&'a dyn FormObject>,
		template: &'a FormTemplate,
		_options: &'a FormOptions,
	) -> Self {
		Self {
			object_name: object_name.to_string(),
			object,
			template,
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
