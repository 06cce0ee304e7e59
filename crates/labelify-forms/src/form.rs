use crate::builder::LabelledFormBuilder;
use crate::error::FormResult;
use crate::model::FormObject;
use crate::options::FormOptions;
use crate::template::FormTemplate;
use labelify_utils::html::escape;
use labelify_utils::text::to_sentence;

/// Form-level error messages of `object`, joined as a sentence
pub fn base_error_messages(object: Option<&dyn FormObject>) -> Option<String> {
	let messages = object?.errors()?.on_base()?;
	Some(format!(
		r#"<span class="error_message">{}</span>"#,
		escape(&to_sentence(messages))
	))
}

/// Render a form for `object` with labels and errors on every field
///
/// Form-level errors of the object are rendered in front of the form. The
/// body receives a [`LabelledFormBuilder`] bound to `object_name`/`object`.
/// Nothing is written to `output` when the body fails.
///
/// # Examples
///
/// ```
/// use labelify_forms::{Errors, FieldOptions, FormOptions, FormRecord, FormTemplate, labelled_form_for};
///
/// let mut errors = Errors::new();
/// errors.add_to_base("base error1");
/// errors.add_to_base("base error2");
/// let person = FormRecord::new().with_errors(errors);
///
/// let mut output = String::new();
/// labelled_form_for(&FormTemplate::new(), &mut output, "person", Some(&person), &FormOptions::new(), |_| Ok(()))
/// 	.unwrap();
///
/// assert_eq!(
/// 	output,
/// 	r#"<span class="error_message">base error1 and base error2</span><form method="post"></form>"#
/// );
/// ```
pub fn labelled_form_for<'a, F>(
	template: &'a FormTemplate,
	output: &mut String,
	object_name: &str,
	object: Option<&'a dyn FormObject>,
	options: &'a FormOptions,
	body: F,
) -> FormResult<()>
where
	F: FnOnce(&mut LabelledFormBuilder<'a>) -> FormResult<()>,
{
	let mut form = String::new();
	template.form_for::<LabelledFormBuilder<'a>, _>(&mut form, object_name, object, options, body)?;

	if let Some(banner) = base_error_messages(object) {
		output.push_str(&banner);
	}
	output.push_str(&form);
	Ok(())
}
