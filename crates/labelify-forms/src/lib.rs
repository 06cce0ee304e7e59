//! Labelled forms for Labelify
//!
//! This crate renders HTML forms in which every field is paired with its
//! label and validation errors:
//! - [`labelled_form_for`] renders form-level errors and the `<form>` element
//! - [`LabelledFormBuilder`] puts a `<label>` with the field name and errors
//!   in front of each field and renders submit controls
//! - [`FormTemplate`] holds the named field helpers the builders dispatch to
//! - [`FormObject`] is what a form is bound to; [`FormRecord`] implements it
//!   for data assembled at runtime
//!
//! ```
//! use labelify_forms::{
//! 	Errors, FieldOptions, FormBuilder, FormOptions, FormRecord, FormTemplate, SubmitOptions, labelled_form_for,
//! };
//!
//! let mut errors = Errors::new();
//! errors.add("name", "is required");
//! let person = FormRecord::new()
//! 	.with_value("name", "")
//! 	.with_errors(errors)
//! 	.with_association("address", FormRecord::new().with_value("city", "Amsterdam"));
//!
//! let template = FormTemplate::new();
//! let mut output = String::new();
//! labelled_form_for(&template, &mut output, "person", Some(&person), &FormOptions::new(), |f| {
//! 	f.concat(&f.text_field("name", FieldOptions::new())?);
//! 	let city = f.with_association("address", |a| a.text_field("city", FieldOptions::new()))?;
//! 	f.concat(&city);
//! 	f.concat(&f.submit("Save", SubmitOptions::new()));
//! 	Ok(())
//! })
//! .unwrap();
//!
//! assert!(output.contains(r#"<span class="error_message">is required</span>"#));
//! assert!(output.contains(r#"<label for="address_city">"#));
//! assert!(output.contains(r#"value="Amsterdam""#));
//! ```

pub mod builder;
pub mod error;
pub mod form;
pub mod helpers;
pub mod model;
pub mod options;
pub mod template;

pub use builder::{DEFAULT_SUBMIT_VALUE, FieldCall, LabelledFormBuilder};
pub use error::{FormError, FormResult};
pub use form::{base_error_messages, labelled_form_for};
pub use helpers::{FieldHelper, HelperCall, HelperRegistry};
pub use model::{BASE_KEY, Errors, FormObject, FormRecord};
pub use options::{
	FieldOptions, FormOptions, LabelOption, LabelOptions, LabelSuppression, SubmitOptions,
};
pub use template::{FormBuilder, FormTemplate, PlainFormBuilder};
