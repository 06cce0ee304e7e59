//! # Labelify
//!
//! Form builders that pair every field with its `<label>` and validation
//! errors, and surface form-level errors above the form.
//!
//! ## Crates
//!
//! - [`forms`] - labelled form builder, field helpers and bound objects
//! - [`i18n`] - message catalogs and the active translation context
//! - [`utils`] - HTML escaping and text helpers
//!
//! ## Quick Example
//!
//! ```
//! use labelify::prelude::*;
//!
//! let template = FormTemplate::new();
//! let person = FormRecord::new().with_value("first_name", "Ada");
//! let mut output = String::new();
//!
//! labelled_form_for(&template, &mut output, "person", Some(&person), &FormOptions::new(), |f| {
//! 	f.concat(&f.text_field("first_name", FieldOptions::new())?);
//! 	f.concat(&f.submit("Save", SubmitOptions::new()));
//! 	Ok(())
//! })
//! .unwrap();
//!
//! assert!(output.contains(r#"<span class="field_name">First name</span>"#));
//! assert!(output.contains(r#"<input type="submit" value="Save" class="submit"/>"#));
//! ```

pub use labelify_forms as forms;
pub use labelify_i18n as i18n;
pub use labelify_utils as utils;

/// Commonly used types
pub mod prelude {
	pub use labelify_forms::{
		Errors, FieldCall, FieldOptions, FormBuilder, FormError, FormObject, FormOptions,
		FormRecord, FormResult, FormTemplate, LabelOption, LabelOptions, LabelSuppression,
		LabelledFormBuilder, SubmitOptions, labelled_form_for,
	};
	pub use labelify_i18n::{MessageCatalog, TranslationContext, gettext, set_active_translation};
}
