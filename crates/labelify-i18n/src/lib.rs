//! Internationalization support for Labelify
//!
//! Labels, error messages and submit values are passed through [`gettext`]
//! before rendering. Without an active [`TranslationContext`] the text is
//! returned unchanged.
//!
//! ```
//! use labelify_i18n::{MessageCatalog, TranslationContext, gettext, set_active_translation};
//! use std::sync::Arc;
//!
//! let mut catalog = MessageCatalog::new("nl");
//! catalog.add_translation("Name", "Naam");
//!
//! let mut ctx = TranslationContext::new("nl", "en");
//! ctx.add_catalog("nl", catalog).unwrap();
//!
//! assert_eq!(gettext("Name"), "Name");
//! {
//! 	let _guard = set_active_translation(Arc::new(ctx));
//! 	assert_eq!(gettext("Name"), "Naam");
//! }
//! assert_eq!(gettext("Name"), "Name");
//! ```

pub mod catalog;
pub mod context;

pub use catalog::MessageCatalog;
pub use context::{
	TranslationContext, TranslationGuard, active_translation, gettext, set_active_translation,
};

/// Errors raised while assembling translation contexts
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("catalog for locale '{catalog}' cannot be registered as '{locale}'")]
	LocaleMismatch { locale: String, catalog: String },
	#[error("invalid message catalog: {0}")]
	InvalidCatalog(String),
}
