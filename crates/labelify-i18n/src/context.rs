//! Active translation context
//!
//! A [`TranslationContext`] bundles the catalogs of several locales with the
//! locale currently in use. It is activated per thread with
//! [`set_active_translation`]; the returned guard restores the previously
//! active context when dropped, so nested activations unwind in order.

use crate::{I18nError, MessageCatalog};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

thread_local! {
	static ACTIVE_TRANSLATION: RefCell<Option<Arc<TranslationContext>>> = const { RefCell::new(None) };
}

/// Catalogs for a set of locales plus the active and fallback locale
#[derive(Debug, Clone)]
pub struct TranslationContext {
	locale: String,
	fallback_locale: String,
	catalogs: HashMap<String, MessageCatalog>,
}

impl TranslationContext {
	/// Create a context translating into `locale`, falling back to `fallback_locale`
	pub fn new(locale: &str, fallback_locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			fallback_locale: fallback_locale.to_string(),
			catalogs: HashMap::new(),
		}
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn fallback_locale(&self) -> &str {
		&self.fallback_locale
	}

	/// Register a catalog under `locale`
	///
	/// The catalog's own locale must match the key it is registered under.
	pub fn add_catalog(&mut self, locale: &str, catalog: MessageCatalog) -> Result<(), I18nError> {
		if catalog.locale() != locale {
			return Err(I18nError::LocaleMismatch {
				locale: locale.to_string(),
				catalog: catalog.locale().to_string(),
			});
		}
		self.catalogs.insert(locale.to_string(), catalog);
		Ok(())
	}

	/// Look up `message` in the active locale, then in the fallback locale
	pub fn translate(&self, message: &str) -> Option<&str> {
		[&self.locale, &self.fallback_locale]
			.into_iter()
			.filter_map(|locale| self.catalogs.get(locale.as_str()))
			.find_map(|catalog| catalog.get(message))
			.map(String::as_str)
	}
}

/// Restores the previously active translation context on drop
#[must_use = "the translation is deactivated as soon as the guard is dropped"]
pub struct TranslationGuard {
	previous: Option<Arc<TranslationContext>>,
}

impl Drop for TranslationGuard {
	fn drop(&mut self) {
		let previous = self.previous.take();
		ACTIVE_TRANSLATION.with(|active| *active.borrow_mut() = previous);
	}
}

/// Activate `ctx` for the current thread until the guard is dropped
pub fn set_active_translation(ctx: Arc<TranslationContext>) -> TranslationGuard {
	tracing::debug!(locale = %ctx.locale(), "activating translation context");
	let previous = ACTIVE_TRANSLATION.with(|active| active.replace(Some(ctx)));
	TranslationGuard { previous }
}

/// The translation context active on the current thread, if any
pub fn active_translation() -> Option<Arc<TranslationContext>> {
	ACTIVE_TRANSLATION.with(|active| active.borrow().clone())
}

/// Translate `message` with the active context
///
/// Returns the message unchanged when no context is active or no catalog
/// knows it.
pub fn gettext(message: &str) -> String {
	ACTIVE_TRANSLATION.with(|active| match active.borrow().as_deref() {
		Some(ctx) => match ctx.translate(message) {
			Some(translation) => translation.to_string(),
			None => {
				tracing::trace!(locale = %ctx.locale(), msgid = message, "no translation found");
				message.to_string()
			}
		},
		None => message.to_string(),
	})
}
