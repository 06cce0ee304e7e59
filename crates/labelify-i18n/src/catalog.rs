//! Message catalog for storing translations

use crate::I18nError;
use std::collections::HashMap;

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use labelify_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("Submit", "Envoyer");
///
/// assert_eq!(catalog.get("Submit"), Some(&"Envoyer".to_string()));
/// assert_eq!(catalog.get("Cancel"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Load a catalog from a JSON object mapping messages to translations
	///
	/// # Example
	/// ```
	/// use labelify_i18n::MessageCatalog;
	///
	/// let catalog = MessageCatalog::from_json("de", r#"{"Name": "Name", "Submit": "Absenden"}"#).unwrap();
	/// assert_eq!(catalog.get("Submit"), Some(&"Absenden".to_string()));
	/// assert_eq!(catalog.len(), 2);
	/// ```
	pub fn from_json(locale: &str, json: &str) -> Result<Self, I18nError> {
		let value: serde_json::Value =
			serde_json::from_str(json).map_err(|e| I18nError::InvalidCatalog(e.to_string()))?;
		let object = value.as_object().ok_or_else(|| {
			I18nError::InvalidCatalog("expected an object of message translations".to_string())
		})?;

		let mut catalog = Self::new(locale);
		for (message, translation) in object {
			let translation = translation.as_str().ok_or_else(|| {
				I18nError::InvalidCatalog(format!("translation for '{}' is not a string", message))
			})?;
			catalog.add_translation(message.as_str(), translation);
		}
		Ok(catalog)
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Add a simple translation (alias for add_translation)
	pub fn add(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.add_translation(message, translation);
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}
