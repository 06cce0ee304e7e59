#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Undefined field helper: {0}")]
	UnknownHelper(String),
	#[error("Field helper {selector} expects argument {position}: {expected}")]
	MissingArgument {
		selector: String,
		position: usize,
		expected: &'static str,
	},
	#[error("Invalid label suppression pattern: {0}")]
	InvalidPattern(#[from] regex::Error),
	#[error("Render error: {0}")]
	Render(String),
}

pub type FormResult<T> = Result<T, FormError>;
