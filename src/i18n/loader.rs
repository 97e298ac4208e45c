//! Fluent bundle construction and message formatting.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use unic_langid::LanguageIdentifier;

/// Errors that can occur when loading translations.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("Invalid language identifier: {0}")]
    InvalidLanguage(String),

    #[error("Parse error in {language} resource: {message}")]
    ParseError { language: String, message: String },

    #[error("Resource conflict in {language}: {message}")]
    ResourceError { language: String, message: String },
}

/// Parse a Fluent source and build a bundle for it.
pub fn build_bundle(
    language_id: &str,
    source: &str,
) -> Result<FluentBundle<FluentResource>, I18nError> {
    let langid: LanguageIdentifier = language_id
        .parse()
        .map_err(|_| I18nError::InvalidLanguage(language_id.to_string()))?;

    let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
        I18nError::ParseError {
            language: language_id.to_string(),
            message: format!("{:?}", errors),
        }
    })?;

    let mut bundle = FluentBundle::new(vec![langid]);
    // Unicode isolation marks would end up inside the row text.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::ResourceError {
            language: language_id.to_string(),
            message: format!("{:?}", errors),
        })?;

    Ok(bundle)
}

/// Format a message, or `None` when the bundle has no value for `key`.
pub fn format_message(
    bundle: &FluentBundle<FluentResource>,
    key: &str,
    args: Option<&FluentArgs>,
) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;
    let mut errors = Vec::new();
    let text = bundle.format_pattern(pattern, args, &mut errors);
    if !errors.is_empty() {
        tracing::debug!("Formatting '{}' reported {:?}", key, errors);
    }
    Some(text.into_owned())
}
