//! Internationalization module for localized labels and unit abbreviations.
//!
//! Translations are Fluent resources compiled into the binary. A
//! [`Localizer`] is created for the active language and passed explicitly
//! to everything that produces user-visible text.

pub mod loader;

use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

pub use loader::I18nError;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
}

impl Language {
    /// Get the language identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Italian => "Italiano",
        }
    }

    /// Get all supported languages.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Spanish,
            Language::French,
            Language::German,
            Language::Italian,
        ]
    }

    /// Pick the best supported language for a locale string such as
    /// `de-AT` or `fr_CA.UTF-8`. Unknown locales resolve to English.
    pub fn negotiate(locale: &str) -> Self {
        let locale = locale.split('.').next().unwrap_or(locale);
        let requested: Vec<LanguageIdentifier> = locale.parse().into_iter().collect();

        let available: Vec<LanguageIdentifier> = Language::all()
            .iter()
            .filter_map(|lang| lang.id().parse().ok())
            .collect();
        let default = available.first();

        negotiate_languages(
            &requested,
            &available,
            default,
            NegotiationStrategy::Filtering,
        )
        .first()
        .and_then(|langid| Self::from_langid(langid))
        .unwrap_or_default()
    }

    fn from_langid(langid: &LanguageIdentifier) -> Option<Self> {
        let id = langid.to_string();
        Language::all().iter().copied().find(|lang| lang.id() == id)
    }

    /// Fluent source for this language.
    fn ftl_source(&self) -> &'static str {
        match self {
            Language::English => include_str!("locales/en-US/main.ftl"),
            Language::Spanish => include_str!("locales/es/main.ftl"),
            Language::French => include_str!("locales/fr/main.ftl"),
            Language::German => include_str!("locales/de/main.ftl"),
            Language::Italian => include_str!("locales/it/main.ftl"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Detect the system locale and return the best matching language.
pub fn detect_system_locale() -> Language {
    sys_locale::get_locale()
        .map(|locale| Language::negotiate(&locale))
        .unwrap_or_default()
}

/// Translation lookups for one language with English fallback.
pub struct Localizer {
    language: Language,
    bundle: FluentBundle<FluentResource>,
    /// English bundle, absent when the active language is English
    fallback: Option<FluentBundle<FluentResource>>,
}

impl Localizer {
    /// Create a localizer for the given language.
    pub fn new(language: Language) -> Result<Self, I18nError> {
        let bundle = loader::build_bundle(language.id(), language.ftl_source())?;
        let fallback = if language == Language::English {
            None
        } else {
            let english = Language::English;
            Some(loader::build_bundle(english.id(), english.ftl_source())?)
        };

        Ok(Self {
            language,
            bundle,
            fallback,
        })
    }

    /// Localizer for English.
    pub fn english() -> Result<Self, I18nError> {
        Self::new(Language::English)
    }

    /// Get the active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate a message by key.
    pub fn text(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translate a message with Fluent arguments.
    pub fn text_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    /// Swap the `.` of a formatted number for the language's decimal
    /// separator.
    pub fn decimal(&self, number: &str) -> String {
        let separator = self.text("number-decimal-separator");
        if separator == "." {
            number.to_string()
        } else {
            number.replacen('.', &separator, 1)
        }
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let bundles = std::iter::once(&self.bundle).chain(self.fallback.as_ref());
        for bundle in bundles {
            if let Some(text) = loader::format_message(bundle, key, args) {
                return text;
            }
        }

        tracing::warn!("Missing translation for '{}' ({})", key, self.language.id());
        key.to_string()
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("language", &self.language)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
