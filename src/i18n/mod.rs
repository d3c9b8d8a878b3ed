//! Internationalization module
//!
//! Loads one Fluent bundle per language from a directory tree laid out as
//! `<translations_dir>/<language>/<file>` and resolves message keys against
//! them, falling back to a default language when a language is missing.

pub mod args;
pub mod catalog;

pub use args::ArgValue;
pub use catalog::Language;

use crate::core::{Config, Error, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::fs;

/// Returned by [`Translator::lookup`] whenever no translation can be produced
pub const TRANSLATION_FAILED: &str = "An error has ocurred while trying to translate the message";

type Bundle = FluentBundle<FluentResource>;

/// Per-language Fluent bundles with a default-language fallback
pub struct Translator {
    bundles: RwLock<HashMap<Language, Arc<Bundle>>>,
    default_language: Language,
    use_isolating: bool,
}

impl Translator {
    /// Create an empty translator
    pub fn new(default_language: Language) -> Self {
        Self {
            bundles: RwLock::new(HashMap::new()),
            default_language,
            use_isolating: false,
        }
    }

    /// Create an empty translator from the configuration.
    ///
    /// A default language of `"auto"` is detected from the environment and
    /// falls back to `en_US`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = &config.translator;
        let default_language = if settings.default_language == "auto" {
            Language::detect_system().unwrap_or(Language::EN_US)
        } else {
            settings.default_language.parse()?
        };

        Ok(Self::new(default_language).with_isolating(settings.use_isolating))
    }

    /// Wrap placeables in Unicode isolation marks (FSI/PDI).
    ///
    /// Applies to bundles built by subsequent calls to [`Translator::init`].
    pub fn with_isolating(mut self, use_isolating: bool) -> Self {
        self.use_isolating = use_isolating;
        self
    }

    /// Get the fallback language
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Load every language directory found under `translations_dir`.
    ///
    /// Entries that cannot be inspected, directory names outside the catalog
    /// and unreadable files are skipped with a warning. An unreadable root,
    /// an unlistable language directory or a resource that fails to parse or
    /// merge aborts the load; languages stored before the failure are kept.
    ///
    /// May be called again to reload: languages found are replaced, others
    /// are left untouched.
    pub async fn init(&self, translations_dir: impl AsRef<Path>) -> Result<()> {
        let root = translations_dir.as_ref();
        let entries = list_dir(root).await.map_err(|source| Error::InvalidTranslationsDirectory {
            path: root.display().to_string(),
            source,
        })?;

        for entry in entries {
            let path = root.join(&entry);
            if let Err(e) = fs::metadata(&path).await {
                warn!("Could not read data from {}: {}", path.display(), e);
                continue;
            }

            let Some(language) = entry.to_str().and_then(|name| name.parse::<Language>().ok()) else {
                warn!(
                    "Omitting {} as it is not a valid language identifier",
                    entry.to_string_lossy()
                );
                continue;
            };

            debug!("Loading translations for {}", language);
            let bundle = self.build_bundle(language, &path).await?;
            self.write_bundles().insert(language, Arc::new(bundle));
        }

        info!("Successfully loaded {} language(s)", self.read_bundles().len());
        Ok(())
    }

    /// Resolve and format a message.
    ///
    /// Never fails: a missing language falls back to the default language and
    /// any other miss yields [`TRANSLATION_FAILED`].
    pub fn lookup(&self, key: &str, language: Language, args: Option<&FluentArgs<'_>>) -> String {
        let bundle = match self.bundle(language) {
            Some(bundle) => bundle,
            None => {
                warn!(
                    "Could not find translations for {}, falling back to {}",
                    language, self.default_language
                );
                match self.bundle(self.default_language) {
                    Some(bundle) => bundle,
                    None => return TRANSLATION_FAILED.to_string(),
                }
            }
        };

        let Some(pattern) = bundle.get_message(key).and_then(|message| message.value()) else {
            return TRANSLATION_FAILED.to_string();
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            debug!("Formatting {} for {} reported: {}", key, language, join_errors(&errors));
        }
        value.into_owned()
    }

    /// Check whether `language` itself defines `key` (no fallback)
    pub fn has_message(&self, key: &str, language: Language) -> bool {
        self.bundle(language).map_or(false, |bundle| bundle.has_message(key))
    }

    /// Check whether a bundle is loaded for `language`
    pub fn is_loaded(&self, language: Language) -> bool {
        self.read_bundles().contains_key(&language)
    }

    /// Get the loaded languages, sorted by code
    pub fn loaded_languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.read_bundles().keys().copied().collect();
        languages.sort();
        languages
    }

    async fn build_bundle(&self, language: Language, dir: &Path) -> Result<Bundle> {
        let files = list_dir(dir).await.map_err(|source| Error::InvalidLanguageDirectory {
            language: language.to_string(),
            source,
        })?;

        let mut bundle = Bundle::new_concurrent(vec![language.langid()]);
        bundle.set_use_isolating(self.use_isolating);

        for file in files {
            let path = dir.join(&file);
            let data = match fs::read(&path).await {
                Ok(data) => data,
                Err(e) => {
                    warn!("Could not read file {}: {}", path.display(), e);
                    continue;
                }
            };

            let source = String::from_utf8_lossy(&data).into_owned();
            let resource = FluentResource::try_new(source)
                .map_err(|(_, errors)| resource_error(&path, &errors))?;
            bundle
                .add_resource(resource)
                .map_err(|errors| resource_error(&path, &errors))?;
        }

        Ok(bundle)
    }

    fn bundle(&self, language: Language) -> Option<Arc<Bundle>> {
        self.read_bundles().get(&language).cloned()
    }

    // Guards are only held for single map operations, so a poisoned lock
    // still protects a consistent map.
    fn read_bundles(&self) -> RwLockReadGuard<'_, HashMap<Language, Arc<Bundle>>> {
        self.bundles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_bundles(&self) -> RwLockWriteGuard<'_, HashMap<Language, Arc<Bundle>>> {
        self.bundles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// List directory entry names, sorted for a deterministic load order
async fn list_dir(path: &Path) -> io::Result<Vec<OsString>> {
    let mut reader = fs::read_dir(path).await?;
    let mut names = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

fn resource_error<E: fmt::Display>(path: &Path, errors: &[E]) -> Error {
    Error::Resource {
        file: path.display().to_string(),
        errors: errors.iter().map(ToString::to_string).collect(),
    }
}

fn join_errors<E: fmt::Display>(errors: &[E]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
