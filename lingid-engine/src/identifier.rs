//! Language identification component
//!
//! [`LanguageIdentifier`] owns a configuration and the classifier built from
//! it. The classifier is built lazily on first use and then shared as an
//! `Arc` snapshot: every call clones the current configuration and classifier
//! and works with them until it returns, so a rebuild or a configuration
//! change never disturbs calls already in flight.

use crate::{
    dispatcher::{DispatchReport, Dispatcher},
    document::Document,
    error::Result,
    options::RunOptions,
};
use lingid_core::{Classifier, Error as CoreError, IdentifierConfig};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration and the classifier built from it, replaced together
#[derive(Debug, Clone)]
struct Slot {
    config: Arc<IdentifierConfig>,
    classifier: Option<Arc<Classifier>>,
}

impl Slot {
    fn loaded(&self) -> Option<(Arc<IdentifierConfig>, Arc<Classifier>)> {
        self.classifier
            .as_ref()
            .map(|classifier| (Arc::clone(&self.config), Arc::clone(classifier)))
    }
}

/// Classifies documents or annotations and writes the language as a feature
#[derive(Debug)]
pub struct LanguageIdentifier {
    /// Held only long enough to clone or replace its contents
    slot: RwLock<Slot>,
    /// Serializes builds so that concurrent first calls build once
    build_lock: Mutex<()>,
}

impl LanguageIdentifier {
    /// Create a component; the classifier is built on first use
    pub fn new(config: IdentifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_slot(Arc::new(config), None))
    }

    /// Create a component around a classifier that is already built
    pub fn with_classifier(config: IdentifierConfig, classifier: Arc<Classifier>) -> Result<Self> {
        config.validate()?;
        let mode = config.text_mode()?;
        if classifier.mode() != mode {
            return Err(CoreError::Configuration(format!(
                "classifier is built for {} text but the configuration asks for {}",
                classifier.mode(),
                mode
            ))
            .into());
        }
        Ok(Self::from_slot(Arc::new(config), Some(classifier)))
    }

    fn from_slot(config: Arc<IdentifierConfig>, classifier: Option<Arc<Classifier>>) -> Self {
        Self {
            slot: RwLock::new(Slot { config, classifier }),
            build_lock: Mutex::new(()),
        }
    }

    /// Build the classifier unless one is already installed
    pub fn init(&self) -> Result<Arc<Classifier>> {
        self.snapshot().map(|(_, classifier)| classifier)
    }

    /// Discard the classifier and build a new one from the configuration
    ///
    /// Calls already running keep the classifier they started with. If the
    /// build fails no classifier is installed afterwards and the next call
    /// tries again.
    pub fn reinit(&self) -> Result<Arc<Classifier>> {
        let _guard = self.build_lock.lock();
        log::info!("reinitializing language identifier");
        let config = Arc::clone(&self.slot.read().config);
        self.build_and_install(config)
    }

    /// Replace the configuration and rebuild the classifier from it
    ///
    /// An invalid configuration is rejected and nothing changes. Otherwise
    /// the new configuration is installed together with its classifier, or
    /// without one if the build fails, exactly as after [`reinit`].
    ///
    /// [`reinit`]: LanguageIdentifier::reinit
    pub fn reconfigure(&self, config: IdentifierConfig) -> Result<Arc<Classifier>> {
        config.validate()?;
        let _guard = self.build_lock.lock();
        log::info!("reconfiguring language identifier");
        self.build_and_install(Arc::new(config))
    }

    /// Installed classifier, without building one
    pub fn current(&self) -> Option<Arc<Classifier>> {
        self.slot.read().classifier.clone()
    }

    /// Create a second component with the same configuration that shares
    /// this component's classifier, building it first if needed
    pub fn share(&self) -> Result<Self> {
        let (config, classifier) = self.snapshot()?;
        Ok(Self::from_slot(config, Some(classifier)))
    }

    /// Current build-time configuration
    pub fn config(&self) -> Arc<IdentifierConfig> {
        Arc::clone(&self.slot.read().config)
    }

    /// Classify one document
    ///
    /// Fails only if the classifier cannot be built, in which case the
    /// document is left untouched. Per-target problems are in the report.
    pub fn execute(&self, document: &mut Document, options: &RunOptions) -> Result<DispatchReport> {
        let (config, classifier) = self.snapshot()?;
        let dispatcher = Dispatcher::new(&classifier, &config.language_feature_name);
        Ok(dispatcher.dispatch(document, options))
    }

    /// Classify many documents with one classifier snapshot
    ///
    /// Reports are returned in document order.
    pub fn execute_all(
        &self,
        documents: &mut [Document],
        options: &RunOptions,
    ) -> Result<Vec<DispatchReport>> {
        let (config, classifier) = self.snapshot()?;
        let dispatcher = Dispatcher::new(&classifier, &config.language_feature_name);
        log::debug!("classifying a batch of {} documents", documents.len());

        #[cfg(feature = "parallel")]
        let reports: Vec<DispatchReport> = documents
            .par_iter_mut()
            .map(|document| dispatcher.dispatch(document, options))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let reports: Vec<DispatchReport> = documents
            .iter_mut()
            .map(|document| dispatcher.dispatch(document, options))
            .collect();

        Ok(reports)
    }

    /// Configuration and classifier that belong together, building the
    /// classifier if none is installed
    fn snapshot(&self) -> Result<(Arc<IdentifierConfig>, Arc<Classifier>)> {
        if let Some(loaded) = self.slot.read().loaded() {
            return Ok(loaded);
        }

        let _guard = self.build_lock.lock();
        // Another caller may have finished a build while we waited
        let config = {
            let slot = self.slot.read();
            if let Some(loaded) = slot.loaded() {
                return Ok(loaded);
            }
            Arc::clone(&slot.config)
        };
        let classifier = self.build_and_install(Arc::clone(&config))?;
        Ok((config, classifier))
    }

    /// Caller must hold `build_lock`
    fn build_and_install(&self, config: Arc<IdentifierConfig>) -> Result<Arc<Classifier>> {
        let built = config.build_classifier().map(Arc::new);
        *self.slot.write() = Slot {
            config,
            classifier: built.as_ref().ok().cloned(),
        };
        built.map_err(Into::into)
    }
}
