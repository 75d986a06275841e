use crate::rules::IgnoreMatch;
use crate::rules::IgnoreRules;
use crate::spacing::Spacing;
use crate::static_config::StaticConfig;

use parking_lot::RwLock;
use std::sync::Arc;

/// The configuration policy consulted for every enumerated top-level window.
///
/// Constructed once at startup and passed by reference to the window filter
/// and the layout engine; it performs no enumeration, no OS calls and no
/// layout math. The exclusion lists and spacing are immutable after
/// construction. The user-config slot assumes a single writer (the external
/// configuration loader, invoked once near startup) and any number of
/// readers thereafter; concurrent writers are last-write-wins.
#[derive(Debug, Default)]
pub struct Policy {
    rules: IgnoreRules,
    spacing: Spacing,
    user_config: RwLock<Option<Arc<StaticConfig>>>,
}

impl Policy {
    #[must_use]
    pub fn new(rules: IgnoreRules, spacing: Spacing) -> Self {
        Self {
            rules,
            spacing,
            user_config: RwLock::new(None),
        }
    }

    /// Resolves a policy from a loaded document, falling back to the
    /// built-in defaults for anything the document does not set.
    #[must_use]
    pub fn from_config(config: &StaticConfig) -> Self {
        Self::new(config.ignore_rules(), config.spacing())
    }

    /// Returns `true` if a window with this class name or owning process
    /// name should be left to the operating system instead of being tiled.
    #[must_use]
    pub fn should_ignore(&self, window_class: &str, process_name: &str) -> bool {
        self.rules.should_ignore(window_class, process_name)
    }

    /// Returns the identifier which excludes this window from tiling, if any.
    #[must_use]
    pub fn ignore_match(&self, window_class: &str, process_name: &str) -> Option<IgnoreMatch> {
        self.rules.ignore_match(window_class, process_name)
    }

    #[must_use]
    pub const fn spacing(&self) -> Spacing {
        self.spacing
    }

    #[must_use]
    pub const fn rules(&self) -> &IgnoreRules {
        &self.rules
    }

    /// Stores the externally loaded configuration. Expected to be called
    /// once, near startup, by the configuration loader.
    pub fn set_user_config(&self, config: Arc<StaticConfig>) {
        *self.user_config.write() = Option::from(config);
    }

    /// The externally loaded configuration, or `None` until the loader has
    /// supplied one.
    #[must_use]
    pub fn user_config(&self) -> Option<Arc<StaticConfig>> {
        self.user_config.read().clone()
    }
}
