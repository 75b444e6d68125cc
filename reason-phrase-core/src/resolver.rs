use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::PoisonError;

use crossbeam::sync::ShardedLock;

use crate::settings::ResolverSettings;
use crate::table;
use crate::traits::ReasonSource;

/// The first probe into the custom overlay is this far below the code.
const FIRST_SHIFT: i32 = 20;

/// The second probe is this far below the first one.
const SECOND_SHIFT: i32 = 220;

type Overlay = ShardedLock<HashMap<i32, String>>;

/// The outcome of resolving a status code to its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The code the text was actually found under, or the requested
    /// code if nothing matched.
    pub code: i32,

    /// The resolved text, empty when nothing matched.
    pub text: Cow<'static, str>,

    /// Whether any text was found.
    pub found: bool,
}

impl Resolution {
    /// A successful resolution under `code`.
    pub fn hit(code: i32, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            text: text.into(),
            found: true,
        }
    }

    /// An unsuccessful resolution of the requested `code`.
    pub fn miss(code: i32) -> Self {
        Self {
            code,
            text: Cow::Borrowed(""),
            found: false,
        }
    }
}

/// Resolves status codes to text using the built-in table and two
/// runtime overlays.
///
/// The global overlay replaces text for a code everywhere. The custom
/// overlay is only reached through the shifted probes of
/// [`StatusTextResolver::resolve`]: a custom entry keyed `k` answers for
/// responses sent as `k + 20` and `k + 240`.
pub struct StatusTextResolver {
    custom_rule_enabled: AtomicBool,
    global: Overlay,
    custom: Overlay,
}

impl Default for StatusTextResolver {
    fn default() -> Self {
        Self {
            custom_rule_enabled: AtomicBool::new(false),
            global: ShardedLock::new(HashMap::new()),
            custom: ShardedLock::new(HashMap::new()),
        }
    }
}

impl StatusTextResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a resolver with its flag and overlays preloaded from the
    /// given settings.
    pub fn with_settings(settings: &ResolverSettings) -> Self {
        let resolver = Self::default();
        resolver.set_enabled(settings.custom_rule_enabled);

        for (code, text) in settings.global_statuses.iter() {
            resolver.set_global_status(*code, text.clone());
        }

        for (code, text) in settings.custom_statuses.iter() {
            resolver.set_custom_status(*code, text.clone());
        }

        resolver
    }

    /// Gets the built-in phrase for a code, or an empty string if the
    /// code is not registered.
    ///
    /// This ignores both overlays.
    pub fn lookup(&self, code: i32) -> &'static str {
        table::lookup(code).unwrap_or("")
    }

    /// Adds or replaces the text for a code in the global overlay.
    ///
    /// This affects every subsequent resolution of `code`, including
    /// codes that have a built-in phrase.
    pub fn set_global_status(&self, code: i32, text: impl Into<String>) {
        let text = text.into();
        debug!("setting global status text {} -> {:?}", code, text);

        let mut global = self.global.write().unwrap_or_else(PoisonError::into_inner);
        global.insert(code, text);
    }

    /// Enables or disables the shifted custom lookup for responses.
    ///
    /// [`StatusTextResolver::resolve`] always probes the custom overlay;
    /// this flag is honoured by [`StatusTextResolver::response_text`].
    pub fn set_enabled(&self, enabled: bool) {
        debug!("custom status rule enabled: {}", enabled);
        self.custom_rule_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Whether the shifted custom lookup is enabled for responses.
    pub fn is_enabled(&self) -> bool {
        self.custom_rule_enabled.load(Ordering::SeqCst)
    }

    /// Adds or replaces the text for a code in the custom overlay.
    ///
    /// Avoid global entries at `code + 20` and `code + 240`, those would
    /// be matched before the shifted probe ever reaches this entry.
    pub fn set_custom_status(&self, code: i32, text: impl Into<String>) {
        let text = text.into();
        debug!("setting custom status text {} -> {:?}", code, text);

        let mut custom = self.custom.write().unwrap_or_else(PoisonError::into_inner);
        custom.insert(code, text);
    }

    /// The text for a code without any shifting: the global overlay
    /// first, then the built-in table.
    pub fn status_text(&self, code: i32) -> String {
        self.direct(code)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }

    /// Resolves a code to its text.
    ///
    /// The lookup order is:
    ///  1. the global overlay then the built-in table at `code`
    ///  2. the custom overlay at `code - 20`
    ///  3. the custom overlay at `code - 240`
    ///
    /// The returned code is the one the text was found under. On a miss
    /// the requested code is returned unchanged with empty text.
    pub fn resolve(&self, code: i32) -> Resolution {
        if let Some(text) = self.direct(code) {
            return Resolution::hit(code, text);
        }

        let first = code.checked_sub(FIRST_SHIFT);
        let second = first.and_then(|c| c.checked_sub(SECOND_SHIFT));

        let custom = self.custom.read().unwrap_or_else(PoisonError::into_inner);
        for shifted in first.into_iter().chain(second) {
            if let Some(text) = custom.get(&shifted) {
                trace!("status {} resolved through custom status {}", code, shifted);
                return Resolution::hit(shifted, text.clone());
            }
        }

        Resolution::miss(code)
    }

    /// The text a response with this code should carry.
    ///
    /// Goes through [`StatusTextResolver::resolve`] when the custom rule
    /// is enabled, otherwise only the global overlay and built-in table
    /// are consulted.
    pub fn response_text(&self, code: i32) -> Resolution {
        if self.is_enabled() {
            return self.resolve(code);
        }

        match self.direct(code) {
            Some(text) => Resolution::hit(code, text),
            None => Resolution::miss(code),
        }
    }

    fn direct(&self, code: i32) -> Option<Cow<'static, str>> {
        let global = self.global.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(text) = global.get(&code) {
            return Some(Cow::Owned(text.clone()));
        }

        table::lookup(code).map(Cow::Borrowed)
    }
}

impl ReasonSource for StatusTextResolver {
    fn response_text(&self, code: i32) -> Resolution {
        StatusTextResolver::response_text(self, code)
    }
}
