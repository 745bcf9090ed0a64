use super::error::HistoryError;

/// The two capabilities the navigator needs from its host.
pub trait History {
    /// Make `path` the visible location without reloading the page.
    fn push(&mut self, path: &str) -> Result<(), HistoryError>;

    /// The visible location, relative to any base the history applies.
    fn location(&self) -> String;
}

/// History kept in memory. Used off the browser and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Drop the newest entry, like the browser's back button.
    /// The first entry is never removed.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) -> Result<(), HistoryError> {
        self.entries.push(path.to_owned());
        Ok(())
    }

    fn location(&self) -> String {
        self.entries.last().cloned().unwrap_or_else(|| "/".to_owned())
    }
}

/// `base` with surrounding slashes normalised to `/base`, or empty for root.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Browser pathname -> application path. Paths outside the base are kept as-is
/// so they fall through to the not-found view.
pub fn strip_base<'a>(base: &str, pathname: &'a str) -> &'a str {
    if base.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => pathname,
    }
}

/// Application path -> absolute browser URL path under `base`.
pub fn join_base(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(feature = "web")]
pub use browser::BrowserHistory;

#[cfg(feature = "web")]
mod browser {
    use wasm_bindgen::JsValue;

    use super::{History, join_base, normalize_base, strip_base};
    use crate::router::error::HistoryError;

    /// The window's History API, optionally mounted under a base path.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct BrowserHistory {
        base: String,
    }

    impl BrowserHistory {
        pub fn with_base(base: &str) -> Self {
            Self {
                base: normalize_base(base),
            }
        }

        pub fn base(&self) -> &str {
            &self.base
        }
    }

    impl History for BrowserHistory {
        fn push(&mut self, path: &str) -> Result<(), HistoryError> {
            let window = web_sys::window().ok_or(HistoryError::NoWindow)?;
            let history = window.history().map_err(|e| rejected(path, e))?;
            let url = join_base(&self.base, path);
            history
                .push_state_with_url(&JsValue::NULL, "", Some(&url))
                .map_err(|e| rejected(path, e))
        }

        fn location(&self) -> String {
            let pathname = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned());
            strip_base(&self.base, &pathname).to_owned()
        }
    }

    fn rejected(path: &str, err: JsValue) -> HistoryError {
        HistoryError::PushRejected {
            path: path.to_owned(),
            reason: format!("{err:?}"),
        }
    }
}
