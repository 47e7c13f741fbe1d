use log::{info, warn};

use crate::constants::{REDIRECT_DELAY_MS, REDIRECT_URL};
use crate::timer::{Clock, Timeout};

/// Opens an external link.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> std::io::Result<()>;
}

/// Opens links in the system browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Message popup shown for a fixed delay before redirecting to a chat link.
///
/// Shares nothing with the carousel.
#[derive(Debug)]
pub struct RedirectPopup {
    url: String,
    delay_ms: u64,
    clock: Clock,
    pending: Option<Timeout>,
    popup_visible: bool,
    overlay_visible: bool,
}

impl Default for RedirectPopup {
    fn default() -> Self {
        Self::new(REDIRECT_URL, REDIRECT_DELAY_MS)
    }
}

impl RedirectPopup {
    pub fn new(url: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            url: url.into(),
            delay_ms,
            clock: Clock::new(),
            pending: None,
            popup_visible: false,
            overlay_visible: false,
        }
    }

    /// Shows the popup and overlay and schedules the redirect.
    pub fn trigger(&mut self) {
        self.popup_visible = true;
        self.overlay_visible = true;
        self.pending = Some(self.clock.timeout(self.delay_ms));
        info!("Redirecting to {} in {} ms", self.url, self.delay_ms);
    }

    /// Lets `dt_ms` pass; hides everything and opens the link when due.
    /// Returns true if the link was opened during this call.
    pub fn update(&mut self, dt_ms: u64, opener: &mut impl UrlOpener) -> bool {
        self.clock.advance_to(self.clock.now_ms() + dt_ms);

        match self.pending {
            Some(timeout) if timeout.is_due(self.clock.now_ms()) => {
                self.pending = None;
                self.popup_visible = false;
                self.overlay_visible = false;
                if let Err(e) = opener.open(&self.url) {
                    warn!("Failed to open {}: {}", self.url, e);
                }
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        opened: Vec<String>,
        fail: bool,
    }

    impl UrlOpener for Recorder {
        fn open(&mut self, url: &str) -> std::io::Result<()> {
            self.opened.push(url.to_string());
            if self.fail {
                Err(std::io::Error::other("no browser"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn redirects_once_after_delay() {
        let mut popup = RedirectPopup::default();
        let mut recorder = Recorder::default();

        popup.trigger();
        assert!(popup.popup_visible());
        assert!(popup.overlay_visible());

        assert!(!popup.update(3499, &mut recorder));
        assert!(popup.popup_visible());

        assert!(popup.update(1, &mut recorder));
        assert!(!popup.popup_visible());
        assert!(!popup.overlay_visible());
        assert_eq!(recorder.opened, vec![REDIRECT_URL.to_string()]);

        assert!(!popup.update(10_000, &mut recorder));
        assert_eq!(recorder.opened.len(), 1);
    }

    #[test]
    fn nothing_happens_without_trigger() {
        let mut popup = RedirectPopup::default();
        let mut recorder = Recorder::default();
        assert!(!popup.update(10_000, &mut recorder));
        assert!(recorder.opened.is_empty());
    }

    #[test]
    fn retrigger_rearms_the_delay() {
        let mut popup = RedirectPopup::new("https://example.com", 1000);
        let mut recorder = Recorder::default();
        popup.trigger();
        popup.update(800, &mut recorder);
        popup.trigger();
        assert!(!popup.update(800, &mut recorder));
        assert!(popup.update(200, &mut recorder));
        assert_eq!(recorder.opened, vec!["https://example.com".to_string()]);
    }

    #[test]
    fn opener_failure_is_not_fatal() {
        let mut popup = RedirectPopup::new("https://example.com", 10);
        let mut recorder = Recorder { fail: true, ..Default::default() };
        popup.trigger();
        assert!(popup.update(10, &mut recorder));
        assert!(!popup.is_pending());
        assert!(!popup.popup_visible());
    }
}
