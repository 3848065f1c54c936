use serde::Deserialize;
use thiserror::Error;

/// How the toolkit should treat the requested width and height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeHint {
    /// Initial size only; the user may resize freely.
    #[default]
    None,
    /// Minimum size.
    Min,
    /// Maximum size.
    Max,
    /// Window cannot be resized.
    Fixed,
}

#[derive(Error, Debug)]
pub enum WebviewError {
    #[error("web view creation failed: {0}")]
    CreationFailed(String),
}

/// The external GUI toolkit: hands out web view windows.
pub trait Toolkit {
    type Window: Webview;

    fn create(&self, debug: bool) -> Result<Self::Window, WebviewError>;
}

/// A live native window hosting a web view.
pub trait Webview {
    fn set_title(&mut self, title: &str);
    fn set_size(&mut self, width: i32, height: i32, hint: SizeHint);
    fn navigate(&mut self, url: &str);
    /// Blocks until the window is closed or the toolkit stops its loop.
    fn run(&mut self);
    fn destroy(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Configuring,
    Running,
    Terminated,
}

/// Owns a window for the length of a scope and destroys it exactly once
/// when dropped.
pub struct WindowGuard<W: Webview> {
    window: W,
    phase: Phase,
}

impl<W: Webview> WindowGuard<W> {
    pub fn new(window: W) -> Self {
        WindowGuard {
            window,
            phase: Phase::Configuring,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_title(&mut self, title: &str) {
        log::debug!("set_title({:?})", title);
        self.window.set_title(title);
    }

    pub fn set_size(&mut self, width: i32, height: i32, hint: SizeHint) {
        log::debug!("set_size({}, {}, {:?})", width, height, hint);
        self.window.set_size(width, height, hint);
    }

    pub fn navigate(&mut self, url: &str) {
        log::debug!("navigate({:?})", url);
        self.window.navigate(url);
    }

    pub fn run(&mut self) {
        self.transition(Phase::Running);
        self.window.run();
        self.transition(Phase::Terminated);
    }

    fn transition(&mut self, next: Phase) {
        log::debug!("window phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

impl<W: Webview> Drop for WindowGuard<W> {
    fn drop(&mut self) {
        log::debug!("destroying window in phase {:?}", self.phase);
        self.window.destroy();
    }
}
