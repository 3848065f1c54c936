use gtk4::glib;
use gtk4::prelude::{GtkWindowExt as _, WidgetExt as _};
use webkit6::prelude::*;
use webkit6::WebView;

use crate::window::{SizeHint, Toolkit, Webview, WebviewError};

/// GTK 4 + WebKitGTK backend.
pub struct Gtk;

impl Toolkit for Gtk {
    type Window = Browser;

    fn create(&self, debug: bool) -> Result<Browser, WebviewError> {
        gtk4::init().map_err(|e| WebviewError::CreationFailed(e.to_string()))?;
        Ok(Browser::new(debug))
    }
}

pub struct Browser {
    window: gtk4::Window,
    webview: WebView,
    main_loop: glib::MainLoop,
}

impl Browser {
    fn new(debug: bool) -> Self {
        let webview = WebView::new();
        if let Some(settings) = WebViewExt::settings(&webview) {
            settings.set_enable_developer_extras(debug);
        }
        webview.set_vexpand(true);
        webview.set_hexpand(true);

        let window = gtk4::Window::new();
        window.set_child(Some(&webview));

        let main_loop = glib::MainLoop::new(None, false);
        window.connect_close_request(glib::clone!(
            #[strong]
            main_loop,
            move |_| {
                main_loop.quit();
                glib::Propagation::Proceed
            }
        ));

        Browser {
            window,
            webview,
            main_loop,
        }
    }
}

impl Webview for Browser {
    fn set_title(&mut self, title: &str) {
        self.window.set_title(Some(title));
    }

    fn set_size(&mut self, width: i32, height: i32, hint: SizeHint) {
        match hint {
            SizeHint::None => {
                self.window.set_resizable(true);
                self.window.set_default_size(width, height);
            }
            SizeHint::Min => {
                self.window.set_resizable(true);
                self.window.set_size_request(width, height);
            }
            SizeHint::Max => {
                // GTK 4 windows have no maximum size.
                log::warn!(
                    "max size hint is not supported, using {}x{} as the initial size",
                    width,
                    height
                );
                self.window.set_resizable(true);
                self.window.set_default_size(width, height);
            }
            SizeHint::Fixed => {
                self.window.set_default_size(width, height);
                self.window.set_resizable(false);
            }
        }
    }

    fn navigate(&mut self, url: &str) {
        self.webview.load_uri(url);
    }

    fn run(&mut self) {
        self.window.present();
        self.webview.grab_focus();
        self.main_loop.run();
    }

    fn destroy(&mut self) {
        if self.main_loop.is_running() {
            self.main_loop.quit();
        }
        self.window.destroy();
    }
}
