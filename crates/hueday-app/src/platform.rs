//! Platform clipboard and favicon backends.

use hueday_core::{Clipboard, ClipboardError, Favicon, FaviconPainter, HexColor};

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

#[cfg(target_arch = "wasm32")]
pub use web::*;

/// Create a platform-appropriate clipboard.
pub fn create_clipboard() -> Box<dyn Clipboard> {
    #[cfg(all(feature = "native", not(target_arch = "wasm32")))]
    {
        Box::new(SystemClipboard::default())
    }
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserClipboard)
    }
    #[cfg(all(not(feature = "native"), not(target_arch = "wasm32")))]
    {
        log::warn!("No clipboard backend available");
        Box::new(hueday_core::NoopClipboard)
    }
}

fn render_favicon(color: &HexColor) -> Option<Favicon> {
    match Favicon::render(*color) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::debug!("Failed to render favicon for {}: {}", color, e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use std::sync::Arc;
    use winit::window::{Icon, Window};

    /// System clipboard via arboard.
    ///
    /// The handle is kept open: on X11 the copied text lives only as long
    /// as its owner.
    #[cfg(feature = "native")]
    #[derive(Default)]
    pub struct SystemClipboard {
        clipboard: Option<arboard::Clipboard>,
    }

    #[cfg(feature = "native")]
    impl Clipboard for SystemClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.clipboard.is_none() {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError(format!("Failed to access clipboard: {}", e)))?;
                self.clipboard = Some(clipboard);
            }
            let Some(clipboard) = self.clipboard.as_mut() else {
                return Err(ClipboardError("Clipboard unavailable".to_string()));
            };
            clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError(e.to_string()))?;
            log::info!("Copied {} to clipboard", text);
            Ok(())
        }
    }

    /// Uses the window icon as the favicon.
    pub struct WindowIconPainter {
        window: Arc<Window>,
    }

    impl WindowIconPainter {
        pub fn new(window: Arc<Window>) -> Self {
            Self { window }
        }
    }

    impl FaviconPainter for WindowIconPainter {
        fn paint(&mut self, color: &HexColor) {
            let Some(favicon) = render_favicon(color) else {
                return;
            };
            match Icon::from_rgba(favicon.rgba, favicon.size, favicon.size) {
                Ok(icon) => self.window.set_window_icon(Some(icon)),
                Err(e) => log::debug!("Failed to build window icon: {}", e),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use wasm_bindgen::JsValue;

    /// `navigator.clipboard`, written without waiting on the promise.
    pub struct BrowserClipboard;

    impl Clipboard for BrowserClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            let window =
                web_sys::window().ok_or_else(|| ClipboardError("No window".to_string()))?;
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("Clipboard write rejected: {:?}", e);
                }
            });
            Ok(())
        }
    }

    /// Replaces the page's `<link rel="icon">`.
    #[derive(Default)]
    pub struct DomFaviconPainter;

    impl DomFaviconPainter {
        fn install(uri: &str) -> Result<(), JsValue> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| JsValue::from_str("No document"))?;
            let head = document
                .head()
                .ok_or_else(|| JsValue::from_str("No <head>"))?;

            let link = match document.query_selector("link[rel*='icon']")? {
                Some(link) => link,
                None => document.create_element("link")?,
            };
            link.set_attribute("rel", "icon")?;
            link.set_attribute("type", "image/png")?;
            link.set_attribute("href", uri)?;
            head.append_child(&link)?;
            Ok(())
        }
    }

    impl FaviconPainter for DomFaviconPainter {
        fn paint(&mut self, color: &HexColor) {
            let Some(favicon) = render_favicon(color) else {
                return;
            };
            if let Err(e) = Self::install(&favicon.data_uri()) {
                log::debug!("Failed to install favicon: {:?}", e);
            }
        }
    }
}
