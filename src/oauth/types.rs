use tracing::info;

use crate::errors::ConnectorResult;

/// Inner size of the browser window the popup is centred on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupWindow {
    pub url: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub left: f64,
    pub top: f64,
}

impl PopupWindow {
    /// Centres a `width` x `height` window on `viewport`.
    pub fn centered(
        url: impl Into<String>,
        name: impl Into<String>,
        width: u32,
        height: u32,
        viewport: Viewport,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            width,
            height,
            left: viewport.width / 2.0 - f64::from(width) / 2.0,
            top: viewport.height / 2.0 - f64::from(height) / 2.0,
        }
    }

    /// Window features string, e.g. `width=600, height=600, left=212, top=84`.
    pub fn features(&self) -> String {
        format!(
            "width={}, height={}, left={}, top={}",
            self.width, self.height, self.left, self.top
        )
    }
}

/// Host seam that actually shows a window. Completion of whatever the window
/// does is not reported back.
pub trait WindowOpener {
    fn open_window(&self, popup: &PopupWindow) -> ConnectorResult<()>;
}

/// Opens the popup URL in the system browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl WindowOpener for BrowserOpener {
    fn open_window(&self, popup: &PopupWindow) -> ConnectorResult<()> {
        info!(url = %popup.url, name = %popup.name, "Opening browser window");
        open::that(&popup.url)?;
        Ok(())
    }
}
