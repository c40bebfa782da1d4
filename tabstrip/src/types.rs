use alloc::string::String;
use alloc::vec::Vec;

/// Stable tab identity. Must be unique within one [`TabList`].
pub type TabId = String;

/// An ordered list of tabs; order is left-to-right on screen.
pub type TabList = Vec<TabRecord>;

/// The icon shown in front of a tab title.
///
/// A tab shows either an image or a style class, never both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Favicon {
    /// An image source handle (URL, asset path, texture key, ...).
    Image(String),
    /// A symbolic style class the renderer resolves itself.
    Class(String),
}

/// One tab as described by the host.
///
/// Two records are equal when every field is equal; this is what decides whether a render has
/// anything to do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabRecord {
    pub id: TabId,
    pub title: String,
    pub favicon: Option<Favicon>,
    /// At most one tab per list should set this.
    pub active: bool,
    /// Whether the close affordance is drawn. Defaults to `true`.
    pub close_visible: bool,
}

impl TabRecord {
    pub fn new(id: impl Into<TabId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            favicon: None,
            active: false,
            close_visible: true,
        }
    }

    pub fn with_favicon(mut self, favicon: Option<Favicon>) -> Self {
        self.favicon = favicon;
        self
    }

    pub fn with_favicon_image(self, src: impl Into<String>) -> Self {
        self.with_favicon(Some(Favicon::Image(src.into())))
    }

    pub fn with_favicon_class(self, class: impl Into<String>) -> Self {
        self.with_favicon(Some(Favicon::Class(class.into())))
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_close_visible(mut self, close_visible: bool) -> Self {
        self.close_visible = close_visible;
        self
    }

    /// The part of the record the strip draws for this tab.
    pub fn attributes(&self) -> TabAttributes<'_> {
        TabAttributes {
            id: &self.id,
            title: &self.title,
            favicon: self.favicon.as_ref(),
            close_visible: self.close_visible,
        }
    }
}

/// A borrowed view of what a strip needs to draw one tab.
///
/// `active` is not part of it; activation runs as its own phase after all upserts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabAttributes<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub favicon: Option<&'a Favicon>,
    pub close_visible: bool,
}

/// Pointer position of a context-menu request, in strip coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextMenuEvent {
    pub x: i32,
    pub y: i32,
}

/// Position of `id` in `tabs`, if present.
pub fn index_of(tabs: &[TabRecord], id: &str) -> Option<usize> {
    tabs.iter().position(|t| t.id == id)
}
