use alloc::string::String;
use alloc::sync::Arc;

use crate::{ContextMenuEvent, RemovalPolicy};

/// Fired with a tab id (`on_tab_active`, `on_tab_close`, `on_drag_begin`).
pub type TabCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Fired once per finished drag gesture: `(tab_id, from_index, to_index)`.
pub type ReorderCallback = Arc<dyn Fn(&str, usize, usize) + Send + Sync>;

/// Fired when a drag gesture ends, whether or not it moved anything.
pub type DragEndCallback = Arc<dyn Fn() + Send + Sync>;

pub type ContextMenuCallback = Arc<dyn Fn(&str, ContextMenuEvent) + Send + Sync>;

/// Host callbacks for user gestures on the strip.
///
/// Every callback is optional. Cloning is cheap: closures are held in `Arc`s.
#[derive(Clone, Default)]
pub struct Listeners {
    pub on_tab_active: Option<TabCallback>,
    pub on_tab_close: Option<TabCallback>,
    pub on_tab_reorder: Option<ReorderCallback>,
    pub on_drag_begin: Option<TabCallback>,
    pub on_drag_end: Option<DragEndCallback>,
    pub on_context_menu: Option<ContextMenuCallback>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_tab_active(mut self, f: Option<impl Fn(&str) + Send + Sync + 'static>) -> Self {
        self.on_tab_active = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_tab_close(mut self, f: Option<impl Fn(&str) + Send + Sync + 'static>) -> Self {
        self.on_tab_close = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_tab_reorder(
        mut self,
        f: Option<impl Fn(&str, usize, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_tab_reorder = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_begin(mut self, f: Option<impl Fn(&str) + Send + Sync + 'static>) -> Self {
        self.on_drag_begin = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_end(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_drag_end = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_context_menu(
        mut self,
        f: Option<impl Fn(&str, ContextMenuEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_context_menu = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("on_tab_active", &self.on_tab_active.is_some())
            .field("on_tab_close", &self.on_tab_close.is_some())
            .field("on_tab_reorder", &self.on_tab_reorder.is_some())
            .field("on_drag_begin", &self.on_drag_begin.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_context_menu", &self.on_context_menu.is_some())
            .finish()
    }
}

/// Configuration for [`crate::TabSync`].
#[derive(Clone, Debug, Default)]
pub struct TabSyncOptions {
    pub removal_policy: RemovalPolicy,
    pub listeners: Listeners,
}

impl TabSyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_removal_policy(mut self, removal_policy: RemovalPolicy) -> Self {
        self.removal_policy = removal_policy;
        self
    }

    pub fn with_listeners(mut self, listeners: Listeners) -> Self {
        self.listeners = listeners;
        self
    }
}

/// Presentation settings passed along with every render.
///
/// `T` is whatever the strip uses as toolbar content (see [`crate::TabStrip::Toolbar`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions<T = ()> {
    /// Whether tabs can be reordered by dragging.
    pub draggable: bool,
    pub dark_mode: bool,
    /// Extra style class for the strip container.
    pub class_name: Option<String>,
    /// Content pinned to the right of the tabs.
    pub toolbar: Option<T>,
}

impl<T> Default for RenderOptions<T> {
    fn default() -> Self {
        Self {
            draggable: false,
            dark_mode: false,
            class_name: None,
            toolbar: None,
        }
    }
}

impl<T> RenderOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub fn with_class_name(mut self, class_name: Option<impl Into<String>>) -> Self {
        self.class_name = class_name.map(Into::into);
        self
    }

    pub fn with_toolbar(mut self, toolbar: Option<T>) -> Self {
        self.toolbar = toolbar;
        self
    }
}
