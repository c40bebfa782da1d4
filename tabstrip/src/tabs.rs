use alloc::vec::Vec;

use crate::reconcile;
use crate::{
    ContextMenuEvent, Latest, Listeners, ReorderGesture, ReorderTracker, RemovalPolicy,
    RenderOptions, StripEvent, TabList, TabRecord, TabStrip, TabSyncOptions, index_of,
};

/// What a call to [`TabSync::render`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The tab list equals the rendered one; nothing was sent to the strip.
    Unchanged,
    /// The list changed and `ops` strip operations were applied (possibly zero, e.g. when only
    /// an active flag was cleared).
    Applied { ops: usize },
}

impl RenderOutcome {
    pub fn ops(&self) -> usize {
        match self {
            Self::Unchanged => 0,
            Self::Applied { ops } => *ops,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Shared {
    rendered: Latest<TabList>,
    tracker: Latest<ReorderTracker>,
    listeners: Latest<Listeners>,
    draggable: Latest<bool>,
}

/// A headless engine that keeps a [`TabStrip`] in sync with a host-owned tab list.
///
/// The host calls [`TabSync::render`] with its full tab list whenever its state changes. The
/// strip reports gestures through [`TabSync::handle_event`] or an [`EventSink`]; the engine
/// turns them into host callbacks, coalescing each drag gesture into a single reorder.
///
/// The engine keeps one snapshot, the rendered list. Live drag moves reorder that snapshot
/// directly, and the next render diffs against it.
#[derive(Debug)]
pub struct TabSync<T = ()> {
    shared: Shared,
    removal_policy: RemovalPolicy,
    applied_options: Option<RenderOptions<T>>,
}

impl<T> Default for TabSync<T> {
    fn default() -> Self {
        Self::new(TabSyncOptions::default())
    }
}

impl<T> TabSync<T> {
    pub fn new(options: TabSyncOptions) -> Self {
        ts_debug!(removal_policy = ?options.removal_policy, "TabSync::new");
        let shared = Shared::default();
        shared.listeners.set(options.listeners);
        Self {
            shared,
            removal_policy: options.removal_policy,
            applied_options: None,
        }
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    pub fn set_removal_policy(&mut self, removal_policy: RemovalPolicy) {
        self.removal_policy = removal_policy;
    }

    /// Replaces the host callbacks. Existing [`EventSink`]s pick them up immediately.
    pub fn set_listeners(&mut self, listeners: Listeners) {
        self.shared.listeners.set(listeners);
    }

    /// Clones the current callbacks, applies `f`, then stores the result.
    pub fn update_listeners(&mut self, f: impl FnOnce(&mut Listeners)) {
        let mut next = self.shared.listeners.get();
        f(&mut next);
        self.set_listeners(next);
    }

    /// A clone of the rendered list.
    pub fn rendered(&self) -> TabList {
        self.shared.rendered.get()
    }

    /// Runs `f` against the rendered list without cloning it.
    pub fn with_rendered<R>(&self, f: impl FnOnce(&[TabRecord]) -> R) -> R {
        self.shared.rendered.with(|tabs| f(tabs))
    }

    /// A handle that always reads the current rendered list.
    pub fn latest(&self) -> Latest<TabList> {
        self.shared.rendered.clone()
    }

    pub fn gesture(&self) -> Option<ReorderGesture> {
        self.shared.tracker.with(|t| t.gesture().cloned())
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.tracker.with(ReorderTracker::is_dragging)
    }

    /// The render options last pushed to the strip.
    pub fn render_options(&self) -> Option<&RenderOptions<T>> {
        self.applied_options.as_ref()
    }

    /// A long-lived handle for the strip renderer to report gestures through.
    ///
    /// Every sink shares state with this engine: it always sees the newest listeners and the
    /// newest rendered list, no matter when it was created.
    pub fn event_sink(&self) -> EventSink {
        EventSink {
            shared: self.shared.clone(),
        }
    }

    pub fn handle_event(&self, event: StripEvent) {
        self.event_sink().dispatch(event);
    }

    /// Forgets the rendered list, any in-flight gesture and the applied options.
    ///
    /// Use this after the strip was recreated empty; the next render rebuilds it from scratch.
    pub fn reset(&mut self) {
        ts_debug!("TabSync::reset");
        self.shared.rendered.set(Vec::new());
        self.shared.tracker.with_mut(ReorderTracker::reset);
        self.applied_options = None;
    }
}

impl<T: Clone + PartialEq> TabSync<T> {
    /// Brings `strip` in line with `tabs` and `options`.
    ///
    /// Options are pushed only when they differ from the last successful push. When `tabs`
    /// equals the rendered list no tab operation is issued at all.
    ///
    /// A strip error aborts the render and is returned unchanged. The rendered list then holds
    /// what the strip shows after the operations that did succeed, so the next render only
    /// issues what is still missing.
    pub fn render<S>(
        &mut self,
        tabs: &[TabRecord],
        options: &RenderOptions<T>,
        strip: &mut S,
    ) -> Result<RenderOutcome, S::Error>
    where
        S: TabStrip<Toolbar = T> + ?Sized,
    {
        if self.applied_options.as_ref() != Some(options) {
            ts_trace!(
                draggable = options.draggable,
                dark_mode = options.dark_mode,
                "TabSync::render: options changed"
            );
            strip.set_options(options)?;
            self.applied_options = Some(options.clone());
        }
        self.shared.draggable.set(options.draggable);

        if self.shared.rendered.with(|prev| prev.as_slice() == tabs) {
            return Ok(RenderOutcome::Unchanged);
        }

        let ops = self
            .shared
            .rendered
            .with(|prev| reconcile::plan(prev, tabs, self.removal_policy));
        for (done, op) in ops.iter().enumerate() {
            if let Err(err) = op.apply_to(strip) {
                ts_warn!(
                    failed = done,
                    ops = ops.len(),
                    "TabSync::render: strip rejected an operation"
                );
                self.shared.rendered.with_mut(|rendered| {
                    let mut shown: TabList = reconcile::distinct_last(rendered)
                        .into_iter()
                        .cloned()
                        .collect();
                    for applied in &ops[..done] {
                        applied.apply_to_list(&mut shown);
                    }
                    *rendered = shown;
                });
                return Err(err);
            }
        }
        self.shared.rendered.set(tabs.to_vec());

        ts_debug!(tabs = tabs.len(), ops = ops.len(), "TabSync::render");
        Ok(RenderOutcome::Applied { ops: ops.len() })
    }
}

/// The inbound side of the engine, handed to the strip renderer once.
///
/// Cloning is cheap and every clone shares state with the [`TabSync`] it came from.
#[derive(Clone, Debug)]
pub struct EventSink {
    shared: Shared,
}

impl EventSink {
    pub fn dispatch(&self, event: StripEvent) {
        ts_trace!(?event, "EventSink::dispatch");
        match event {
            StripEvent::TabActivated(id) => self.tab_activated(&id),
            StripEvent::TabClosed(id) => self.tab_closed(&id),
            StripEvent::DragBegin(id) => self.drag_begin(&id),
            StripEvent::DragMove {
                tab_id,
                from_index,
                to_index,
            } => self.drag_move(&tab_id, from_index, to_index),
            StripEvent::DragEnd => self.drag_end(),
            StripEvent::ContextMenu { tab_id, event } => self.context_menu(&tab_id, event),
        }
    }

    pub fn tab_activated(&self, id: &str) {
        if let Some(cb) = self.shared.listeners.with(|l| l.on_tab_active.clone()) {
            cb(id);
        }
    }

    pub fn tab_closed(&self, id: &str) {
        if let Some(cb) = self.shared.listeners.with(|l| l.on_tab_close.clone()) {
            cb(id);
        }
    }

    pub fn drag_begin(&self, id: &str) {
        if let Some(cb) = self.shared.listeners.with(|l| l.on_drag_begin.clone()) {
            cb(id);
        }
    }

    /// Applies one intermediate move to the rendered list and records it in the gesture.
    ///
    /// Ignored while the strip is not draggable. Draggability comes from the options of the last
    /// render that got past pushing them, and is `false` before the first such render.
    pub fn drag_move(&self, tab_id: &str, from_index: usize, to_index: usize) {
        if !self.shared.draggable.get() {
            ts_debug!(tab_id, "EventSink::drag_move: strip is not draggable, ignored");
            return;
        }
        self.shared.rendered.with_mut(|rendered| {
            self.shared
                .tracker
                .with_mut(|t| t.on_move(rendered, tab_id, from_index, to_index));
        });
    }

    /// Ends the current gesture.
    ///
    /// Fires `on_tab_reorder` once if the gesture moved a tab that is still rendered, then
    /// `on_drag_end` unconditionally.
    pub fn drag_end(&self) {
        let commit = self.shared.tracker.with_mut(ReorderTracker::on_gesture_end);
        if let Some(commit) = commit {
            let present = self
                .shared
                .rendered
                .with(|tabs| index_of(tabs, &commit.tab_id).is_some());
            if present {
                if let Some(cb) = self.shared.listeners.with(|l| l.on_tab_reorder.clone()) {
                    cb(&commit.tab_id, commit.from_index, commit.to_index);
                }
            } else {
                ts_debug!(
                    tab_id = commit.tab_id.as_str(),
                    "EventSink::drag_end: reordered tab is gone, commit dropped"
                );
            }
        }
        if let Some(cb) = self.shared.listeners.with(|l| l.on_drag_end.clone()) {
            cb();
        }
    }

    pub fn context_menu(&self, id: &str, event: ContextMenuEvent) {
        if let Some(cb) = self.shared.listeners.with(|l| l.on_context_menu.clone()) {
            cb(id, event);
        }
    }
}
