use tabstrip::{
    EventSink, RenderOptions, RenderOutcome, StripEvent, TabRecord, TabStrip, TabSync,
    TabSyncOptions,
};

/// A framework-neutral controller that owns a `tabstrip::TabSync` together with its strip and
/// the current render options.
///
/// This type does not hold any UI objects beyond the strip you give it. Hosts drive it by
/// calling:
/// - `render(tabs)` whenever their tab list changes
/// - `set_render_options` / `update_render_options` when draggability, theme or toolbar change
/// - `handle_event(event)` for each gesture the strip reports (or hand out `event_sink()`)
pub struct Controller<S: TabStrip> {
    sync: TabSync<S::Toolbar>,
    strip: S,
    options: RenderOptions<S::Toolbar>,
}

impl<S> Controller<S>
where
    S: TabStrip,
    S::Toolbar: Clone + PartialEq,
{
    pub fn new(strip: S, options: TabSyncOptions) -> Self {
        Self {
            sync: TabSync::new(options),
            strip,
            options: RenderOptions::default(),
        }
    }

    pub fn from_parts(sync: TabSync<S::Toolbar>, strip: S) -> Self {
        let options = sync.render_options().cloned().unwrap_or_default();
        Self {
            sync,
            strip,
            options,
        }
    }

    pub fn sync(&self) -> &TabSync<S::Toolbar> {
        &self.sync
    }

    pub fn sync_mut(&mut self) -> &mut TabSync<S::Toolbar> {
        &mut self.sync
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    pub fn into_parts(self) -> (TabSync<S::Toolbar>, S) {
        (self.sync, self.strip)
    }

    pub fn render_options(&self) -> &RenderOptions<S::Toolbar> {
        &self.options
    }

    /// Stores new render options. They reach the strip with the next `render`.
    pub fn set_render_options(&mut self, options: RenderOptions<S::Toolbar>) {
        self.options = options;
    }

    /// Clones the current render options, applies `f`, then stores the result.
    pub fn update_render_options(&mut self, f: impl FnOnce(&mut RenderOptions<S::Toolbar>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_render_options(next);
    }

    /// Reconciles the strip with `tabs` using the stored render options.
    pub fn render(&mut self, tabs: &[TabRecord]) -> Result<RenderOutcome, S::Error> {
        self.sync.render(tabs, &self.options, &mut self.strip)
    }

    /// Re-renders the current rendered list, e.g. to push changed render options.
    pub fn refresh(&mut self) -> Result<RenderOutcome, S::Error> {
        let tabs = self.sync.rendered();
        self.render(&tabs)
    }

    pub fn handle_event(&self, event: StripEvent) {
        self.sync.handle_event(event);
    }

    /// Forwards a batch of strip events in order.
    pub fn handle_events(&self, events: impl IntoIterator<Item = StripEvent>) {
        let sink = self.sync.event_sink();
        for event in events {
            sink.dispatch(event);
        }
    }

    pub fn event_sink(&self) -> EventSink {
        self.sync.event_sink()
    }
}

impl<S> core::fmt::Debug for Controller<S>
where
    S: TabStrip + core::fmt::Debug,
    S::Toolbar: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("sync", &self.sync)
            .field("strip", &self.strip)
            .field("options", &self.options)
            .finish()
    }
}
