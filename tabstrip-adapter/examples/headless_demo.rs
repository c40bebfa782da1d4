// Example: a headless host driving a strip the way an interactive tab demo would.
//
// The host owns the tab list. Strip callbacks only queue "what happened"; the host turns each
// into a new list with `host::*` and renders it.
use std::sync::{Arc, Mutex};

use tabstrip::{Listeners, RenderOptions, StripEvent, TabList, TabRecord, TabSyncOptions};
use tabstrip_adapter::{Controller, RecordingStrip, host};

#[derive(Debug)]
enum Action {
    Activate(String),
    Close(String),
    Reorder(String, usize),
}

struct App {
    tabs: TabList,
    next_id: usize,
    controller: Controller<RecordingStrip<&'static str>>,
    inbox: Arc<Mutex<Vec<Action>>>,
}

impl App {
    fn new() -> Self {
        let inbox: Arc<Mutex<Vec<Action>>> = Arc::default();
        let listeners = {
            let a = Arc::clone(&inbox);
            let c = Arc::clone(&inbox);
            let r = Arc::clone(&inbox);
            Listeners::new()
                .with_on_tab_active(Some(move |id: &str| {
                    a.lock().unwrap().push(Action::Activate(id.into()));
                }))
                .with_on_tab_close(Some(move |id: &str| {
                    c.lock().unwrap().push(Action::Close(id.into()));
                }))
                .with_on_tab_reorder(Some(move |id: &str, _from: usize, to: usize| {
                    r.lock().unwrap().push(Action::Reorder(id.into(), to));
                }))
                .with_on_drag_begin(Some(|id: &str| println!("drag begin {id}")))
                .with_on_drag_end(Some(|| println!("drag end")))
        };
        let mut controller = Controller::new(
            RecordingStrip::new(),
            TabSyncOptions::new().with_listeners(listeners),
        );
        controller.set_render_options(
            RenderOptions::new()
                .with_draggable(true)
                .with_toolbar(Some("+")),
        );
        Self {
            tabs: vec![
                TabRecord::new("abc", "Welcome")
                    .with_favicon_image("facebook-favicon.ico")
                    .with_active(true),
            ],
            next_id: 0,
            controller,
            inbox,
        }
    }

    fn render(&mut self) {
        match self.controller.render(&self.tabs) {
            Ok(out) => println!("render -> {out:?}, strip = {:?}", self.controller.strip().ids()),
            Err(err) => println!("render failed: {err}"),
        }
    }

    fn add_tab(&mut self, configure: impl FnOnce(TabRecord) -> TabRecord) {
        self.next_id += 1;
        let id = format!("tab-id-{}", self.next_id);
        let tab = configure(TabRecord::new(id, format!("New Tab {}", self.next_id)));
        self.tabs = host::push_active(&self.tabs, tab);
        self.render();
    }

    fn pump(&mut self) {
        let actions = std::mem::take(&mut *self.inbox.lock().unwrap());
        for action in actions {
            println!("host handles {action:?}");
            self.tabs = match action {
                Action::Activate(id) => host::activate_only(&self.tabs, &id),
                Action::Close(id) => host::close(&self.tabs, &id),
                Action::Reorder(id, to) => match host::reorder(&self.tabs, &id, to) {
                    Some(next) => next,
                    None => continue,
                },
            };
            self.render();
        }
    }
}

fn main() {
    let mut app = App::new();
    app.render();

    app.add_tab(|t| t.with_favicon_image("google-favicon.ico"));
    app.add_tab(|t| t.with_favicon_class("emoji"));
    app.add_tab(|t| t.with_favicon_class("emoji").with_close_visible(false));

    // The renderer reports a drag of the first tab to the end, then a click and a close.
    let sink = app.controller.event_sink();
    sink.dispatch(StripEvent::DragBegin("abc".into()));
    for (from, to) in [(0, 1), (1, 2), (2, 3)] {
        app.controller.strip_mut().drag_tab(from, to);
        sink.dispatch(StripEvent::DragMove {
            tab_id: "abc".into(),
            from_index: from,
            to_index: to,
        });
    }
    sink.dispatch(StripEvent::DragEnd);
    sink.dispatch(StripEvent::TabActivated("tab-id-1".into()));
    sink.dispatch(StripEvent::TabClosed("tab-id-2".into()));
    app.pump();

    // Dark mode, then close all.
    app.controller.update_render_options(|o| o.dark_mode = true);
    app.tabs.clear();
    app.render();
    println!("options = {:?}", app.controller.strip().options());
}
