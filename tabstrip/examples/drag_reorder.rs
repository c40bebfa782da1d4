// Example: many move events of one drag gesture become a single reorder callback.
use core::convert::Infallible;

use tabstrip::{
    Listeners, RenderOptions, StripEvent, TabRecord, TabStrip, TabSync, TabSyncOptions,
};

struct NullStrip;

impl TabStrip for NullStrip {
    type Error = Infallible;
    type Toolbar = ();

    fn upsert_tab_at(&mut self, _index: usize, _tab: &TabRecord) -> Result<(), Infallible> {
        Ok(())
    }

    fn remove_tab(&mut self, _id: &str) -> Result<(), Infallible> {
        Ok(())
    }

    fn activate_tab(&mut self, _id: &str) -> Result<(), Infallible> {
        Ok(())
    }
}

fn main() {
    let listeners = Listeners::new()
        .with_on_drag_begin(Some(|id: &str| println!("drag begin: {id}")))
        .with_on_tab_reorder(Some(|id: &str, from: usize, to: usize| {
            println!("reorder: {id} {from} -> {to}");
        }))
        .with_on_drag_end(Some(|| println!("drag end")));
    let mut sync = TabSync::new(TabSyncOptions::new().with_listeners(listeners));

    let tabs: Vec<_> = (0..5)
        .map(|i| TabRecord::new(format!("t{i}"), format!("Tab {i}")))
        .collect();
    let Ok(_) = sync.render(&tabs, &RenderOptions::new().with_draggable(true), &mut NullStrip);

    // The renderer holds on to one sink for its whole lifetime.
    let sink = sync.event_sink();
    sink.dispatch(StripEvent::DragBegin("t1".into()));
    for (from, to) in [(1, 2), (2, 3), (3, 4)] {
        sink.dispatch(StripEvent::DragMove {
            tab_id: "t1".into(),
            from_index: from,
            to_index: to,
        });
    }
    sink.dispatch(StripEvent::DragEnd);

    let order: Vec<_> = sync.rendered().into_iter().map(|t| t.id).collect();
    println!("rendered order: {order:?}");
}
