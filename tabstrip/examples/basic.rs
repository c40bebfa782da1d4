use core::convert::Infallible;

use tabstrip::{RenderOptions, TabRecord, TabStrip, TabSync};

// A strip that only prints what it is asked to do.
struct PrintStrip;

impl TabStrip for PrintStrip {
    type Error = Infallible;
    type Toolbar = &'static str;

    fn upsert_tab_at(&mut self, index: usize, tab: &TabRecord) -> Result<(), Infallible> {
        println!("  upsert {index}: {} {:?}", tab.id, tab.title);
        Ok(())
    }

    fn remove_tab(&mut self, id: &str) -> Result<(), Infallible> {
        println!("  remove {id}");
        Ok(())
    }

    fn activate_tab(&mut self, id: &str) -> Result<(), Infallible> {
        println!("  activate {id}");
        Ok(())
    }

    fn set_options(&mut self, options: &RenderOptions<&'static str>) -> Result<(), Infallible> {
        println!(
            "  options draggable={} dark_mode={}",
            options.draggable, options.dark_mode
        );
        Ok(())
    }
}

fn main() {
    let mut sync = TabSync::default();
    let mut strip = PrintStrip;
    let options = RenderOptions::new().with_draggable(true).with_toolbar(Some("+"));

    let mut tabs = vec![
        TabRecord::new("abc", "Welcome")
            .with_favicon_image("facebook-favicon.ico")
            .with_active(true),
    ];
    println!("render 1");
    let Ok(out) = sync.render(&tabs, &options, &mut strip);
    println!("  -> {out:?}");

    // Add a tab and make it the active one.
    for t in &mut tabs {
        t.active = false;
    }
    tabs.push(
        TabRecord::new("tab-id-1", "New Tab 1")
            .with_favicon_class("emoji")
            .with_active(true),
    );
    println!("render 2");
    let Ok(out) = sync.render(&tabs, &options, &mut strip);
    println!("  -> {out:?}");

    println!("render 3 (same list)");
    let Ok(out) = sync.render(&tabs, &options, &mut strip);
    println!("  -> {out:?}");

    println!("render 4 (close all, dark mode)");
    let dark = options.clone().with_dark_mode(true);
    let Ok(out) = sync.render(&[], &dark, &mut strip);
    println!("  -> {out:?}");
}
