//! Nebula FX entry point
//!
//! Builds each page effect and wires it to load/resize events.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_fx {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::Document;

    use nebula_fx::Settings;
    use nebula_fx::platform::{
        HoverGlow, Listener, SectionObserver, StarfieldLayer, TechTree, dom, stagger_shapes,
    };

    /// Every live effect on the page
    #[derive(Default)]
    struct Page {
        starfield: Option<Rc<RefCell<StarfieldLayer>>>,
        tree: Option<Rc<RefCell<TechTree>>>,
        sections: Option<SectionObserver>,
        hover: Option<HoverGlow>,
        listeners: Vec<Listener>,
    }

    impl Page {
        fn stop(&mut self) {
            // Listeners first so no resize can restart anything mid-teardown
            self.listeners.clear();
            if let Some(starfield) = self.starfield.take() {
                starfield.borrow_mut().stop();
            }
            if let Some(tree) = self.tree.take() {
                tree.borrow_mut().stop();
            }
            if let Some(sections) = self.sections.take() {
                sections.disconnect();
            }
            self.hover = None;
        }
    }

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    /// A component that fails to start is logged and left out; the rest of
    /// the page keeps running
    fn started<T>(name: &str, result: nebula_fx::Result<T>) -> Option<T> {
        match result {
            Ok(component) => Some(component),
            Err(err) => {
                log::error!("{} disabled: {}", name, err);
                None
            }
        }
    }

    fn restart_tree(tree: &RefCell<TechTree>) {
        let mut tree = tree.borrow_mut();
        match tree.restart() {
            Ok(()) => log::debug!("Tech tree running: {}", tree.is_running()),
            Err(err) => log::error!("Tech tree restart failed: {}", err),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Nebula FX: logger already initialized".into());
        }

        log::info!("Nebula FX starting...");

        let Some(document) = started("page", dom::document()) else {
            return;
        };
        let settings = Rc::new(Settings::load());

        let mut page = Page::default();
        page.sections = started("section fade-in", SectionObserver::new(&document, &settings));
        if let Some(count) = started("shape stagger", stagger_shapes(&document, &settings)) {
            log::info!("Staggered {} shapes", count);
        }
        page.hover = started("node hover", HoverGlow::new(&document, &settings));

        let seed = js_sys::Date::now() as u64;
        page.starfield = started(
            "starfield",
            StarfieldLayer::new(&document, &settings, seed),
        )
        .map(|s| Rc::new(RefCell::new(s)));
        page.tree = started("tech tree", TechTree::new(&document, settings.clone()))
            .map(|t| Rc::new(RefCell::new(t)));

        if let Some(listeners) = started("event wiring", wire_events(&document, &page)) {
            page.listeners = listeners;
        }

        PAGE.with(|p| *p.borrow_mut() = Some(page));
        log::info!("Nebula FX running!");
    }

    fn wire_events(document: &Document, page: &Page) -> nebula_fx::Result<Vec<Listener>> {
        let window = dom::window()?;
        let mut listeners = Vec::new();

        // Resize: refit the starfield, re-lay out the tree
        {
            let starfield = page.starfield.clone();
            let tree = page.tree.clone();
            listeners.push(Listener::new(&window, "resize", move |_event| {
                if let Some(starfield) = &starfield {
                    if let Err(err) = starfield.borrow().resize() {
                        log::warn!("Starfield resize failed: {}", err);
                    }
                }
                if let Some(tree) = &tree {
                    restart_tree(tree);
                }
            })?);
        }

        // The tree measures node offsets, so it waits for layout to settle
        if let Some(tree) = page.tree.clone() {
            if document.ready_state() == "complete" {
                restart_tree(&tree);
            } else {
                listeners.push(Listener::new(&window, "load", move |_event| {
                    restart_tree(&tree);
                })?);
            }
        }

        Ok(listeners)
    }

    pub fn stop() {
        PAGE.with(|p| {
            if let Some(mut page) = p.borrow_mut().take() {
                page.stop();
                log::info!("Nebula FX stopped");
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_fx::run();
}

/// Tear down every effect (loops, observers, listeners)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn stop_effects() {
    wasm_fx::stop();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Nebula FX (native) starting...");
    log::info!("Effects need a browser - build for wasm32 and serve the page");

    println!("\nRunning headless dry run...");
    dry_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Step both animations without a canvas and report where they end up
#[cfg(not(target_arch = "wasm32"))]
fn dry_run() {
    use glam::Vec2;
    use nebula_fx::Settings;
    use nebula_fx::sim::{NodeBox, Starfield, TreeLayout};

    let settings = Settings::load();

    let mut field = Starfield::new(42, Vec2::new(1280.0, 720.0), &settings);
    for _ in 0..600 {
        field.step();
    }
    log::info!("Starfield: {} stars after 600 frames", field.stars().len());

    let nodes = [
        NodeBox::new(Some(settings.center_node_name.as_str()), 560.0, 320.0, 160.0, 80.0),
        NodeBox::new(Some("Rust"), 100.0, 100.0, 120.0, 60.0),
        NodeBox::new(Some("WebAssembly"), 1000.0, 500.0, 120.0, 60.0),
    ];
    let Some(mut layout) = TreeLayout::build(&nodes, &settings.center_node_name) else {
        log::warn!("No hub node in dry run layout");
        return;
    };
    let mut frames = 0;
    while !layout.is_complete() {
        layout.advance(settings.progress_step);
        frames += 1;
    }
    println!(
        "✓ {} connectors fully drawn after {} frames",
        layout.lines.len(),
        frames
    );
}
