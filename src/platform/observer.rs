//! Scroll fade-in via IntersectionObserver
//!
//! Sections gain the visible class once enough of them is on screen and lose
//! it again when scrolled away.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::error::Result;
use crate::settings::Settings;
use crate::sim::Visibility;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl SectionObserver {
    /// Observe every element matching `settings.section_selector`
    pub fn new(document: &Document, settings: &Settings) -> Result<Self> {
        let threshold = settings.visibility_threshold;
        let class = settings.visible_class.clone();

        let on_entries = move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let visible =
                    Visibility::from_ratio(entry.intersection_ratio(), threshold).is_visible();
                if let Err(err) = entry
                    .target()
                    .class_list()
                    .toggle_with_force(&class, visible)
                {
                    log::warn!("Failed to toggle `{}`: {:?}", class, err);
                }
            }
        };
        let callback: EntriesCallback = Closure::wrap(
            Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let sections = dom::query_all(document, &settings.section_selector)?;
        for section in &sections {
            observer.observe(section);
        }
        log::info!("Observing {} sections", sections.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Stop observing all sections
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
