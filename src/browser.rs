use crate::{
    analytics::{log_record, AnalyticsEvent, AnalyticsSink, EventEmitter, EventLog, LogLevel},
    preference::{DocumentFlag, KeyValueStore, PreferenceStore, StorageError},
    scroll::ScrollMetrics,
    visibility::{ObserverOptions, Region},
};
use js_sys::{Array, Function, Reflect, JSON};
use serde_json::{json, Value};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    PerformanceNavigationTiming, Storage,
};

pub const REGION_ATTRIBUTE: &str = "data-region";
const DARK_MODE_CLASS: &str = "dark-mode";

pub struct ConsoleLog;

impl EventLog for ConsoleLog {
    fn write(&self, level: LogLevel, record: Value) {
        let line = record.to_string();
        match level {
            LogLevel::Info => gloo_console::log!(line),
            LogLevel::Warn => gloo_console::warn!(line),
        }
    }
}

fn warn(event: &str, fields: Value) {
    ConsoleLog.write(LogLevel::Warn, log_record(LogLevel::Warn, event, fields));
}

/// Forwards to a global `gtag` when the page has one. Looked up on every call
/// so a tag manager that loads late is still picked up.
pub struct GtagSink;

impl AnalyticsSink for GtagSink {
    fn forward(&self, event: &AnalyticsEvent) -> bool {
        let Some(win) = window() else {
            return false;
        };
        let Ok(gtag) = Reflect::get(&win, &JsValue::from_str("gtag")) else {
            return false;
        };
        let Some(gtag) = gtag.dyn_ref::<Function>() else {
            return false;
        };

        let data = JSON::parse(&event.attributes_json().to_string())
            .unwrap_or_else(|_| js_sys::Object::new().into());
        gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.name),
            &data,
        )
        .is_ok()
    }
}

pub fn emitter() -> EventEmitter {
    EventEmitter::new(ConsoleLog, GtagSink)
}

pub struct LocalStorage(Storage);

impl LocalStorage {
    fn open() -> Option<Self> {
        window()?.local_storage().ok().flatten().map(Self)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set_item(key, value).map_err(|_| {
            let error = StorageError::Write(key.to_string());
            warn("preference_not_persisted", json!({ "reason": error.to_string() }));
            error
        })
    }
}

pub fn preference_store() -> PreferenceStore<LocalStorage> {
    match LocalStorage::open() {
        Some(storage) => PreferenceStore::new(storage),
        None => {
            warn("preference_storage_unavailable", json!({}));
            PreferenceStore::session_only()
        }
    }
}

pub struct DocumentTheme;

impl DocumentTheme {
    pub fn apply_immediately(enabled: bool) {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled);
        }
    }
}

impl DocumentFlag for DocumentTheme {
    fn apply_dark_mode(&self, enabled: bool) {
        if prefers_reduced_motion() {
            Self::apply_immediately(enabled);
            return;
        }

        let Some(document) = window().and_then(|w| w.document()) else {
            Self::apply_immediately(enabled);
            return;
        };

        let document_js: JsValue = document.into();
        let Ok(start_view_transition) =
            Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
        else {
            Self::apply_immediately(enabled);
            return;
        };

        let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
            Self::apply_immediately(enabled);
            return;
        };

        let callback = Closure::once_into_js(move || Self::apply_immediately(enabled));

        if start_view_transition
            .call1(&document_js, &callback)
            .is_err()
        {
            Self::apply_immediately(enabled);
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn intersection_observer_supported() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Live intersection observer over the page regions; disconnects on drop.
pub struct RegionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RegionObserver {
    pub fn attach(
        options: &ObserverOptions,
        targets: &[Element],
        mut on_batch: impl FnMut(Vec<(Region, bool)>) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| {
                        let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                        let region = entry
                            .target()
                            .get_attribute(REGION_ATTRIBUTE)
                            .and_then(|id| Region::from_id(&id))?;
                        Some((region, entry.is_intersecting()))
                    })
                    .collect();
                on_batch(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for target in targets {
            observer.observe(target);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RegionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Window event listener that unregisters itself on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn attach(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let win = window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let win = window()?;
    let scroll_y = win.scroll_y().ok()?;
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    let document_height = f64::from(win.document()?.document_element()?.scroll_height());

    Some(ScrollMetrics {
        scroll_y,
        document_height,
        viewport_height,
    })
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn document_complete() -> bool {
    window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

/// `(loadEventStart, loadEventEnd)` of the navigation entry, when the
/// Performance API exposes one.
pub fn navigation_load_timing() -> Option<(f64, f64)> {
    let performance = window()?.performance()?;
    let entry = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
        .ok()?;
    Some((entry.load_event_start(), entry.load_event_end()))
}
