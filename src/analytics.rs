use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Flag(bool),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<usize> for AttributeValue {
    fn from(value: usize) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn attributes_json(&self) -> Value {
        serde_json::to_value(&self.attributes).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

/// `timing_complete` for the page load, from the navigation timing entry's
/// load event bounds. Incomplete timings (end before start) are dropped.
pub fn load_timing_event(load_event_start: f64, load_event_end: f64) -> Option<AnalyticsEvent> {
    let duration = load_event_end - load_event_start;
    if !duration.is_finite() || duration < 0.0 {
        return None;
    }

    Some(
        AnalyticsEvent::new("timing_complete")
            .with("name", "load")
            .with("value", duration.round() as i64),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }
}

/// Structured record writer; the browser build points this at the console.
pub trait EventLog {
    fn write(&self, level: LogLevel, record: Value);
}

/// External analytics backend. Returns `false` when the backend is absent at
/// call time.
pub trait AnalyticsSink {
    fn forward(&self, event: &AnalyticsEvent) -> bool;
}

pub fn log_record(level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

/// Single funnel for every page event: always logged, forwarded to the
/// analytics backend when one is installed.
pub struct EventEmitter {
    log: Box<dyn EventLog>,
    sink: Box<dyn AnalyticsSink>,
}

impl EventEmitter {
    pub fn new(log: impl EventLog + 'static, sink: impl AnalyticsSink + 'static) -> Self {
        Self {
            log: Box::new(log),
            sink: Box::new(sink),
        }
    }

    pub fn track(&self, event: AnalyticsEvent) {
        let forwarded = self.sink.forward(&event);
        self.log.write(
            LogLevel::Info,
            log_record(
                LogLevel::Info,
                "analytics_event",
                serde_json::json!({
                    "name": event.name,
                    "attributes": event.attributes_json(),
                    "forwarded": forwarded,
                }),
            ),
        );
    }

    pub fn track_name(&self, name: &str) {
        self.track(AnalyticsEvent::new(name));
    }

    pub fn warn(&self, event: &str, fields: Value) {
        self.log
            .write(LogLevel::Warn, log_record(LogLevel::Warn, event, fields));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    pub struct RecordingLog {
        pub records: Rc<RefCell<Vec<(LogLevel, Value)>>>,
    }

    impl EventLog for RecordingLog {
        fn write(&self, level: LogLevel, record: Value) {
            self.records.borrow_mut().push((level, record));
        }
    }

    impl RecordingLog {
        pub fn event_names(&self) -> Vec<String> {
            self.records
                .borrow()
                .iter()
                .filter_map(|(_, record)| record.get("name")?.as_str().map(str::to_string))
                .collect()
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingSink {
        pub installed: bool,
        pub forwarded: Rc<RefCell<Vec<AnalyticsEvent>>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn forward(&self, event: &AnalyticsEvent) -> bool {
            if !self.installed {
                return false;
            }
            self.forwarded.borrow_mut().push(event.clone());
            true
        }
    }
}
