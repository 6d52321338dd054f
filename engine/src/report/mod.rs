//! Structured run reporting.
//!
//! A program enables reporting once through [`enable_reporting`] and then records values with
//! the [`report!`] macro. Values end up in a single JSON document which is printed when the
//! returned guard is dropped. Nested objects and collections are opened with [`push_context`]
//! and [`push_collection_context`]; they are closed again when their guards go out of scope.
//! Without an active reporter all of this is a no-op, so library code can report unconditionally.

use serde_json::{Map, Value};
use std::cell::RefCell;
use std::env;
use std::mem::replace;

pub use serde_json::json;

/// Record a value under `key` in the current reporting context.
///
/// The value may be anything `serde_json::json!` accepts.
#[macro_export]
macro_rules! report {
    ($k:expr, $($json:tt)+) => {
        $crate::report::report($k.into(), $crate::report::json!($($json)+))
    };
}

pub mod benchmark;
pub use self::benchmark::*;

enum ContextStackItem {
    Key(String),
    Collection(Vec<Value>),
    Object(Map<String, Value>),
}

enum CurrentReportingContext {
    Collection(Vec<Value>),
    Object(Map<String, Value>),
}

struct Reporter {
    current: CurrentReportingContext,
    context_stack: Vec<ContextStackItem>,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter {
            current: CurrentReportingContext::Object(Map::new()),
            context_stack: Vec::new(),
        }
    }
}

impl Reporter {
    fn push_context(&mut self, key: String) {
        let parent = replace(&mut self.current, CurrentReportingContext::Object(Map::new()));
        self.context_stack.push(ContextStackItem::Key(key));
        self.context_stack.push(parent.into());
    }

    fn push_collection_context(&mut self, key: String) {
        let parent = replace(&mut self.current, CurrentReportingContext::Collection(Vec::new()));
        self.context_stack.push(ContextStackItem::Key(key));
        self.context_stack.push(parent.into());
    }

    fn push_collection_item(&mut self) {
        let parent = replace(&mut self.current, CurrentReportingContext::Object(Map::new()));
        debug_assert!(matches!(parent, CurrentReportingContext::Collection(_)), "collection item outside of collection");
        self.context_stack.push(parent.into());
    }

    fn pop_context(&mut self) {
        let finished = replace(&mut self.current, CurrentReportingContext::Object(Map::new())).into_value();

        match self.context_stack.pop() {
            Some(ContextStackItem::Collection(mut items)) => {
                items.push(finished);
                self.current = CurrentReportingContext::Collection(items);
            }
            Some(ContextStackItem::Object(mut object)) => {
                match self.context_stack.pop() {
                    Some(ContextStackItem::Key(key)) => {
                        object.insert(key, finished);
                    }
                    _ => debug_assert!(false, "reporting context stack corrupted"),
                }
                self.current = CurrentReportingContext::Object(object);
            }
            Some(ContextStackItem::Key(_)) | None => debug_assert!(false, "pop without matching push"),
        }
    }

    fn report(&mut self, key: String, val: Value) {
        match &mut self.current {
            CurrentReportingContext::Object(object) => {
                if object.insert(key.clone(), val).is_some() && !cfg!(feature = "report-allow-override") {
                    eprintln!("Reporting: overwriting existing value for key '{}'", key);
                }
            }
            CurrentReportingContext::Collection(_) => debug_assert!(false, "cannot report key '{}' directly into a collection", key),
        }
    }

    fn finish(mut self) -> Value {
        while !self.context_stack.is_empty() {
            self.pop_context();
        }
        self.current.into_value()
    }
}

impl CurrentReportingContext {
    fn into_value(self) -> Value {
        match self {
            CurrentReportingContext::Collection(items) => Value::Array(items),
            CurrentReportingContext::Object(object) => Value::Object(object),
        }
    }
}

impl From<CurrentReportingContext> for ContextStackItem {
    fn from(context: CurrentReportingContext) -> Self {
        match context {
            CurrentReportingContext::Collection(items) => ContextStackItem::Collection(items),
            CurrentReportingContext::Object(object) => ContextStackItem::Object(object),
        }
    }
}

thread_local! {
    static REPORTER: RefCell<Option<Reporter>> = RefCell::new(None);
}

fn with_reporter(f: impl FnOnce(&mut Reporter)) {
    REPORTER.with(|reporter| {
        if let Some(reporter) = reporter.borrow_mut().as_mut() {
            f(reporter);
        }
    });
}

/// Record `val` under `key`. Usually invoked through [`report!`].
pub fn report(key: String, val: Value) {
    with_reporter(|reporter| reporter.report(key, val));
}

/// Closes a context opened by [`push_context`] on drop.
#[must_use]
pub struct ContextGuard(());

impl Drop for ContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

/// Open a nested object under `key`. Reports go into it until the guard is dropped.
pub fn push_context(key: String) -> ContextGuard {
    with_reporter(|reporter| reporter.push_context(key));
    ContextGuard(())
}

/// Closes a collection opened by [`push_collection_context`] on drop.
#[must_use]
pub struct CollectionContextGuard(());

impl CollectionContextGuard {
    /// Open a new object inside the collection.
    pub fn push_collection_item(&mut self) -> CollectionItemContextGuard<'_> {
        with_reporter(Reporter::push_collection_item);
        CollectionItemContextGuard { _collection: self }
    }
}

impl Drop for CollectionContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

#[must_use]
pub struct CollectionItemContextGuard<'a> {
    _collection: &'a mut CollectionContextGuard,
}

impl Drop for CollectionItemContextGuard<'_> {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

/// Open a collection (JSON array) under `key`.
pub fn push_collection_context(key: String) -> CollectionContextGuard {
    with_reporter(|reporter| reporter.push_collection_context(key));
    CollectionContextGuard(())
}

/// Prints the collected report when dropped.
#[must_use]
pub struct ReportingGuard(());

impl ReportingGuard {
    /// Stop reporting and hand out the collected document instead of printing it.
    pub fn finish(self) -> Value {
        let value = take_report();
        std::mem::forget(self);
        value
    }
}

impl Drop for ReportingGuard {
    fn drop(&mut self) {
        let value = take_report();

        if cfg!(feature = "report-to-stderr") {
            eprintln!("{}", value);
        } else {
            println!("{}", value);
        }
    }
}

fn take_report() -> Value {
    REPORTER
        .with(|reporter| reporter.borrow_mut().take())
        .map(Reporter::finish)
        .unwrap_or(Value::Null)
}

/// Activate reporting for the current thread and record general information about the run.
pub fn enable_reporting(program: &str) -> ReportingGuard {
    REPORTER.with(|reporter| *reporter.borrow_mut() = Some(Reporter::default()));

    report!("program", program);
    report!("start_time", chrono::Utc::now().to_rfc2822());
    report!("args", env::args().collect::<Vec<String>>());
    report!("pkg_version", crate::built_info::PKG_VERSION);
    report!("git_revision", crate::built_info::GIT_VERSION.unwrap_or(""));
    report!("build_profile", crate::built_info::PROFILE);
    report!("build_time", crate::built_info::BUILT_TIME_UTC);
    report!("feature_flags", crate::built_info::FEATURES_STR);

    ReportingGuard(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_nested_contexts_and_collections() {
        let guard = enable_reporting("report_test");
        report!("graph", { "num_nodes": 3, "num_arcs": 2 });

        {
            let _ctxt = push_context("settings".to_string());
            report!("repeats", 10);
        }

        {
            let mut runs = push_collection_context("runs".to_string());
            for i in 0..2 {
                let _item = runs.push_collection_item();
                report!("run", i);
            }
        }

        let value = guard.finish();
        assert_eq!(value["program"], "report_test");
        assert_eq!(value["graph"]["num_arcs"], 2);
        assert_eq!(value["settings"]["repeats"], 10);
        assert_eq!(value["runs"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["runs"][1]["run"], 1);
    }

    #[test]
    fn reporting_without_reporter_is_a_noop() {
        report!("ignored", 1);
        let _ctxt = push_context("ignored".to_string());
        report!("ignored_too", [1, 2, 3]);
    }
}
