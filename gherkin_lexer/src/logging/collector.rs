//! Error collector for multi-document runs with cargo-style output

use super::events::LogEvent;
use crate::config::compile_time::logging::MAX_LOG_EVENTS_PER_FILE;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

// ============================================================================
// DOCUMENT CONTEXT
// ============================================================================

/// The document currently being tokenized on this thread
#[derive(Debug, Clone)]
pub struct DocumentContext {
    pub path: PathBuf,
    pub document_id: usize,
    pub start_time: Instant,
}

impl DocumentContext {
    pub fn new(path: PathBuf, document_id: usize) -> Self {
        Self {
            path,
            document_id,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

// ============================================================================
// PROCESSING SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
    pub total_documents: usize,
    pub successful_documents: usize,
    pub failed_documents: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub total_processing_time: Duration,
}

impl ProcessingSummary {
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }
}

// ============================================================================
// ERROR COLLECTOR
// ============================================================================

/// Thread-safe collector of error and warning events, keyed by document
pub struct ErrorCollector {
    document_events: Mutex<BTreeMap<PathBuf, Vec<LogEvent>>>,
    document_contexts: Mutex<BTreeMap<PathBuf, DocumentContext>>,
    processing_start: Instant,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self {
            document_events: Mutex::new(BTreeMap::new()),
            document_contexts: Mutex::new(BTreeMap::new()),
            processing_start: Instant::now(),
        }
    }

    /// Record an event for a document, capped per document
    pub fn record_event(&self, path: &Path, event: LogEvent) {
        let mut events = lock(&self.document_events);
        let document_events = events.entry(path.to_path_buf()).or_default();

        if document_events.len() < MAX_LOG_EVENTS_PER_FILE {
            document_events.push(event);
        } else if document_events.len() == MAX_LOG_EVENTS_PER_FILE {
            document_events.push(LogEvent::warning(&format!(
                "Too many events for document (limit: {})",
                MAX_LOG_EVENTS_PER_FILE
            )));
        }
    }

    /// Register a document so that clean documents count in the summary
    pub fn record_document_context(&self, context: DocumentContext) {
        lock(&self.document_events)
            .entry(context.path.clone())
            .or_default();
        lock(&self.document_contexts).insert(context.path.clone(), context);
    }

    pub fn get_document_events(&self, path: &Path) -> Vec<LogEvent> {
        lock(&self.document_events)
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_document_errors(&self, path: &Path) -> Vec<LogEvent> {
        lock(&self.document_events)
            .get(path)
            .map(|events| events.iter().filter(|e| e.is_error()).cloned().collect())
            .unwrap_or_default()
    }

    pub fn document_has_errors(&self, path: &Path) -> bool {
        lock(&self.document_events)
            .get(path)
            .is_some_and(|events| events.iter().any(|e| e.is_error()))
    }

    pub fn get_all_document_events(&self) -> BTreeMap<PathBuf, Vec<LogEvent>> {
        lock(&self.document_events).clone()
    }

    pub fn get_summary(&self) -> ProcessingSummary {
        let events = lock(&self.document_events);

        let mut summary = ProcessingSummary {
            total_documents: events.len(),
            total_processing_time: self.processing_start.elapsed(),
            ..Default::default()
        };

        for document_events in events.values() {
            if document_events.iter().any(|e| e.is_error()) {
                summary.failed_documents += 1;
            } else {
                summary.successful_documents += 1;
            }

            summary.total_errors += document_events.iter().filter(|e| e.is_error()).count();
            summary.total_warnings += document_events.iter().filter(|e| e.is_warning()).count();
        }

        summary
    }

    pub fn clear(&self) {
        lock(&self.document_events).clear();
        lock(&self.document_contexts).clear();
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CARGO-STYLE FORMATTING
// ============================================================================

/// Format collected errors and warnings grouped by document
pub fn format_cargo_style_errors(collector: &ErrorCollector) -> String {
    let mut output = String::new();

    for (path, events) in &collector.get_all_document_events() {
        let reported: Vec<_> = events
            .iter()
            .filter(|e| e.is_error() || e.is_warning())
            .collect();

        if reported.is_empty() {
            continue;
        }

        output.push_str(&format!("Checking {}...\n", path.display()));

        for event in reported {
            let label = if event.is_error() { "error" } else { "warning" };
            let location_info = event
                .location
                .as_ref()
                .map(|l| format!("\n  --> {}:{}:{}", path.display(), l.line, l.column))
                .unwrap_or_default();

            output.push_str(&format!(
                "{}[{}]: {}{}\n",
                label,
                event.code.as_str(),
                event.message,
                location_info
            ));

            let mut context: Vec<_> = event
                .context
                .iter()
                .filter(|(key, _)| key.as_str() != "file" && key.as_str() != "document_id")
                .collect();
            context.sort();
            for (key, value) in context {
                output.push_str(&format!("  = {}: {}\n", key, value));
            }

            if event.is_error() {
                let action = event.recommended_action();
                if action != "No specific action available" {
                    output.push_str(&format!("  = help: {}\n", action));
                }
            }
        }

        output.push('\n');
    }

    let summary = collector.get_summary();
    output.push_str(&format!(
        "{} document(s) checked: {} ok, {} failed",
        summary.total_documents, summary.successful_documents, summary.failed_documents
    ));
    if summary.total_errors > 0 {
        output.push_str(&format!(", {} error(s)", summary.total_errors));
    }
    if summary.total_warnings > 0 {
        output.push_str(&format!(", {} warning(s)", summary.total_warnings));
    }
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::utils::Location;

    #[test]
    fn test_error_collector_basic() {
        let collector = ErrorCollector::new();
        let path = PathBuf::from("login.feature");

        collector.record_event(
            &path,
            LogEvent::error(codes::lexical::NO_SUCH_LANGUAGE, "Language not supported: xx"),
        );

        assert_eq!(collector.get_document_events(&path).len(), 1);
        assert_eq!(collector.get_document_errors(&path).len(), 1);
        assert!(collector.document_has_errors(&path));
    }

    #[test]
    fn test_processing_summary() {
        let collector = ErrorCollector::new();
        let clean = PathBuf::from("clean.feature");
        let broken = PathBuf::from("broken.feature");

        collector.record_document_context(DocumentContext::new(clean.clone(), 1));
        collector.record_document_context(DocumentContext::new(broken.clone(), 2));
        collector.record_event(
            &broken,
            LogEvent::error(codes::diagnostics::UNEXPECTED_TOKEN, "bad"),
        );

        let summary = collector.get_summary();
        assert_eq!(summary.total_documents, 2);
        assert_eq!(summary.successful_documents, 1);
        assert_eq!(summary.failed_documents, 1);
        assert_eq!(summary.total_errors, 1);
        assert!(summary.has_errors());
    }

    #[test]
    fn test_cargo_style_output() {
        let collector = ErrorCollector::new();
        let path = PathBuf::from("fr.feature");

        collector.record_event(
            &path,
            LogEvent::error(
                codes::lexical::NO_SUCH_LANGUAGE,
                "(1:1): Language not supported: xx",
            )
            .with_location(Location::new(1, 1))
            .with_context("language", "xx"),
        );

        let report = format_cargo_style_errors(&collector);
        assert!(report.contains("Checking fr.feature..."));
        assert!(report.contains("error[E020]: (1:1): Language not supported: xx"));
        assert!(report.contains("--> fr.feature:1:1"));
        assert!(report.contains("= language: xx"));
        assert!(report.contains("1 document(s) checked: 0 ok, 1 failed, 1 error(s)"));
    }

    #[test]
    fn test_clear() {
        let collector = ErrorCollector::new();
        let path = PathBuf::from("a.feature");
        collector.record_event(&path, LogEvent::warning("w"));
        collector.clear();
        assert_eq!(collector.get_summary().total_documents, 0);
    }
}
