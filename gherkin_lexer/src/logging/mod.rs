//! Global logging for the Gherkin lexer
//!
//! Provides a process-wide logging service and error collector, a per-thread
//! document context, cargo-style error reporting, and the `log_*!` macros.
//! Logging before [`init_global_logging`] is a silent no-op.

pub mod codes;
pub mod collector;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::utils::Location;
use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use collector::{DocumentContext, ErrorCollector, ProcessingSummary};
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();
static GLOBAL_ERROR_COLLECTOR: OnceLock<Arc<ErrorCollector>> = OnceLock::new();

thread_local! {
    static DOCUMENT_CONTEXT: RefCell<Option<DocumentContext>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from the installed preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());
    init_global_logging_with_service(logging_service.clone())?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with a custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    GLOBAL_ERROR_COLLECTOR
        .set(Arc::new(ErrorCollector::new()))
        .map_err(|_| "Global error collector already initialized")?;

    Ok(())
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

pub fn try_get_global_error_collector() -> Option<&'static ErrorCollector> {
    GLOBAL_ERROR_COLLECTOR
        .get()
        .map(|collector| collector.as_ref())
}

// ============================================================================
// DOCUMENT CONTEXT MANAGEMENT
// ============================================================================

/// Set the document being processed on this thread
pub fn set_document_context(path: PathBuf, document_id: usize) {
    let context = DocumentContext::new(path, document_id);

    if let Some(collector) = try_get_global_error_collector() {
        collector.record_document_context(context.clone());
    }

    DOCUMENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(context);
    });
}

pub fn clear_document_context() {
    DOCUMENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Run `f` with a document context installed
pub fn with_document_context<F, R>(path: PathBuf, document_id: usize, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_document_context(path, document_id);
    let result = f();
    clear_document_context();
    result
}

pub fn get_current_document_context() -> Option<DocumentContext> {
    DOCUMENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn attach_document(event: LogEvent) -> LogEvent {
    match get_current_document_context() {
        Some(ctx) => event
            .with_context("file", &ctx.path.display().to_string())
            .with_context("document_id", &ctx.document_id.to_string()),
        None => event,
    }
}

/// Send an event to the global logger, and errors and warnings to the
/// collector of the current document
pub fn log_event_with_document(event: LogEvent) {
    let event = attach_document(event);
    let collect = event.is_error() || event.is_warning();

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event.clone());
    }

    if collect {
        if let (Some(ctx), Some(collector)) =
            (get_current_document_context(), try_get_global_error_collector())
        {
            collector.record_event(&ctx.path, event);
        }
    }
}

/// Used by `log_error!`
pub fn log_error_with_context(
    code: Code,
    message: &str,
    location: Option<Location>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);

    if let Some(location) = location {
        event = event.with_location(location);
    }

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    log_event_with_document(event);
}

/// Used by `log_success!`
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::success(code, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    log_event_with_document(event);
}

/// Used by `log_info!`
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::info(message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    log_event_with_document(event);
}

// ============================================================================
// REPORTING
// ============================================================================

pub fn get_processing_summary() -> ProcessingSummary {
    try_get_global_error_collector()
        .map(|collector| collector.get_summary())
        .unwrap_or_default()
}

/// Cargo-style report of everything collected so far
pub fn cargo_style_summary() -> Option<String> {
    try_get_global_error_collector().map(collector::format_cargo_style_errors)
}
