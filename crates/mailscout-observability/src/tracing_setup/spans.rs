//! Span definitions per boundary operation.

/// Create a span around one finder request.
#[macro_export]
macro_rules! finder_span {
    ($field_count:expr) => {
        tracing::info_span!("mailscout.find", field_count = $field_count)
    };
}

/// Create a span around engine initialization.
#[macro_export]
macro_rules! initialize_span {
    ($has_config:expr) => {
        tracing::info_span!("mailscout.initialize", has_config = $has_config)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FIND: &str = "mailscout.find";
    pub const INITIALIZE: &str = "mailscout.initialize";
}
