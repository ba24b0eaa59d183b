pub mod compile_time {
    pub mod file_processing {
        /// Maximum size of a feature file accepted for tokenization (10MB)
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Files above this size are logged as large (1MB)
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;

        /// Extension recognised as a feature file
        pub const FEATURE_EXTENSION: &str = "feature";
    }

    pub mod lexical {
        /// Dialect used when a document carries no language directive
        pub const DEFAULT_DIALECT: &str = "en";

        /// Primary docstring fence
        pub const DOCSTRING_SEPARATOR: &str = "\"\"\"";

        /// Alternate docstring fence
        pub const DOCSTRING_ALTERNATIVE_SEPARATOR: &str = "```";

        /// Escaped form of the primary fence inside an open docstring
        pub const ESCAPED_DOCSTRING_SEPARATOR: &str = "\\\"\\\"\\\"";

        pub const COMMENT_PREFIX: &str = "#";
        pub const TAG_PREFIX: &str = "@";
        pub const TABLE_CELL_SEPARATOR: &str = "|";
        pub const TITLE_KEYWORD_SEPARATOR: &str = ":";

        /// Upper bound on diagnostics gathered for one document
        pub const MAX_COLLECTED_ERRORS: usize = 100;
    }

    pub mod logging {
        /// Total events kept by in-memory loggers
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Events kept per document by the error collector
        pub const MAX_LOG_EVENTS_PER_FILE: usize = 1_000;

        /// Characters kept from a log message before it is cut
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
