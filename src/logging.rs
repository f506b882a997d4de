//! Diagnostic logging for debug builds.
//!
//! The terminal UI owns stdout and stderr, so log output goes to a file
//! in the working directory instead. Logging stays off unless `SKQ_LOG`
//! is set (e.g. `SKQ_LOG=debug skq`); release builds compile it out
//! entirely and keep the default no-op logger.

/// Log file written next to wherever skq was launched
#[cfg(debug_assertions)]
const LOG_FILE: &str = "skq.log";

/// Initialize the file logger
pub fn init() {
    #[cfg(debug_assertions)]
    {
        use std::fs::File;

        if std::env::var_os("SKQ_LOG").is_none() {
            return;
        }

        let file = match File::create(LOG_FILE) {
            Ok(file) => file,
            // No log file means no logging, never a startup failure
            Err(_) => return,
        };

        let _ = env_logger::Builder::from_env(env_logger::Env::new().filter("SKQ_LOG"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}
