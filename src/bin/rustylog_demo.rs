//! Small demo: `rustylog_demo [config.ini]`.
//!
//! Without a config file the logger prints colored lines to stderr and also
//! writes warnings and above to `rustylog-demo.log` in the current directory.

use std::{process::ExitCode, sync::Arc, thread};

use rustylog::{
    BlockingLock, LogLevel, Logger, LoggerConfig, config::Config, logger_debug, logger_error,
    logger_info, logger_warn,
};

fn build_logger() -> Result<Logger, String> {
    if let Some(path) = std::env::args().nth(1) {
        let config = Config::load(&path)?;
        return Logger::from_config(&config).map_err(|e| e.to_string());
    }

    let mut logger = Logger::new(LoggerConfig::default().with_color(true));
    logger
        .add_file_path("rustylog-demo.log", LogLevel::Warn)
        .map_err(|e| e.to_string())?;
    Ok(logger)
}

fn main() -> ExitCode {
    let mut logger = match build_logger() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("rustylog_demo: {e}");
            return ExitCode::FAILURE;
        }
    };
    logger.set_lock(Some(Arc::new(BlockingLock::new())));
    let logger = Arc::new(logger);

    logger_info!(logger, "demo started with {} extra sink(s)", logger.sink_count());

    let workers: Vec<_> = (0..3)
        .map(|id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                logger_debug!(logger, "worker {id} starting");
                if id == 2 {
                    logger_warn!(logger, "worker {id} is running late");
                }
            })
        })
        .collect();

    for w in workers {
        if w.join().is_err() {
            logger_error!(logger, "a worker panicked");
        }
    }

    logger_info!(logger, "done");
    ExitCode::SUCCESS
}
