#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::{
    sync::{Arc, Mutex},
    thread,
};

use common::{SharedBuf, Tagged};
use rustylog::{
    BlockingLock, LogError, LogLevel, Logger, LoggerConfig, TimestampMode, logger_error,
    logger_info, logger_log,
};

fn plain_config() -> LoggerConfig {
    LoggerConfig::default().with_timestamp(TimestampMode::None)
}

#[test]
fn warn_file_sink_skips_info_and_writes_error() {
    let mut logger = Logger::with_writer(LoggerConfig::default(), std::io::sink());
    logger.set_quiet(true);
    let file = SharedBuf::default();
    logger.add_file_sink(file.clone(), LogLevel::Warn).unwrap();

    logger_info!(logger, "cache warmed");
    assert_eq!(file.text(), "");

    let line = line!() + 1;
    logger_error!(logger, "upstream returned {}", 502);
    let lines = file.lines();
    assert_eq!(lines.len(), 1);

    // YYYY-MM-DD HH:MM:SS LEVEL file:line: message
    let l = &lines[0];
    let (date, rest) = l.split_at(10);
    let b = date.as_bytes();
    assert!(b[4] == b'-' && b[7] == b'-', "bad date in {l}");
    let (time, rest) = rest.split_at(9);
    assert!(time.starts_with(' ') && time[1..].chars().filter(|c| *c == ':').count() == 2);
    assert_eq!(
        rest,
        format!(" ERROR {}:{line}: upstream returned 502", file!())
    );
}

#[test]
fn full_registry_keeps_original_sinks() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let standard = SharedBuf::default();
    let mut logger = Logger::with_writer(plain_config(), standard.clone());

    for tag in 0..10 {
        let sink = Tagged { tag, journal: Arc::clone(&journal) };
        logger.add_sink(Arc::new(sink), LogLevel::Trace).unwrap();
    }
    let extra = Tagged { tag: 10, journal: Arc::clone(&journal) };
    let err = logger.add_sink(Arc::new(extra), LogLevel::Trace).unwrap_err();
    assert!(matches!(err, LogError::RegistryFull { capacity: 10 }));
    assert_eq!(err.to_string(), "sink registry full (10 slots)");

    logger_log!(logger, LogLevel::Info, "tick");
    assert_eq!(*journal.lock().unwrap(), (0..10usize).collect::<Vec<_>>());
    assert_eq!(standard.lines().len(), 1);
}

#[test]
fn quiet_only_mutes_standard_sink() {
    let standard = SharedBuf::default();
    let file = SharedBuf::default();
    let mut logger = Logger::with_writer(plain_config(), standard.clone());
    logger.add_file_sink(file.clone(), LogLevel::Debug).unwrap();
    logger.set_quiet(true);

    logger.log(LogLevel::Debug, "q.rs", 4, format_args!("still here"));
    assert_eq!(standard.text(), "");
    assert_eq!(file.text(), "DEBUG q.rs:4: still here\n");
}

#[test]
fn standard_sink_precedes_registered_sinks() {
    // One shared buffer, so write order is observable. The standard sink is
    // colored to tell its lines apart.
    let shared = SharedBuf::default();
    let mut logger = Logger::with_writer(
        plain_config().with_color(true).with_location(false),
        shared.clone(),
    );
    logger.add_file_sink(shared.clone(), LogLevel::Trace).unwrap();
    logger.add_file_sink(shared.clone(), LogLevel::Info).unwrap();

    logger.log(LogLevel::Warn, "o.rs", 1, format_args!("first"));
    logger.log(LogLevel::Debug, "o.rs", 2, format_args!("second"));

    assert_eq!(
        shared.lines(),
        [
            "\x1b[33mWARN \x1b[0m first",
            "WARN  o.rs:1: first",
            "WARN  o.rs:1: first",
            "\x1b[36mDEBUG\x1b[0m second",
            "DEBUG o.rs:2: second",
        ]
    );
}

#[test]
fn message_body_matches_format() {
    let file = SharedBuf::default();
    let mut logger = Logger::with_writer(plain_config(), std::io::sink());
    logger.add_file_sink(file.clone(), LogLevel::Trace).unwrap();

    let (name, n, ratio) = ("eth0", 7u32, 0.125f64);
    logger.log(
        LogLevel::Info,
        "m.rs",
        3,
        format_args!("{name}: {n:>4} pkts, {ratio:.2} {:#x} {:?}", 255, "q"),
    );

    let expected = format!("{name}: {n:>4} pkts, {ratio:.2} {:#x} {:?}", 255, "q");
    let text = file.text();
    let body = text.strip_prefix("INFO  m.rs:3: ").unwrap();
    assert_eq!(body, format!("{expected}\n"));
}

#[test]
fn file_path_sink_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "existing\n").unwrap();

    let mut logger = Logger::with_writer(plain_config(), std::io::sink());
    logger.add_file_path(&path, LogLevel::Error).unwrap();
    logger.log(LogLevel::Fatal, "p.rs", 10, format_args!("out of memory"));
    logger.log(LogLevel::Warn, "p.rs", 11, format_args!("ignored"));

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "existing\nFATAL p.rs:10: out of memory\n");
}

#[test]
fn file_path_open_failure_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no/such/dir/app.log");
    let mut logger = Logger::with_writer(plain_config(), std::io::sink());
    assert!(matches!(
        logger.add_file_path(&missing, LogLevel::Trace),
        Err(LogError::Io(_))
    ));
    assert_eq!(logger.sink_count(), 0);
}

#[test]
fn shared_logger_with_blocking_lock_keeps_lines_whole() {
    let shared = SharedBuf::default();
    let mut logger = Logger::with_writer(plain_config(), shared.clone());
    logger.add_file_sink(shared.clone(), LogLevel::Trace).unwrap();
    logger.set_lock(Some(Arc::new(BlockingLock::new())));
    let logger = Arc::new(logger);

    let workers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..25 {
                    logger.log(LogLevel::Info, "w.rs", t, format_args!("worker {t} item {i}"));
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    let lines = shared.lines();
    assert_eq!(lines.len(), 200);
    // The lock holds across both sinks, so each call's two lines are adjacent.
    for pair in lines.chunks(2) {
        assert_eq!(pair[0], pair[1]);
        assert!(pair[0].starts_with("INFO  w.rs:"));
    }
}
