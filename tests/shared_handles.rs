// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::thread;

use levelog::ErrorKind;
use levelog::Level;
use levelog::Registry;
use levelog::append::Buffer;
use levelog::layout::TextLayout;

fn bare_logger(registry: &Registry, name: &str, buffer: &Buffer, call_site: bool) {
    registry
        .try_register(
            levelog::builder(name, buffer.clone())
                .layout(TextLayout::bare())
                .call_site(call_site),
        )
        .unwrap();
}

#[test]
fn test_threshold_changes_through_lookup() {
    let registry = Registry::new();
    let buffer = Buffer::default();
    bare_logger(&registry, "A", &buffer, false);

    let logger = registry.lookup("A").unwrap();
    logger.set_level(Level::INFO);
    logger.debug("x");
    assert!(buffer.is_empty());
    logger.warning("y");
    assert_eq!(buffer.lines(), vec!["WARNING: y"]);

    // a second handle shares the level
    let other = registry.lookup("A").unwrap();
    other.set_level(Level::ERROR);
    assert_eq!(logger.level(), Level::ERROR);

    logger.warning("y");
    logger.error("z");
    assert_eq!(buffer.lines(), vec!["WARNING: y", "ERROR: z"]);
}

#[test]
fn test_repeated_set_level_is_idempotent() {
    let registry = Registry::new();
    let buffer = Buffer::default();
    bare_logger(&registry, "idem", &buffer, false);
    let logger = registry.lookup("idem").unwrap();

    for _ in 0..3 {
        logger.set_level(Level::WARNING);
    }
    logger.info("dropped");
    logger.warning("kept");

    logger.set_level(Level::FATAL);
    logger.set_level(Level::DEBUG);
    logger.debug("last call wins");
    assert_eq!(buffer.lines(), vec!["WARNING: kept", "DEBUG: last call wins"]);
}

#[test]
fn test_call_site_through_macros() {
    let registry = Registry::new();
    let buffer = Buffer::default();
    bare_logger(&registry, "B", &buffer, true);
    let logger = registry.lookup("B").unwrap();

    let line = line!() + 1;
    levelog::info!(logger, "hi {}", 1);
    logger.info("hi");

    assert_eq!(
        buffer.lines(),
        vec![
            format!("INFO: shared_handles.rs:{line}: hi 1"),
            format!("INFO: shared_handles.rs:{}: hi", line + 1),
        ]
    );
}

#[test]
fn test_default_layout_with_call_site() {
    let registry = Registry::new();
    let buffer = Buffer::default();
    let logger = registry.create("dated", buffer.clone(), true).unwrap();

    logger.info("hi");

    // 2024/08/11 22:44:57 INFO: shared_handles.rs:NN: hi
    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let (header, rest) = lines[0].split_at(20);
    let bytes = header.as_bytes();
    assert_eq!(bytes[4], b'/');
    assert_eq!(bytes[7], b'/');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
    assert_eq!(bytes[16], b':');
    assert_eq!(bytes[19], b' ');
    assert!(rest.starts_with("INFO: shared_handles.rs:"));
    assert!(rest.ends_with(": hi"));
}

#[test]
fn test_duplicate_name_with_different_parameters() {
    let registry = Registry::new();
    let buffer = Buffer::default();
    bare_logger(&registry, "dup", &buffer, false);

    let err = registry.create("dup", Buffer::default(), true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    assert!(err.to_string().contains("dup"));
    assert!(registry.lookup("never-created").is_none());
}

#[test]
fn test_concurrent_create_only_one_wins() {
    let registry = Arc::new(Registry::new());
    let handles = (0..16)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || registry.create("race", Buffer::default(), false).is_ok())
        })
        .collect::<Vec<_>>();

    let created = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(created, 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_loggers_on_threads_share_destination() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::default();
    bare_logger(&registry, "threads", &buffer, false);

    let handles = (0..4)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                let logger = registry.lookup("threads").unwrap();
                for j in 0..25 {
                    levelog::info!(logger, "{i}-{j}");
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 100);
    assert!(lines.iter().all(|line| line.starts_with("INFO: ")));
}
