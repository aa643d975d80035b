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

use levelog::Level;
use levelog::append::Buffer;
use levelog::layout::TextLayout;

// the log crate global logger can be set once per process, so this file holds a single test
#[test]
fn test_log_macros_reach_named_logger() {
    let buffer = Buffer::default();
    let logger = levelog::global().register(
        levelog::builder("log-bridge", buffer.clone())
            .layout(TextLayout::bare())
            .call_site(true)
            .level(Level::INFO),
    );
    levelog::bridge::setup_log_crate(logger.clone());

    log::debug!("dropped");
    let line = line!() + 1;
    log::warn!("forwarded {}", 42);
    log::logger().log(
        &log::Record::builder()
            .args(format_args!("no location"))
            .level(log::Level::Error)
            .build(),
    );

    assert_eq!(
        buffer.lines(),
        vec![
            format!("WARNING: log_bridge.rs:{line}: forwarded 42"),
            "ERROR: Unknown:0: no location".to_string(),
        ]
    );

    // the logger's level keeps gating after setup
    logger.set_level(Level::ERROR);
    log::warn!("dropped too");
    assert_eq!(buffer.lines().len(), 2);
}
