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

use std::fs::File;
use std::fs::OpenOptions;

use qlog::ERROR;
use qlog::INFO;
use qlog::ManualClock;
use qlog::WARN;

fn clock() -> ManualClock {
    ManualClock::new("2024-08-10T09:12:52.042Z".parse().unwrap())
}

#[test]
fn test_owned_file_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");

    let file = File::create(&path).unwrap();
    let mut log = qlog::builder().verbosity(WARN).clock(clock()).build(file);
    log.select(ERROR).unwrap().write("disk full").unwrap();
    log.select(INFO).unwrap().write("details").unwrap();
    log.finish().unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\n2024-08-10T09:12:52.042Z [ERROR] disk full\n"
    );
}

#[test]
fn test_borrowed_file_sink_outlives_loggers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.log");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .unwrap();

    for name in ["first", "second"] {
        let mut log = qlog::builder().clock(clock()).build(&mut file);
        log.select(WARN).unwrap().write(name).unwrap();
    }

    let mut log = qlog::builder().build(&mut file);
    log.write("still open").unwrap();
    drop(log);

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        concat!(
            "\n2024-08-10T09:12:52.042Z [WARN] first\n",
            "\n2024-08-10T09:12:52.042Z [WARN] second\n",
            "still open\n",
        )
    );
}
