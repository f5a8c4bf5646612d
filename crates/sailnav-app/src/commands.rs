//! Base-station commands typed on stdin.
//!
//! One command per line: `o` engages manual override, `a` returns control
//! to the autopilot, `q` stops the mission.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};

use sailnav_core::commands::RadioCommand;

pub fn parse_command(line: &str) -> Option<RadioCommand> {
    match line.trim() {
        "o" => Some(RadioCommand::Override),
        "a" => Some(RadioCommand::Autopilot),
        "q" => Some(RadioCommand::Quit),
        _ => None,
    }
}

/// Forward stdin commands to `tx` from a background thread.
///
/// The thread ends when stdin closes or the receiver is dropped.
pub fn spawn_stdin_reader(tx: mpsc::Sender<RadioCommand>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("sailnav-stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                match parse_command(&line) {
                    Some(command) => {
                        debug!("radio command {:?}", command);
                        if tx.send(command).is_err() {
                            break;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => warn!("unknown command {:?} (expected o, a or q)", line.trim()),
                }
            }
        })
}
