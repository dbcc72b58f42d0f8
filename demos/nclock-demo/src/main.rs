//! N-Clock terminal demo
//!
//! Runs the controller on the system clock with a file-backed store and
//! paints its view stream to stdout. Commands are read line by line:
//!
//!   n <12..48>            set the N-value
//!   sw                    start/stop the stopwatch
//!   lap                   lap while running, reset when stopped
//!   alarm add             add a 07:00 alarm
//!   alarm time <id> <h> <m>
//!   alarm on <id>         toggle an alarm
//!   alarm del <id>        delete an alarm
//!   preset save <name>    save the current N as a preset
//!   preset use <id>       apply a preset
//!   preset del <id>       delete a preset
//!   sec on|off            show/hide clock seconds
//!   lang ja|en            switch language
//!   quit

use std::sync::Arc;

use nclock_core::{AppEvent, Language};
use nclock_runtime::{Command, Controller, RuntimeConfig, UiEvent};
use nclock_store::JsonFileStore;
use nclock_time::SystemClock;
use tokio::sync::mpsc;
use tracing::warn;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./nclock-data".to_string());
    let store = Arc::new(JsonFileStore::new(&data_dir));
    let clock = Arc::new(SystemClock::new());

    let (controller, events) = Controller::new(clock, store, RuntimeConfig::default());
    let (cmd_tx, cmd_rx) = mpsc::channel(32);

    let painter = tokio::spawn(paint(events));
    let runtime = tokio::spawn(controller.run(cmd_rx));

    // Blocking stdin loop on its own thread; dropping the sender stops
    // the controller
    tokio::task::spawn_blocking(move || read_commands(cmd_tx))
        .await
        .ok();

    runtime.await.ok();
    painter.await.ok();
}

/// Paint the view stream. The clock redisplays every tick; only print it
/// when the string actually changes.
async fn paint(mut events: mpsc::Receiver<UiEvent>) {
    let mut last_clock = String::new();
    let mut last_stopwatch = String::new();
    let mut last_laps = 0usize;

    while let Some(event) = events.recv().await {
        match event {
            UiEvent::Clock(view) => {
                let line = format!("{}  ({})", view.time, view.n_caption);
                if line != last_clock {
                    println!("[clock] {line}");
                    last_clock = line;
                }
            }
            UiEvent::Stopwatch(view) => {
                if view.display != last_stopwatch {
                    println!(
                        "[stopwatch] {}  [{}] [{}]",
                        view.display, view.primary_label, view.secondary_label
                    );
                    last_stopwatch = view.display.clone();
                }
                // Laps repaint fully; only announce the newest
                if view.laps.len() != last_laps {
                    if let Some(newest) = view.laps.first() {
                        println!("[stopwatch] {}", newest.display);
                    }
                    last_laps = view.laps.len();
                }
            }
            UiEvent::Alarms(view) => {
                println!("[alarms] {}", view.add_label);
                for alarm in &view.alarms {
                    let state = if alarm.enabled { "on " } else { "off" };
                    println!("  #{} {} {} {}", alarm.id, alarm.time, state, alarm.label);
                }
            }
            UiEvent::Settings(view) => {
                println!(
                    "[settings] {}: {}  {}: {}  ({})",
                    view.show_seconds_label,
                    view.show_seconds,
                    view.presets_enabled_label,
                    view.presets_enabled,
                    view.language_name
                );
            }
            UiEvent::Alarm(AppEvent::AlarmFired {
                hour,
                minute,
                label,
                ..
            }) => {
                println!("*** {label} - {hour:02}:{minute:02} ***");
            }
        }
    }
}

/// Blocking stdin reader; closing the channel stops the controller
fn read_commands(cmd_tx: mpsc::Sender<Command>) {
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = match parts.as_slice() {
            ["quit"] | ["exit"] => return,
            ["n", raw] => raw.parse().ok().map(Command::SetN),
            ["sw"] => Some(Command::StopwatchToggle),
            ["lap"] => Some(Command::StopwatchLapOrReset),
            ["alarm", "add"] => Some(Command::AlarmAdd),
            ["alarm", "time", id, h, m] => {
                match (id.parse(), h.parse(), m.parse()) {
                    (Ok(id), Ok(hour), Ok(minute)) => Some(Command::AlarmSetTime {
                        id: nclock_core::AlarmId::new(id),
                        hour,
                        minute,
                    }),
                    _ => None,
                }
            }
            ["alarm", "on", id] => id
                .parse()
                .ok()
                .map(|id| Command::AlarmToggle(nclock_core::AlarmId::new(id))),
            ["alarm", "del", id] => id
                .parse()
                .ok()
                .map(|id| Command::AlarmDelete(nclock_core::AlarmId::new(id))),
            ["preset", "save", name @ ..] if !name.is_empty() => {
                Some(Command::SavePreset(name.join(" ")))
            }
            ["preset", "use", id] => id
                .parse()
                .ok()
                .map(|id| Command::ApplyPreset(nclock_core::PresetId::new(id))),
            ["preset", "del", id] => id
                .parse()
                .ok()
                .map(|id| Command::DeletePreset(nclock_core::PresetId::new(id))),
            ["sec", flag @ ("on" | "off")] => Some(Command::SetShowSeconds(*flag == "on")),
            ["lang", "ja"] => Some(Command::SetLanguage(Language::Ja)),
            ["lang", "en"] => Some(Command::SetLanguage(Language::En)),
            [] => None,
            _ => {
                warn!("unrecognized command: {}", line.trim());
                None
            }
        };
        if let Some(cmd) = cmd {
            if cmd_tx.blocking_send(cmd).is_err() {
                return;
            }
        }
    }
}
