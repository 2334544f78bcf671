use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event consumed by the game loop.
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Where the loop gets its input. `None` means nothing arrived within the
/// timeout; the driver turns that into a tick.
pub trait EventSource {
    fn next_event(&mut self, timeout: Duration) -> Option<GameEvent>;
}

/// Terminal input via `crossterm::event::poll`, read on the loop thread.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self, timeout: Duration) -> Option<GameEvent> {
        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(CtEvent::Key(key)) => Some(GameEvent::Key(key)),
                Ok(CtEvent::Resize(_, _)) => Some(GameEvent::Resize),
                // Mouse/focus/paste events are not part of the game.
                _ => None,
            },
            _ => None,
        }
    }
}

/// Scripted input for unit and headless integration tests: hands out the
/// queued events in order, then times out forever (so the driver ticks).
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    queue: VecDeque<GameEvent>,
}

impl ScriptedEventSource {
    pub fn new(events: impl IntoIterator<Item = GameEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push_back(event);
    }
}

impl EventSource for ScriptedEventSource {
    fn next_event(&mut self, _timeout: Duration) -> Option<GameEvent> {
        self.queue.pop_front()
    }
}

/// Drives the game one event at a time: waits up to the tick interval for
/// input and yields `Tick` when none arrives, so timers keep moving while
/// the child thinks.
pub struct Runner<E: EventSource> {
    source: E,
    tick_interval: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(source: E, tick_interval: Duration) -> Self {
        Self {
            source,
            tick_interval,
        }
    }

    pub fn step(&mut self) -> GameEvent {
        self.source
            .next_event(self.tick_interval)
            .unwrap_or(GameEvent::Tick)
    }
}
