//! # Key Events
//!
//! The editor does not read the keyboard itself. A [`KeyEventSource`] turns
//! the host's key handling into discrete [`KeySignal`]s, and the session
//! subscribes to it for as long as it lives.
//!
//! Signals are delivered once per subscribed listener, so subscribing the
//! same session twice would trigger every undo twice. The session guards
//! against that, see [`crate::session::EditorSession::attach_keys`].

use crate::error::{NoteError, Result};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySignal {
    UndoRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub trait KeyEventSource {
    fn subscribe(&mut self) -> ListenerId;

    /// Unknown ids are ignored.
    fn unsubscribe(&mut self, id: ListenerId);

    /// Take every signal queued for `id` since the last drain.
    fn drain(&mut self, id: ListenerId) -> Vec<KeySignal>;
}

/// In-process source for hosts that see key presses as values.
#[derive(Debug, Default)]
pub struct LocalKeySource {
    next_id: u64,
    queues: HashMap<ListenerId, VecDeque<KeySignal>>,
}

impl LocalKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `signal` for every listener. Returns how many received it.
    pub fn emit(&mut self, signal: KeySignal) -> usize {
        for queue in self.queues.values_mut() {
            queue.push_back(signal);
        }
        self.queues.len()
    }

    pub fn listener_count(&self) -> usize {
        self.queues.len()
    }
}

impl KeyEventSource for LocalKeySource {
    fn subscribe(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.queues.insert(id, VecDeque::new());
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.queues.remove(&id);
    }

    fn drain(&mut self, id: ListenerId) -> Vec<KeySignal> {
        self.queues
            .get_mut(&id)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }
}

/// A key combination such as `ctrl+z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: char,
}

impl KeyChord {
    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            key: key.to_ascii_lowercase(),
            ..Self::default()
        }
    }
}

impl FromStr for KeyChord {
    type Err = NoteError;

    /// Accepts `ctrl+z`, `Cmd+Z`, `alt+shift+u` and the caret form `^z`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || NoteError::InvalidKeyChord(s.to_string());

        if let Some(rest) = s.strip_prefix('^') {
            let mut chars = rest.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_alphanumeric() => Ok(KeyChord::ctrl(c)),
                _ => Err(invalid()),
            };
        }

        let mut chord = KeyChord::default();
        let mut key = None;
        for part in s.split('+') {
            match part.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "cmd" | "meta" | "super" => chord.meta = true,
                "alt" | "option" => chord.alt = true,
                "shift" => chord.shift = true,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next(), key) {
                        (Some(c), None, None) => key = Some(c),
                        _ => return Err(invalid()),
                    }
                }
            }
        }

        chord.key = key.ok_or_else(invalid)?;
        if !(chord.ctrl || chord.meta || chord.alt) {
            return Err(invalid());
        }
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.meta {
            write!(f, "cmd+")?;
        }
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.key)
    }
}
