use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use serde::Deserialize;

/// Timing for the cycling hero text, in milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_speed_ms: u32,
    pub delete_speed_ms: u32,
    pub delay_ms: u32,
    pub looping: bool,
    pub cursor: String,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed_ms: 70,
            delete_speed_ms: 50,
            delay_ms: 1500,
            looping: true,
            cursor: "_".to_owned(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
    Done,
}

/// Type / hold / delete state machine over a list of words.
///
/// Each [`tick`](Typewriter::tick) advances one step and returns how long to
/// wait before the next one, or `None` once there is nothing left to animate.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    config: TypewriterConfig,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(words: &[S], config: TypewriterConfig) -> Self {
        let words: Vec<Vec<char>> = words.iter().map(|w| w.as_ref().chars().collect()).collect();
        let phase = if words.is_empty() { Phase::Done } else { Phase::Typing };
        Self { words, config, word: 0, shown: 0, phase }
    }

    /// Delay before the first tick.
    pub fn first_delay(&self) -> Option<u32> {
        (self.phase != Phase::Done).then_some(self.config.type_speed_ms)
    }

    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn tick(&mut self) -> Option<u32> {
        let len = self.words.get(self.word)?.len();
        let last = self.word + 1 == self.words.len();

        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown < len {
                    return Some(self.config.type_speed_ms);
                }
                if last && !self.config.looping {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = Phase::Holding;
                Some(self.config.delay_ms)
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.delete_one()
            }
            Phase::Deleting => self.delete_one(),
            Phase::Done => None,
        }
    }

    fn delete_one(&mut self) -> Option<u32> {
        self.shown = self.shown.saturating_sub(1);
        if self.shown > 0 {
            return Some(self.config.delete_speed_ms);
        }

        self.word = (self.word + 1) % self.words.len();
        self.phase = Phase::Typing;
        Some(self.config.type_speed_ms)
    }
}

/// Read side of a liveness flag; goes false once its [`AliveGuard`] drops.
#[derive(Clone)]
pub struct Alive(Rc<Cell<bool>>);

impl Alive {
    pub fn get(&self) -> bool {
        self.0.get()
    }
}

pub struct AliveGuard(Rc<Cell<bool>>);

impl Drop for AliveGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub fn liveness() -> (AliveGuard, Alive) {
    let flag = Rc::new(Cell::new(true));
    (AliveGuard(flag.clone()), Alive(flag))
}

/// Runs `machine` to completion, waiting on `sleep` between steps and
/// publishing each new text through `on_text`.
///
/// Returns without ticking again as soon as `alive` reads false after a wait.
pub async fn drive<S, F>(mut machine: Typewriter, alive: Alive, mut on_text: impl FnMut(String), sleep: S)
where
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    let Some(mut delay) = machine.first_delay() else { return };
    loop {
        sleep(delay).await;
        if !alive.get() {
            return;
        }

        let next = machine.tick();
        on_text(machine.text());

        match next {
            Some(d) => delay = d,
            None => return,
        }
    }
}
