//! Quiz session state machine.
//!
//! One session is one player's state: the current round, the running
//! score, whether the round has been answered, and whether the game is
//! still active. Transitions are guarded: a round is answered exactly
//! once, and a paused session accepts no further input (a fresh process
//! run is the only way back).

use crate::catalog::{Catalog, PlaceRecord};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fmt;

/// Candidate answers shown per round.
pub const OPTIONS_PER_ROUND: usize = 3;

/// Outcome of an answered round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Transition guard violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `submit` after the current round already has a result.
    AlreadyAnswered,
    /// `play_next`/`exit` before the current round was answered.
    RoundNotAnswered,
    /// Any transition on a paused session.
    Paused,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAnswered => write!(f, "This round was already answered"),
            Self::RoundNotAnswered => write!(f, "Answer the current round first"),
            Self::Paused => write!(f, "The game is paused; start a new run to play again"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One question cycle: the chosen place plus its candidate options.
#[derive(Debug, Clone)]
pub struct Round {
    pub question: PlaceRecord,
    pub options: Vec<PlaceRecord>,
}

/// Per-player game state. Owns the catalog and its random source.
pub struct Session {
    catalog: Catalog,
    rng: ChaCha20Rng,
    round: Round,
    score: u32,
    last_result: Option<Verdict>,
    active: bool,
}

impl Session {
    /// Start a session with OS randomness and deal the first round.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, ChaCha20Rng::from_os_rng())
    }

    /// Start a session with a caller-supplied generator, for
    /// deterministic question order (`--seed`, tests).
    pub fn with_rng(catalog: Catalog, mut rng: ChaCha20Rng) -> Self {
        let round = deal_round(catalog.places(), &mut rng);
        Self {
            catalog,
            rng,
            round,
            score: 0,
            last_result: None,
            active: true,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_result(&self) -> Option<Verdict> {
        self.last_result
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Answer the current round. Exact string match against the
    /// question's name. Valid once per round, while active.
    pub fn submit(&mut self, answer: &str) -> Result<Verdict, SessionError> {
        if !self.active {
            return Err(SessionError::Paused);
        }
        if self.last_result.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }

        let verdict = if answer == self.round.question.name {
            self.score += 1;
            Verdict::Correct
        } else {
            Verdict::Wrong
        };
        self.last_result = Some(verdict);
        Ok(verdict)
    }

    /// Deal the next round. Keeps the score; requires an answered round.
    pub fn play_next(&mut self) -> Result<(), SessionError> {
        if !self.active {
            return Err(SessionError::Paused);
        }
        if self.last_result.is_none() {
            return Err(SessionError::RoundNotAnswered);
        }
        self.round = deal_round(self.catalog.places(), &mut self.rng);
        self.last_result = None;
        Ok(())
    }

    /// Reset the score and deal a fresh round. The caller refreshes the
    /// whole view afterwards.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if !self.active {
            return Err(SessionError::Paused);
        }
        self.score = 0;
        self.round = deal_round(self.catalog.places(), &mut self.rng);
        self.last_result = None;
        self.active = true;
        Ok(())
    }

    /// Pause the game. Requires an answered round; irreversible within
    /// this process.
    pub fn exit(&mut self) -> Result<(), SessionError> {
        if !self.active {
            return Err(SessionError::Paused);
        }
        if self.last_result.is_none() {
            return Err(SessionError::RoundNotAnswered);
        }
        self.active = false;
        Ok(())
    }
}

/// Deal one round:
/// pick the question uniformly, sample three distinct options without
/// replacement, force the question in if the sample missed it, shuffle.
///
/// Postcondition: exactly three options containing the question exactly
/// once (catalog entries are distinct; `Catalog` guarantees the size).
fn deal_round(places: &[PlaceRecord], rng: &mut ChaCha20Rng) -> Round {
    assert!(places.len() >= OPTIONS_PER_ROUND, "catalog below minimum playable size");

    let question = places[rng.random_range(0..places.len())].clone();
    let mut options: Vec<PlaceRecord> = places
        .choose_multiple(rng, OPTIONS_PER_ROUND)
        .cloned()
        .collect();
    if !options.contains(&question) {
        options[0] = question.clone();
    }
    options.shuffle(rng);

    Round { question, options }
}
