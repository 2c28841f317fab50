//! Embedding model readiness
//!
//! Process-wide lifecycle of the embedding backend. Health endpoints poll
//! [`ModelReadiness::state`] instead of reading a free-standing flag.
//!
//! ```text
//! Uninitialized -> Loading -> Ready
//!                         \-> Failed -> Loading (retry)
//! ```

use scb_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle state of the embedding model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessState {
    /// Nothing has been attempted yet
    Uninitialized,
    /// Model or backend is being brought up
    Loading,
    /// Embedding calls may be served
    Ready,
    /// Bring-up failed; see [`ModelReadiness::failure_reason`]
    Failed,
}

impl ReadinessState {
    fn as_u8(self) -> u8 {
        match self {
            Self::Uninitialized => 0,
            Self::Loading => 1,
            Self::Ready => 2,
            Self::Failed => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Loading,
            2 => Self::Ready,
            3 => Self::Failed,
            _ => Self::Uninitialized,
        }
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::Loading)
                | (Self::Loading, Self::Ready)
                | (Self::Loading, Self::Failed)
                | (Self::Failed, Self::Loading)
        )
    }
}

impl fmt::Display for ReadinessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Atomic readiness cell, shared via `Arc`
#[derive(Debug)]
pub struct ModelReadiness {
    state: AtomicU8,
    failure: Mutex<Option<String>>,
}

impl Default for ModelReadiness {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelReadiness {
    /// New cell in [`ReadinessState::Uninitialized`]
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(ReadinessState::Uninitialized.as_u8()),
            failure: Mutex::new(None),
        }
    }

    /// Current state
    pub fn state(&self) -> ReadinessState {
        ReadinessState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// True only in [`ReadinessState::Ready`]
    pub fn is_ready(&self) -> bool {
        self.state() == ReadinessState::Ready
    }

    /// Enter `Loading` from `Uninitialized` or `Failed`
    pub fn begin_loading(&self) -> Result<()> {
        let result = self.transition(ReadinessState::Loading);
        if result.is_ok() {
            self.set_failure(None);
        }
        result
    }

    /// Enter `Ready` from `Loading`
    pub fn mark_ready(&self) -> Result<()> {
        self.transition(ReadinessState::Ready)
    }

    /// Enter `Failed` from `Loading`, recording why
    pub fn mark_failed(&self, reason: impl Into<String>) -> Result<()> {
        self.transition(ReadinessState::Failed)?;
        self.set_failure(Some(reason.into()));
        Ok(())
    }

    /// Reason recorded by the last [`ModelReadiness::mark_failed`]
    pub fn failure_reason(&self) -> Option<String> {
        self.failure
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn transition(&self, next: ReadinessState) -> Result<()> {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            let from = ReadinessState::from_u8(current);
            if !from.can_transition_to(next) {
                return Err(Error::internal(format!(
                    "Invalid readiness transition: {from} -> {next}"
                )));
            }
            match self.state.compare_exchange(
                current,
                next.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    tracing::debug!(from = %from, to = %next, "Embedding model readiness changed");
                    return Ok(());
                }
                Err(actual) => current = actual,
            }
        }
    }

    fn set_failure(&self, reason: Option<String>) {
        match self.failure.lock() {
            Ok(mut guard) => *guard = reason,
            Err(poisoned) => *poisoned.into_inner() = reason,
        }
    }
}
