//! Shared Line Reset Sequencer
//!
//! Brings the PHYs out of reset by acquiring and driving the four shared
//! board lines, then pulsing the reset line. The sequence runs at most once
//! per [`ResetLatch`], however many devices attach through it.
//!
//! # Sequence
//!
//! For each line in [`ResetLine::ACQUISITION_ORDER`]:
//!
//! 1. Acquire the line under its configured label
//! 2. Drive it high as an output
//! 3. Hold for [`ResetTiming::settle_ms`]
//!
//! Then pulse the reset line low for [`ResetTiming::pulse_low_ms`] and back
//! high for [`ResetTiming::pulse_recovery_ms`].
//!
//! If any step fails, every line acquired so far (including one whose
//! acquire succeeded but whose drive failed) is released in reverse order and
//! the latch is left unset, so a later attach retries the whole sequence.
//! On success the lines stay held.

use embedded_hal::delay::DelayNs;

use crate::driver::config::{ResetLines, ResetTiming};
use crate::driver::error::{LineError, LineResult};
use crate::hal::gpio::{LineController, LineId, ResetLine};
use crate::internal::cs_cell::CriticalSectionCell;
use crate::internal::log::{phy_debug, phy_info, phy_warn};

// =============================================================================
// Reset Latch
// =============================================================================

/// Latch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchState {
    /// Sequence has not completed yet
    #[default]
    Idle,
    /// A caller has claimed the latch and is running the sequence
    Running,
    /// Sequence completed; holds the completion count
    Done(u32),
}

/// Result of [`ResetLatch::claim`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchClaim {
    /// Caller owns the sequence and must `complete` or `abandon` it
    Run,
    /// Sequence already completed, nothing to do
    Skip,
}

/// Run-once latch shared by every device on the same wiring
///
/// The check-and-claim step happens inside one critical section, so two
/// attach paths racing each other cannot both run the sequence.
#[derive(Debug)]
pub struct ResetLatch {
    state: CriticalSectionCell<LatchState>,
}

impl ResetLatch {
    /// Create an unset latch (const, suitable for static initialization)
    pub const fn new() -> Self {
        Self {
            state: CriticalSectionCell::new(LatchState::Idle),
        }
    }

    /// Try to take ownership of the sequence
    pub fn claim(&self) -> LineResult<LatchClaim> {
        self.state.with(|state| match *state {
            LatchState::Idle => {
                *state = LatchState::Running;
                Ok(LatchClaim::Run)
            }
            LatchState::Running => Err(LineError::SequenceInProgress),
            LatchState::Done(_) => Ok(LatchClaim::Skip),
        })
    }

    /// Record a successful run
    pub fn complete(&self) {
        self.state.with(|state| {
            if *state == LatchState::Running {
                *state = LatchState::Done(1);
            }
        });
    }

    /// Give up a claimed run, leaving the latch unset
    pub fn abandon(&self) {
        self.state.with(|state| {
            if *state == LatchState::Running {
                *state = LatchState::Idle;
            }
        });
    }

    /// Current state
    pub fn state(&self) -> LatchState {
        self.state.get()
    }

    /// Whether the sequence has completed
    pub fn is_done(&self) -> bool {
        matches!(self.state(), LatchState::Done(_))
    }

    /// Number of completed runs (0 or 1)
    pub fn count(&self) -> u32 {
        match self.state() {
            LatchState::Done(count) => count,
            _ => 0,
        }
    }
}

impl Default for ResetLatch {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Acquisition Guard
// =============================================================================

/// Lines acquired so far, released in reverse on drop unless committed
struct AcquiredLines<'a, L: LineController> {
    lines: &'a mut L,
    held: [LineId; 4],
    len: usize,
}

impl<'a, L: LineController> AcquiredLines<'a, L> {
    fn new(lines: &'a mut L) -> Self {
        Self {
            lines,
            held: [LineId(0); 4],
            len: 0,
        }
    }

    fn acquire(&mut self, role: ResetLine, id: LineId, label: &'static str) -> LineResult<()> {
        self.lines.acquire(id, label).map_err(|_| {
            phy_warn!("reset: acquire {} failed", role.as_str());
            LineError::RequestFailed(role)
        })?;
        self.held[self.len] = id;
        self.len += 1;
        Ok(())
    }

    fn set_output(&mut self, role: ResetLine, id: LineId, high: bool) -> LineResult<()> {
        self.lines.set_output(id, high).map_err(|_| {
            phy_warn!("reset: {} as output failed", role.as_str());
            LineError::DirectionFailed(role)
        })
    }

    fn set_value(&mut self, role: ResetLine, id: LineId, high: bool) -> LineResult<()> {
        self.lines.set_value(id, high).map_err(|_| {
            phy_warn!("reset: driving {} failed", role.as_str());
            LineError::DriveFailed(role)
        })
    }

    /// Keep the lines held
    fn commit(mut self) {
        self.len = 0;
    }
}

impl<L: LineController> Drop for AcquiredLines<'_, L> {
    fn drop(&mut self) {
        while self.len > 0 {
            self.len -= 1;
            let id = self.held[self.len];
            phy_debug!("reset: releasing line {}", id.0);
            self.lines.release(id);
        }
    }
}

// =============================================================================
// Reset Sequencer
// =============================================================================

/// What [`ResetSequencer::run`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetOutcome {
    /// Lines were acquired and the reset pulse issued
    Performed,
    /// Latch was already set, no line was touched
    AlreadyDone,
}

/// Staged line acquisition followed by a reset pulse
#[derive(Debug, Clone, Copy)]
pub struct ResetSequencer {
    lines: ResetLines,
    timing: ResetTiming,
}

impl ResetSequencer {
    /// Create a sequencer for the given wiring and timing
    pub const fn new(lines: ResetLines, timing: ResetTiming) -> Self {
        Self { lines, timing }
    }

    /// Run the sequence unless `latch` says it already ran
    pub fn run<L, D>(
        &self,
        latch: &ResetLatch,
        lines: &mut L,
        delay: &mut D,
    ) -> LineResult<ResetOutcome>
    where
        L: LineController,
        D: DelayNs,
    {
        if latch.claim()? == LatchClaim::Skip {
            phy_debug!("reset: already done, skipping");
            return Ok(ResetOutcome::AlreadyDone);
        }

        phy_info!("reset: acquiring shared lines");
        match self.sequence(lines, delay) {
            Ok(()) => {
                latch.complete();
                phy_info!("reset: complete");
                Ok(ResetOutcome::Performed)
            }
            Err(e) => {
                latch.abandon();
                Err(e)
            }
        }
    }

    fn sequence<L, D>(&self, lines: &mut L, delay: &mut D) -> LineResult<()>
    where
        L: LineController,
        D: DelayNs,
    {
        let mut acquired = AcquiredLines::new(lines);

        for role in ResetLine::ACQUISITION_ORDER {
            let spec = self.lines.spec(role);
            acquired.acquire(role, spec.id, spec.label)?;
            acquired.set_output(role, spec.id, true)?;
            delay.delay_ms(self.timing.settle_ms);
        }

        let reset = self.lines.reset.id;
        acquired.set_value(ResetLine::Reset, reset, false)?;
        delay.delay_ms(self.timing.pulse_low_ms);
        acquired.set_value(ResetLine::Reset, reset, true)?;
        delay.delay_ms(self.timing.pulse_recovery_ms);

        acquired.commit();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
