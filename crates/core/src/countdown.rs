use std::num::NonZeroU32;

/// Seconds each question stays on screen before auto-advancing.
pub const DEFAULT_SECONDS_PER_QUESTION: NonZeroU32 = match NonZeroU32::new(25) {
    Some(value) => value,
    None => unreachable!(),
};

/// Handle for one scheduled countdown.
///
/// Every restart or cancel issues a new generation, so ticks carrying an older
/// ticket are recognised as stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    generation: u64,
}

/// Result of delivering one one-second tick to a `Countdown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// The ticket no longer matches the armed countdown.
    Stale,
    /// Still counting; carries the seconds left.
    Running(u32),
    /// Reached zero. The countdown disarms itself.
    Expired,
}

/// Per-question countdown state.
///
/// Holds no clock of its own: whoever schedules the ticks passes back the
/// `TimerTicket` it was given, and this type decides whether the tick still counts.
#[derive(Debug, Clone)]
pub struct Countdown {
    per_question: NonZeroU32,
    remaining: u32,
    generation: u64,
    armed: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS_PER_QUESTION)
    }
}

impl Countdown {
    #[must_use]
    pub fn new(per_question: NonZeroU32) -> Self {
        Self {
            per_question,
            remaining: per_question.get(),
            generation: 0,
            armed: false,
        }
    }

    #[must_use]
    pub fn per_question(&self) -> NonZeroU32 {
        self.per_question
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// The ticket of the armed countdown, if any.
    #[must_use]
    pub fn ticket(&self) -> Option<TimerTicket> {
        self.armed.then_some(TimerTicket {
            generation: self.generation,
        })
    }

    /// Cancel any armed countdown and start a fresh one at the full duration.
    pub fn restart(&mut self) -> TimerTicket {
        self.generation = self.generation.wrapping_add(1);
        self.remaining = self.per_question.get();
        self.armed = true;
        TimerTicket {
            generation: self.generation,
        }
    }

    /// Disarm the countdown; outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.armed = false;
    }

    pub fn tick(&mut self, ticket: TimerTicket) -> CountdownTick {
        if !self.armed || ticket.generation != self.generation {
            return CountdownTick::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.armed = false;
            return CountdownTick::Expired;
        }
        CountdownTick::Running(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn counts_down_and_expires_once() {
        let mut countdown = Countdown::new(secs(3));
        let ticket = countdown.restart();

        assert_eq!(countdown.tick(ticket), CountdownTick::Running(2));
        assert_eq!(countdown.tick(ticket), CountdownTick::Running(1));
        assert_eq!(countdown.tick(ticket), CountdownTick::Expired);
        assert_eq!(countdown.tick(ticket), CountdownTick::Stale);
        assert!(!countdown.is_armed());
    }

    #[test]
    fn restart_invalidates_previous_ticket() {
        let mut countdown = Countdown::new(secs(5));
        let first = countdown.restart();
        assert_eq!(countdown.tick(first), CountdownTick::Running(4));

        let second = countdown.restart();
        assert_eq!(countdown.remaining(), 5);
        assert_eq!(countdown.tick(first), CountdownTick::Stale);
        assert_eq!(countdown.remaining(), 5);
        assert_eq!(countdown.tick(second), CountdownTick::Running(4));
    }

    #[test]
    fn cancel_stales_ticket() {
        let mut countdown = Countdown::new(secs(5));
        let ticket = countdown.restart();
        countdown.cancel();
        assert_eq!(countdown.tick(ticket), CountdownTick::Stale);
        assert!(countdown.ticket().is_none());
    }

    #[test]
    fn one_second_countdown_expires_on_first_tick() {
        let mut countdown = Countdown::new(secs(1));
        let ticket = countdown.restart();
        assert_eq!(countdown.tick(ticket), CountdownTick::Expired);
    }
}
