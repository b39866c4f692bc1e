use std::fmt;

use crate::domain::Observation;

/// Trading session an hour of the day belongs to (broker time, UTC+2).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum TradingSession {
    Overlap,
    London,
    NewYork,
    OffHours,
}

impl TradingSession {
    /// Rules are checked in order and the first match wins. The ranges overlap on purpose:
    /// 14-17 is both London and NY, and is reported as the overlap.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            14..=17 => TradingSession::Overlap,
            9..=17 => TradingSession::London,
            14..=22 => TradingSession::NewYork,
            _ => TradingSession::OffHours,
        }
    }
}

impl fmt::Display for TradingSession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `pad` so callers can use width specifiers in table rows
        match self {
            TradingSession::Overlap => f.pad("OVERLAP"),
            TradingSession::London => f.pad("LONDON"),
            TradingSession::NewYork => f.pad("NY"),
            TradingSession::OffHours => f.pad("OFF-HOURS"),
        }
    }
}

/// How a `SessionWindow` selects observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRule {
    /// `from <= hour < to`
    Hours { from: u32, to: u32 },
    /// `hour >= from || hour < to` (window crosses midnight)
    HoursWrapping { from: u32, to: u32 },
    /// Day-of-week membership, 0 = Monday
    Weekdays(&'static [u32]),
}

/// A named bucket of observations. Windows are independent of each other, so one
/// observation may fall in several (weekend bars are also counted by hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub name: &'static str,
    pub rule: WindowRule,
}

impl SessionWindow {
    pub fn contains(&self, obs: &Observation) -> bool {
        match self.rule {
            WindowRule::Hours { from, to } => obs.hour >= from && obs.hour < to,
            WindowRule::HoursWrapping { from, to } => obs.hour >= from || obs.hour < to,
            WindowRule::Weekdays(days) => days.contains(&obs.day_of_week),
        }
    }

    /// Spreads (pips) of every observation inside this window, in input order.
    pub fn spreads(&self, observations: &[Observation]) -> Vec<f64> {
        observations
            .iter()
            .filter(|obs| self.contains(obs))
            .map(|obs| obs.spread_pips)
            .collect()
    }
}
