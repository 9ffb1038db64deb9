/*!
 * Scheduler Types
 * Policy selection and validated policy parameters
 */

use super::feedback::FeedbackScheduler;
use super::nonpreemptive::{Fcfs, HighestResponseRatioNext, PriorityFirst, ShortestProcessNext};
use super::round_robin::RoundRobin;
use super::srt::ShortestRemainingTime;
use super::traits::Scheduler;
use crate::core::errors::SchedulerError;
use crate::core::limits::{
    DEFAULT_FEEDBACK_LEVELS, DEFAULT_QUANTUM, DEFAULT_QUANTUM_BASE, MAX_FEEDBACK_LEVELS,
};
use crate::core::types::{SchedResult, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Round Robin time slice, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Quantum(Tick);

impl Quantum {
    /// Create new quantum
    pub fn new(ticks: Tick) -> SchedResult<Self> {
        if ticks == 0 {
            return Err(SchedulerError::invalid_parameter(
                "quantum must be at least 1 tick",
            ));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn get(&self) -> Tick {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Multilevel feedback queue shape
///
/// Level `n` runs with a quantum of `quantum_base << n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeedbackConfig {
    levels: u32,
    quantum_base: Tick,
}

impl FeedbackConfig {
    /// Create new feedback configuration
    pub fn new(levels: u32, quantum_base: Tick) -> SchedResult<Self> {
        if levels == 0 {
            return Err(SchedulerError::invalid_parameter(
                "feedback queue needs at least one level",
            ));
        }
        if levels > MAX_FEEDBACK_LEVELS {
            return Err(SchedulerError::invalid_parameter(format!(
                "feedback queue supports at most {} levels, got {}",
                MAX_FEEDBACK_LEVELS, levels
            )));
        }
        if quantum_base == 0 {
            return Err(SchedulerError::invalid_parameter(
                "base quantum must be at least 1 tick",
            ));
        }
        // The last level's quantum must not shift bits out of the clock type
        if quantum_base.leading_zeros() < levels - 1 {
            return Err(SchedulerError::invalid_parameter(format!(
                "base quantum {} overflows at level {}",
                quantum_base,
                levels - 1
            )));
        }

        Ok(Self {
            levels,
            quantum_base,
        })
    }

    /// Single-level configuration, which behaves exactly like Round Robin
    pub fn single_level(quantum: Quantum) -> Self {
        Self {
            levels: 1,
            quantum_base: quantum.get(),
        }
    }

    #[inline(always)]
    pub const fn levels(&self) -> u32 {
        self.levels
    }

    #[inline(always)]
    pub const fn quantum_base(&self) -> Tick {
        self.quantum_base
    }

    /// Quantum granted at `level` (0 is the top queue)
    #[inline]
    pub fn quantum(&self, level: usize) -> Tick {
        debug_assert!(level < self.levels as usize);
        self.quantum_base << level
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_FEEDBACK_LEVELS,
            quantum_base: DEFAULT_QUANTUM_BASE,
        }
    }
}

impl<'de> Deserialize<'de> for FeedbackConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            levels: u32,
            quantum_base: Tick,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.levels, inner.quantum_base).map_err(serde::de::Error::custom)
    }
}

/// Scheduling discipline to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First come, first served
    Fcfs,
    /// Shortest process next (non-preemptive SJF)
    Spn,
    /// Non-preemptive priority, lower value first
    Priority,
    /// Highest response ratio next
    Hrrn,
    /// Shortest remaining time (preemptive, 1-tick slices)
    Srt,
    /// Round Robin with a fixed quantum
    RoundRobin(Quantum),
    /// Multilevel feedback queue
    Feedback(FeedbackConfig),
}

impl SchedulingPolicy {
    /// Short machine-friendly name, e.g. `rr:3` or `fb:3:1`
    pub fn name(&self) -> String {
        match self {
            Self::Fcfs => "fcfs".to_string(),
            Self::Spn => "spn".to_string(),
            Self::Priority => "priority".to_string(),
            Self::Hrrn => "hrrn".to_string(),
            Self::Srt => "srt".to_string(),
            Self::RoundRobin(q) => format!("rr:{}", q.get()),
            Self::Feedback(fb) => format!("fb:{}:{}", fb.levels(), fb.quantum_base()),
        }
    }

    /// Human-readable title for reports
    pub fn label(&self) -> String {
        match self {
            Self::Fcfs => "FCFS".to_string(),
            Self::Spn => "SPN".to_string(),
            Self::Priority => "Priority".to_string(),
            Self::Hrrn => "HRRN".to_string(),
            Self::Srt => "SRT".to_string(),
            Self::RoundRobin(q) => format!("Round Robin (quantum = {})", q.get()),
            Self::Feedback(fb) => format!(
                "Feedback Queue ({} levels, base quantum = {})",
                fb.levels(),
                fb.quantum_base()
            ),
        }
    }

    /// Whether a dispatched process may lose the CPU before finishing
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srt | Self::RoundRobin(_) | Self::Feedback(_))
    }

    /// Build the scheduler implementing this policy
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match *self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Spn => Box::new(ShortestProcessNext),
            Self::Priority => Box::new(PriorityFirst),
            Self::Hrrn => Box::new(HighestResponseRatioNext),
            Self::Srt => Box::new(ShortestRemainingTime),
            Self::RoundRobin(quantum) => Box::new(RoundRobin::new(quantum)),
            Self::Feedback(config) => Box::new(FeedbackScheduler::new(config)),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SchedulerError;

    /// Accepts `fcfs`, `spn`/`sjf`, `priority`/`prio`, `hrrn`, `srt`/`srtf`,
    /// `rr[:<quantum>]` and `fb[:<levels>[:<base>]]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let mut parts = lower.split(':');
        let head = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let parse_arg = |raw: &str| -> SchedResult<Tick> {
            raw.parse::<Tick>().map_err(|_| {
                SchedulerError::invalid_parameter(format!(
                    "'{}' is not a valid tick count in policy '{}'",
                    raw, s
                ))
            })
        };

        let policy = match (head, args.as_slice()) {
            ("fcfs" | "fifo", []) => Self::Fcfs,
            ("spn" | "sjf", []) => Self::Spn,
            ("priority" | "prio", []) => Self::Priority,
            ("hrrn", []) => Self::Hrrn,
            ("srt" | "srtf", []) => Self::Srt,
            ("rr" | "round_robin", []) => Self::RoundRobin(Quantum::default()),
            ("rr" | "round_robin", [q]) => Self::RoundRobin(Quantum::new(parse_arg(*q)?)?),
            ("fb" | "feedback", []) => Self::Feedback(FeedbackConfig::default()),
            ("fb" | "feedback", [levels]) => {
                Self::Feedback(FeedbackConfig::new(parse_levels(*levels, s)?, DEFAULT_QUANTUM_BASE)?)
            }
            ("fb" | "feedback", [levels, base]) => {
                Self::Feedback(FeedbackConfig::new(parse_levels(*levels, s)?, parse_arg(*base)?)?)
            }
            _ => {
                return Err(SchedulerError::invalid_parameter(format!(
                    "Invalid policy '{}'. Valid: fcfs, spn, priority, hrrn, srt, rr:<q>, fb:<levels>:<base>",
                    s
                )))
            }
        };

        Ok(policy)
    }
}

fn parse_levels(raw: &str, policy: &str) -> SchedResult<u32> {
    raw.parse::<u32>().map_err(|_| {
        SchedulerError::invalid_parameter(format!(
            "'{}' is not a valid level count in policy '{}'",
            raw, policy
        ))
    })
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parameters for a full comparison run over every policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub quantum: Quantum,
    pub feedback: Vec<FeedbackConfig>,
}

impl Default for SimulationConfig {
    /// Round Robin with quantum 3, plus the FB-1 and FB-2i feedback shapes
    fn default() -> Self {
        Self {
            quantum: Quantum::default(),
            feedback: vec![
                FeedbackConfig {
                    levels: 1,
                    quantum_base: DEFAULT_QUANTUM_BASE,
                },
                FeedbackConfig::default(),
            ],
        }
    }
}

impl SimulationConfig {
    /// Every policy this configuration asks for, in report order
    pub fn policies(&self) -> Vec<SchedulingPolicy> {
        let mut policies = vec![
            SchedulingPolicy::Fcfs,
            SchedulingPolicy::Spn,
            SchedulingPolicy::Priority,
            SchedulingPolicy::Srt,
            SchedulingPolicy::Hrrn,
            SchedulingPolicy::RoundRobin(self.quantum),
        ];
        policies.extend(self.feedback.iter().copied().map(SchedulingPolicy::Feedback));
        policies
    }
}
