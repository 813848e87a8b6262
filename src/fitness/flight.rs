//! Drone flight simulation
//!
//! Scores a thrust schedule by flying a point-mass drone straight up with
//! explicit Euler integration and reporting the highest altitude it reaches
//! before coming back down to the ground.
//!
//! Each step computes
//!
//! ```text
//! a = g + P * bit(t) - r * v     (thrust only while t < T)
//! v = v + a * dt
//! h = h + v * dt
//! ```
//!
//! and stops as soon as `h` drops below zero. Touching down faster than
//! `v_crash` costs `crash_penalty`.

use serde::{Deserialize, Serialize};

use crate::error::FitnessError;
use crate::fitness::traits::Fitness;
use crate::genome::Chromosome;

/// Physical constants and limits of the simulated flight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParams {
    /// Control horizon: number of steps the schedule can fire the engine
    pub horizon: usize,
    /// Gravitational acceleration (negative is down)
    pub gravity: f64,
    /// Integration time step
    pub dt: f64,
    /// Engine acceleration while thrust is on
    pub thrust: f64,
    /// Linear drag coefficient
    pub drag: f64,
    /// Touch-down speed above which the flight counts as a crash
    pub crash_velocity: f64,
    /// Reward deduction for a crash
    pub crash_penalty: f64,
    /// Hard bound on integration steps per flight
    pub max_steps: usize,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            horizon: 100,
            gravity: -10.0,
            dt: 0.1,
            thrust: 30.0,
            drag: 0.1,
            crash_velocity: 20.0,
            crash_penalty: 1500.0,
            max_steps: 10_000,
        }
    }
}

/// Everything observed during one simulated flight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightOutcome {
    /// Highest altitude reached (at least the launch height of zero)
    pub max_height: f64,
    /// Velocity on the step the drone went below ground
    pub final_velocity: f64,
    /// Number of integration steps taken
    pub steps: usize,
    /// Whether the touch-down speed exceeded the crash threshold
    pub crashed: bool,
    /// Peak altitude minus the crash penalty, if any
    pub reward: f64,
}

/// Flight-simulation fitness function
#[derive(Clone, Debug, Default)]
pub struct FlightSimulation {
    params: FlightParams,
}

impl FlightSimulation {
    /// Create a simulation with the default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulation with custom constants
    pub fn with_params(params: FlightParams) -> Self {
        Self { params }
    }

    /// Override the integration step bound
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.params.max_steps = max_steps;
        self
    }

    /// The constants in use
    pub fn params(&self) -> &FlightParams {
        &self.params
    }

    /// Fly the schedule and return the full outcome
    pub fn simulate(&self, schedule: &Chromosome) -> Result<FlightOutcome, FitnessError> {
        let p = &self.params;
        if schedule.len() < p.horizon {
            return Err(FitnessError::ScheduleTooShort {
                required: p.horizon,
                actual: schedule.len(),
            });
        }

        let mut h = 0.0_f64;
        let mut v = 0.0_f64;
        let mut t = 0usize;
        let mut max_h = 0.0_f64;

        while h >= 0.0 {
            if t >= p.max_steps {
                return Err(FitnessError::Nontermination {
                    steps: t,
                    height: h,
                    velocity: v,
                });
            }

            let thrust = if t < p.horizon && schedule.is_thrust_on(t) {
                p.thrust
            } else {
                0.0
            };
            let a = p.gravity + thrust - v * p.drag;
            v += a * p.dt;
            h += v * p.dt;
            t += 1;
            max_h = max_h.max(h);
        }

        let crashed = v < -p.crash_velocity;
        let reward = if crashed {
            max_h - p.crash_penalty
        } else {
            max_h
        };

        Ok(FlightOutcome {
            max_height: max_h,
            final_velocity: v,
            steps: t,
            crashed,
            reward,
        })
    }
}

impl Fitness for FlightSimulation {
    fn name(&self) -> &'static str {
        "flight"
    }

    fn required_length(&self) -> usize {
        self.params.horizon
    }

    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, FitnessError> {
        self.simulate(chromosome).map(|outcome| outcome.reward)
    }
}
