use jiff::civil::Time;

use crate::{
    error::OptimizerError,
    problem::kmh::Kmh,
    solver::{construction::construction_strategy::ConstructionStrategy, ls::two_opt},
};

#[derive(Clone, Debug)]
pub struct OptimizeOptions {
    /// Cap on 2-opt scans per route.
    pub max_iterations: usize,
    pub average_speed: Kmh,
    pub is_express: bool,
    pub construction: ConstructionStrategy,
    pub threads: Threads,
    /// Local time used for the rush hour decision; `None` reads the clock.
    pub departure_time: Option<Time>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_iterations: two_opt::DEFAULT_MAX_ITERATIONS,
            average_speed: Kmh::CITY_AVERAGE,
            is_express: false,
            construction: ConstructionStrategy::NearestNeighbor,
            threads: Threads::Auto,
            departure_time: None,
        }
    }
}

impl OptimizeOptions {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        self.average_speed.validate()
    }
}
