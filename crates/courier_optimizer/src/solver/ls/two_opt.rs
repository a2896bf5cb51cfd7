use tracing::{Level, debug, instrument};

use crate::problem::{
    coordinate::{Coordinate, path_length},
    kilometers::Kilometers,
    route::Route,
};

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// **Intra-Route 2-Opt, first improvement**
///
/// Reverses the points between route positions `i` and `k` (inclusive).
/// The depot at both ends never moves.
///
/// ```text
/// BEFORE:
///    ... (i-1) --x--> [i] -> ... -> [k] --x--> (k+1) ...
///
/// AFTER (Sequence Reversed):
///    ... (i-1) -----> [k] -> ... -> [i] -----> (k+1) ...
/// ```
///
/// Each scan walks `1 <= i < k <= len - 2` in order and applies the first
/// reversal whose total length is strictly shorter, then starts over. The
/// search ends on a scan without improvement or after `max_iterations`
/// scans. Which local optimum is reached depends on this policy: taking the
/// best reversal of each scan instead would give different tours.
#[derive(Clone, Debug)]
pub struct TwoOpt {
    max_iterations: usize,
}

#[derive(Debug, Clone)]
pub struct TwoOptOutcome {
    pub route: Route,
    /// Scans started, including the final one that found nothing.
    pub iterations: usize,
    pub converged: bool,
    pub initial_distance: Kilometers,
    pub distance: Kilometers,
}

impl Default for TwoOpt {
    fn default() -> Self {
        TwoOpt::new(DEFAULT_MAX_ITERATIONS)
    }
}

/// Length of `points` with `[i..=k]` reversed, summed in tour order.
fn reversed_length(points: &[Coordinate], i: usize, k: usize) -> Kilometers {
    path_length(
        (0..i)
            .chain((i..=k).rev())
            .chain(k + 1..points.len())
            .map(|index| points[index]),
    )
}

fn find_first_improvement(
    points: &[Coordinate],
    best: Kilometers,
) -> Option<(usize, usize, Kilometers)> {
    let last = points.len() - 1;

    for i in 1..last - 1 {
        for k in (i + 1)..last {
            let candidate = reversed_length(points, i, k);
            if candidate < best {
                return Some((i, k, candidate));
            }
        }
    }

    None
}

impl TwoOpt {
    pub fn new(max_iterations: usize) -> Self {
        TwoOpt { max_iterations }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn improve(&self, route: Route) -> TwoOptOutcome {
        let initial_distance = route.distance();

        // depot + depot + one stop leaves nothing to reverse
        if route.point_count() < 4 {
            return TwoOptOutcome {
                route,
                iterations: 0,
                converged: true,
                initial_distance,
                distance: initial_distance,
            };
        }

        let mut points = route.points().collect::<Vec<_>>();
        let depot = route.depot();
        let mut stops = route.into_stops();

        let mut best = initial_distance;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            match find_first_improvement(&points, best) {
                Some((i, k, distance)) => {
                    points[i..=k].reverse();
                    // stops are shifted by one against points because of the leading depot
                    stops[i - 1..k].reverse();
                    best = distance;
                }
                None => {
                    converged = true;
                    break;
                }
            }
        }

        debug!(
            iterations,
            converged,
            saved_km = (initial_distance - best).value(),
            "2-opt finished"
        );

        TwoOptOutcome {
            route: Route::new(depot, stops),
            iterations,
            converged,
            initial_distance,
            distance: best,
        }
    }
}

/// Shorthand for [`TwoOpt::improve`] keeping only the route.
pub fn improve(route: Route, max_iterations: usize) -> Route {
    TwoOpt::new(max_iterations).improve(route).route
}
