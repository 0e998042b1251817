use crate::constants::{GM_EARTH, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, PI, SECONDS_PER_DAY};
use nalgebra as na;

pub struct OrbitalMechanics;

#[allow(non_snake_case)]
impl OrbitalMechanics {
    /// Orbital period [s] from mean motion [rev/day]
    pub fn period_from_mean_motion(mean_motion: f64) -> f64 {
        SECONDS_PER_DAY / mean_motion
    }

    /// Semi-major axis [km] from period [s], Kepler's third law
    pub fn semi_major_axis_from_period(period: f64) -> f64 {
        (period * period * GM_EARTH / (4.0 * PI * PI)).cbrt()
    }

    pub fn eccentric_to_mean_anomaly(E: f64, e: f64) -> f64 {
        E - e * E.sin()
    }

    /// Half-angle form: tan(ν/2) = sqrt((1+e)/(1-e)) tan(E/2)
    pub fn eccentric_to_true_anomaly(E: f64, e: f64) -> f64 {
        let half = E / 2.0;
        2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos())
    }

    /// Converts Keplerian orbital elements to Cartesian state vectors
    /// Input elements: [a, e, i, Omega, omega, nu]
    ///   a: semi-major axis [km]
    ///   e: eccentricity [-]
    ///   i: inclination [rad]
    ///   Omega: right ascension of ascending node [rad]
    ///   omega: argument of perigee [rad]
    ///   nu: true anomaly [rad]
    /// Returns: (position, velocity) in ECI frame [km, km/s]
    pub fn keplerian_to_cartesian(
        elements: &na::Vector6<f64>,
    ) -> (na::Vector3<f64>, na::Vector3<f64>) {
        let (a, e, i, omega_cap, omega, nu) = (
            elements[0],
            elements[1],
            elements[2],
            elements[3],
            elements[4],
            elements[5],
        );

        // Semi-latus rectum
        let p = a * (1.0 - e * e);
        let r_mag = p / (1.0 + e * nu.cos());

        let r_orbital = na::Vector3::new(r_mag * nu.cos(), r_mag * nu.sin(), 0.0);
        let v_orbital = na::Vector3::new(
            -(GM_EARTH / p).sqrt() * nu.sin(),
            (GM_EARTH / p).sqrt() * (e + nu.cos()),
            0.0,
        );

        let rot_omega = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), omega);
        let rot_i = na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), i);
        let rot_omega_cap = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), omega_cap);

        // Perifocal to ECI
        let transform = rot_omega_cap * rot_i * rot_omega;
        (transform * r_orbital, transform * v_orbital)
    }
}

/// Result of solving Kepler's equation for the eccentric anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64, // [rad]
    pub iterations: u32,
    pub converged: bool,
}

/// Newton-Raphson solver for M = E - e sin(E).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

#[allow(non_snake_case)]
impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Solves for E [rad] given M [rad], starting from E = M.
    ///
    /// Stops once a step is smaller than the tolerance. When the iteration cap
    /// is reached first the last iterate is returned with `converged == false`.
    pub fn solve(&self, M: f64, e: f64) -> KeplerSolution {
        let mut E = M;

        for n in 1..=self.max_iterations {
            let next = E - (E - e * E.sin() - M) / (1.0 - e * E.cos());
            let step = (next - E).abs();
            E = next;
            if step < self.tolerance {
                return KeplerSolution {
                    eccentric_anomaly: E,
                    iterations: n,
                    converged: true,
                };
            }
        }

        KeplerSolution {
            eccentric_anomaly: E,
            iterations: self.max_iterations,
            converged: false,
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(0.0)]
    #[test_case(1.0)]
    #[test_case(PI)]
    #[test_case(4.5)]
    #[test_case(2.0 * PI - 1e-3)]
    fn circular_orbit_eccentric_equals_mean(M: f64) {
        let solution = KeplerSolver::default().solve(M, 0.0);
        assert_eq!(solution.eccentric_anomaly, M);
        assert!(solution.converged);
        assert_eq!(solution.iterations, 1);
    }

    #[test]
    fn near_circular_orbit_needs_small_correction() {
        let e = 0.0006703;
        let M = 130.536_f64.to_radians();
        let solution = KeplerSolver::default().solve(M, e);

        assert!(solution.converged);
        let E_deg = solution.eccentric_anomaly.to_degrees();
        // First-order correction is e sin(M)
        assert_abs_diff_eq!(E_deg - 130.536, (e * M.sin()).to_degrees(), epsilon = 1e-4);
        assert!((E_deg - 130.536).abs() < 0.05);
    }

    #[test_case(0.1, 0.5)]
    #[test_case(0.5, 2.0)]
    #[test_case(0.9, 5.5)]
    fn solution_satisfies_keplers_equation(e: f64, M: f64) {
        let solution = KeplerSolver::new(1e-12, 500).solve(M, e);
        assert!(solution.converged);
        let residual =
            OrbitalMechanics::eccentric_to_mean_anomaly(solution.eccentric_anomaly, e) - M;
        assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn iteration_cap_returns_last_value() {
        let solution = KeplerSolver::new(0.0, 3).solve(2.0, 0.3);
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 3);
        assert!(solution.eccentric_anomaly.is_finite());
    }

    #[test_case(0.0, 0.0, 0.0; "perigee")]
    #[test_case(PI, 0.3, PI; "apogee")]
    #[test_case(1.0, 0.0, 1.0; "circular")]
    fn true_anomaly_from_eccentric(E: f64, e: f64, expected: f64) {
        assert_abs_diff_eq!(
            OrbitalMechanics::eccentric_to_true_anomaly(E, e),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn true_anomaly_leads_eccentric_anomaly_before_apogee() {
        let nu = OrbitalMechanics::eccentric_to_true_anomaly(1.0, 0.5);
        // cos(nu) = (cos E - e) / (1 - e cos E)
        let expected = ((1.0_f64.cos() - 0.5) / (1.0 - 0.5 * 1.0_f64.cos())).acos();
        assert_abs_diff_eq!(nu, expected, epsilon = 1e-12);
        assert!(nu > 1.0);
    }

    #[test]
    fn period_and_semi_major_axis() {
        let period = OrbitalMechanics::period_from_mean_motion(15.72125391);
        assert_abs_diff_eq!(period, 5495.7448, epsilon = 1e-3);
        let a = OrbitalMechanics::semi_major_axis_from_period(period);
        assert_abs_diff_eq!(a, 6730.96, epsilon = 0.01);
    }

    #[test]
    fn keplerian_to_cartesian_at_perigee() {
        let elements = na::Vector6::new(7000.0, 0.1, 0.0, 0.0, 0.0, 0.0);
        let (r, v) = OrbitalMechanics::keplerian_to_cartesian(&elements);
        assert_abs_diff_eq!(r, na::Vector3::new(6300.0, 0.0, 0.0), epsilon = 1e-9);
        // Vis-viva at perigee
        let expected_v = (GM_EARTH * (2.0 / 6300.0 - 1.0 / 7000.0)).sqrt();
        assert_abs_diff_eq!(v.magnitude(), expected_v, epsilon = 1e-9);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn keplerian_to_cartesian_applies_inclination() {
        let elements = na::Vector6::new(7000.0, 0.0, PI / 2.0, 0.0, 0.0, PI / 2.0);
        let (r, _) = OrbitalMechanics::keplerian_to_cartesian(&elements);
        assert_abs_diff_eq!(r, na::Vector3::new(0.0, 0.0, 7000.0), epsilon = 1e-9);
    }
}
