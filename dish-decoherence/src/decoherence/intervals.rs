use crate::c64;
use crate::defaults::INFINITE_DECOHERENCE;
use crate::error::BatchSizeError;
use ndarray::prelude::*;
use rayon::prelude::*;

/// Density matrix rho = c c^+ of the electronic state amplitudes.
pub fn density_matrix(coefficients: ArrayView1<c64>) -> Array2<c64> {
    let column: ArrayView2<c64> = coefficients.insert_axis(Axis(1));
    let row: Array2<c64> = coefficients.mapv(|val| val.conj()).insert_axis(Axis(0));
    column.dot(&row)
}

/// Population-dependent coherence intervals, i.e. the time after which each state
/// should experience a decoherence event, eqn. (11) of
/// H. M. Jaeger, S. Fischer, O. V. Prezhdo, J. Chem. Phys. 137, 22A545 (2012):
///
/// 1/tau_i = sum_{j != i} rho_jj * rate_ij
///
/// If the sum vanishes (e.g. state i carries the whole population) the interval
/// is [INFINITE_DECOHERENCE].
pub fn coherence_intervals(coefficients: ArrayView1<c64>, rates: ArrayView2<f64>) -> Array1<f64> {
    let nstates: usize = coefficients.len();
    assert_eq!(
        rates.dim(),
        (nstates, nstates),
        "Decoherence rates do not fit the amplitudes of {} states",
        nstates
    );
    let populations: Array1<f64> = density_matrix(coefficients).diag().mapv(|val| val.re);

    let mut tau: Array1<f64> = Array1::zeros(nstates);
    for i in 0..nstates {
        let mut summ: f64 = 0.0;
        for j in 0..nstates {
            if j != i {
                summ += populations[j] * rates[[i, j]];
            }
        }
        tau[i] = if summ > 0.0 {
            1.0 / summ
        } else {
            INFINITE_DECOHERENCE
        };
    }
    tau
}

/// Coherence intervals for a batch of trajectories.
pub fn coherence_intervals_batch(
    coefficients: &[Array1<c64>],
    rates: &[Array2<f64>],
) -> Result<Vec<Array1<f64>>, BatchSizeError> {
    BatchSizeError::check(
        "coherence_intervals_batch",
        "coefficients",
        coefficients.len(),
        "decoherence_rates",
        rates.len(),
    )?;

    Ok(coefficients
        .par_iter()
        .zip(rates.par_iter())
        .map(|(coeff, rate)| coherence_intervals(coeff.view(), rate.view()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoherence::rates::edc_rates;
    use crate::decoherence::tests::{random_coefficients, random_hamiltonian};
    use approx::assert_abs_diff_eq;

    pub const EPSILON: f64 = 1e-14;

    #[test]
    fn density_matrix_is_hermitian_with_unit_trace() {
        let coeff: Array1<c64> = random_coefficients(4, 5);
        let rho: Array2<c64> = density_matrix(coeff.view());
        assert_eq!(rho.dim(), (4, 4));
        let trace: c64 = rho.diag().sum();
        assert_abs_diff_eq!(trace.re, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(trace.im, 0.0, epsilon = EPSILON);
        for ((i, j), val) in rho.indexed_iter() {
            assert_abs_diff_eq!(val.re, rho[[j, i]].re, epsilon = EPSILON);
            assert_abs_diff_eq!(val.im, -rho[[j, i]].im, epsilon = EPSILON);
        }
        // rho_01 = c_0 c_1^*
        let expected: c64 = coeff[0] * coeff[1].conj();
        assert_abs_diff_eq!(rho[[0, 1]].re, expected.re, epsilon = EPSILON);
        assert_abs_diff_eq!(rho[[0, 1]].im, expected.im, epsilon = EPSILON);
    }

    #[test]
    fn localized_state_has_infinite_interval() {
        let coeff: Array1<c64> = array![c64::new(1.0, 0.0), c64::new(0.0, 0.0)];
        let rates: Array2<f64> = array![[0.0, 0.25], [0.25, 0.0]];
        let tau: Array1<f64> = coherence_intervals(coeff.view(), rates.view());
        assert_eq!(tau.len(), 2);
        assert_eq!(tau[0], 1.0e25);
        assert_abs_diff_eq!(tau[1], 4.0, epsilon = EPSILON);
    }

    #[test]
    fn diagonal_of_rates_is_not_used() {
        let coeff: Array1<c64> = array![c64::new(0.0, 0.6), c64::new(0.8, 0.0)];
        let rates: Array2<f64> = array![[100.0, 0.5], [0.2, 100.0]];
        let tau: Array1<f64> = coherence_intervals(coeff.view(), rates.view());
        // tau_0 = 1 / (0.64 * 0.5), tau_1 = 1 / (0.36 * 0.2)
        assert_abs_diff_eq!(tau[0], 1.0 / 0.32, epsilon = 1e-12);
        assert_abs_diff_eq!(tau[1], 1.0 / 0.072, epsilon = 1e-12);
    }

    #[test]
    #[should_panic]
    fn larger_rate_matrix_is_rejected() {
        let coeff: Array1<c64> = array![c64::new(0.6, 0.0), c64::new(0.8, 0.0)];
        let rates: Array2<f64> = Array2::from_elem((3, 3), 0.5);
        coherence_intervals(coeff.view(), rates.view());
    }

    #[test]
    #[should_panic]
    fn smaller_rate_matrix_is_rejected() {
        let coeff: Array1<c64> = random_coefficients(3, 1);
        let rates: Array2<f64> = Array2::from_elem((2, 2), 0.5);
        coherence_intervals(coeff.view(), rates.view());
    }

    #[test]
    fn intervals_are_positive() {
        let hvib: Array2<c64> = random_hamiltonian(5, 2);
        let rates: Array2<f64> = edc_rates(hvib.view(), 0.04, 1.0, 0.1);
        let tau: Array1<f64> = coherence_intervals(random_coefficients(5, 9).view(), rates.view());
        assert_eq!(tau.len(), 5);
        assert!(tau.iter().all(|val| *val > 0.0));
    }

    #[test]
    fn batch_matches_single_trajectories() {
        let coefficients: Vec<Array1<c64>> =
            (0..3).map(|seed| random_coefficients(3, seed)).collect();
        let rates: Vec<Array2<f64>> = (0..3)
            .map(|seed| edc_rates(random_hamiltonian(3, seed).view(), 0.1, 1.0, 0.1))
            .collect();
        let tau: Vec<Array1<f64>> = coherence_intervals_batch(&coefficients, &rates).unwrap();
        assert_eq!(tau.len(), 3);
        for ((t, c), r) in tau.iter().zip(coefficients.iter()).zip(rates.iter()) {
            assert_eq!(t, &coherence_intervals(c.view(), r.view()));
        }
    }

    #[test]
    fn batch_rejects_inconsistent_sizes() {
        let coefficients: Vec<Array1<c64>> = vec![random_coefficients(2, 0)];
        let rates: Vec<Array2<f64>> = vec![Array2::zeros((2, 2)); 2];
        let err = coherence_intervals_batch(&coefficients, &rates).unwrap_err();
        assert_eq!((err.first_len, err.second_len), (1, 2));
    }
}
