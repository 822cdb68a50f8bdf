use crate::c64;
use crate::decoherence::gaps::energy_gaps;
use crate::error::BatchSizeError;
use ndarray::prelude::*;
use rayon::prelude::*;

/// Decoherence rates of the energy-based decoherence scheme of Granucci and Persico,
/// G. Granucci, M. Persico, J. Chem. Phys. 126, 134114 (2007), eqn. (17).
///
/// rate_ij = |E_i - E_j| / (C + epsilon / E_kin)
///
/// The energies are the real parts of the diagonal of the vibronic Hamiltonian (in Hartree),
/// `kinetic_energy` is the classical kinetic energy of the nuclei and has to be positive.
/// Typical values of the method parameters are C = 1.0 Ha and epsilon = 0.1 Ha.
/// The returned matrix is symmetric and its diagonal is zero.
pub fn edc_rates(
    hvib: ArrayView2<c64>,
    kinetic_energy: f64,
    c_param: f64,
    eps_param: f64,
) -> Array2<f64> {
    debug_assert!(
        kinetic_energy > 0.0,
        "The kinetic energy has to be positive, got {}",
        kinetic_energy
    );
    let denominator: f64 = c_param + eps_param / kinetic_energy;
    energy_gaps(hvib) / denominator
}

/// Decoherence rates for a batch of trajectories. Each trajectory has its own
/// Hamiltonian and kinetic energy, the order of the returned matrices is the
/// order of the trajectories.
pub fn edc_rates_batch(
    hvibs: &[Array2<c64>],
    kinetic_energies: &[f64],
    c_param: f64,
    eps_param: f64,
) -> Result<Vec<Array2<f64>>, BatchSizeError> {
    BatchSizeError::check(
        "edc_rates_batch",
        "hvib",
        hvibs.len(),
        "kinetic_energy",
        kinetic_energies.len(),
    )?;

    let rates: Vec<Array2<f64>> = hvibs
        .par_iter()
        .zip(kinetic_energies.par_iter())
        .map(|(hvib, ekin)| edc_rates(hvib.view(), *ekin, c_param, eps_param))
        .collect();
    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoherence::tests::{diagonal_hamiltonian, random_hamiltonian};
    use approx::assert_abs_diff_eq;

    pub const EPSILON: f64 = 1e-15;

    #[test]
    fn two_state_reference() {
        let hvib: Array2<c64> = diagonal_hamiltonian(&[0.0, 0.5]);
        let rates: Array2<f64> = edc_rates(hvib.view(), 0.1, 1.0, 0.1);
        // denominator: 1.0 + 0.1 / 0.1 = 2.0
        assert_abs_diff_eq!(rates[[0, 1]], 0.25, epsilon = EPSILON);
        assert_abs_diff_eq!(rates[[1, 0]], 0.25, epsilon = EPSILON);
        assert_eq!(rates[[0, 0]], 0.0);
        assert_eq!(rates[[1, 1]], 0.0);
    }

    #[test]
    fn rates_are_square_symmetric_with_zero_diagonal() {
        for nstates in 1..6 {
            let hvib: Array2<c64> = random_hamiltonian(nstates, 17 + nstates as u64);
            let rates: Array2<f64> = edc_rates(hvib.view(), 0.037, 1.0, 0.1);
            assert_eq!(rates.dim(), (nstates, nstates));
            assert_eq!(rates, rates.t());
            assert!(rates.diag().iter().all(|val| *val == 0.0));
            assert!(rates.iter().all(|val| *val >= 0.0));
        }
    }

    #[test]
    fn rates_are_reproducible() {
        let hvib: Array2<c64> = random_hamiltonian(4, 3);
        let first: Array2<f64> = edc_rates(hvib.view(), 0.02, 1.0, 0.1);
        let second: Array2<f64> = edc_rates(hvib.view(), 0.02, 1.0, 0.1);
        // bitwise identical
        assert!(first
            .iter()
            .zip(second.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
    }

    #[test]
    fn batch_matches_single_trajectories() {
        let hvibs: Vec<Array2<c64>> = (0..5).map(|seed| random_hamiltonian(3, seed)).collect();
        let ekin: Vec<f64> = vec![0.01, 0.02, 0.05, 0.1, 0.3];
        let rates: Vec<Array2<f64>> = edc_rates_batch(&hvibs, &ekin, 1.0, 0.1).unwrap();
        assert_eq!(rates.len(), 5);
        for ((rate, hvib), e) in rates.iter().zip(hvibs.iter()).zip(ekin.iter()) {
            assert_eq!(rate, &edc_rates(hvib.view(), *e, 1.0, 0.1));
        }
    }

    #[test]
    fn batch_rejects_inconsistent_sizes() {
        let hvibs: Vec<Array2<c64>> = (0..3).map(|seed| random_hamiltonian(2, seed)).collect();
        let ekin: Vec<f64> = vec![0.1, 0.2];
        let err: BatchSizeError = edc_rates_batch(&hvibs, &ekin, 1.0, 0.1).unwrap_err();
        assert_eq!((err.first_len, err.second_len), (3, 2));
        assert!(err.to_string().contains("hvib.len() = 3"));
        assert!(err.to_string().contains("kinetic_energy.len() = 2"));
    }

    #[test]
    fn empty_batch() {
        let rates: Vec<Array2<f64>> = edc_rates_batch(&[], &[], 1.0, 0.1).unwrap();
        assert!(rates.is_empty());
    }
}
