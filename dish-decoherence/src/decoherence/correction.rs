use crate::c64;
use crate::defaults::INFINITE_DECOHERENCE;
use crate::error::BatchSizeError;
use ndarray::prelude::*;
use ndarray::Zip;
use rayon::prelude::*;

/// Dephasing-informed correction of the decoherence rates, see
/// A. E. Sifain, L. Wang, S. Tretiak, O. V. Prezhdo, J. Chem. Phys. 150, 194104 (2019).
///
/// The rates are modified in place: every rate is scaled by the ratio of the instantaneous
/// energy gap |E_i - E_j| and the time-averaged gap <|E_i - E_j|> of the same pair of states.
/// Pairs without a positive average gap get the rate [INFINITE_DECOHERENCE].
///
/// * `rates` - uncorrected decoherence rates (a.u. time^-1), overwritten with the corrected ones
/// * `hvib` - instantaneous vibronic Hamiltonian (Hartree)
/// * `ave_gaps` - time-averaged absolute energy gaps (Hartree)
pub fn dephasing_informed_correction(
    rates: &mut Array2<f64>,
    hvib: ArrayView2<c64>,
    ave_gaps: ArrayView2<f64>,
) {
    assert_eq!(
        rates.dim(),
        hvib.dim(),
        "Decoherence rates and Hamiltonian differ in size"
    );
    assert_eq!(
        rates.dim(),
        ave_gaps.dim(),
        "Decoherence rates and average gaps differ in size"
    );
    let energies: ArrayView1<c64> = hvib.diag();

    Zip::indexed(rates)
        .and(&ave_gaps)
        .for_each(|(i, j), rate, &ave_gap| {
            if ave_gap > 0.0 {
                let gap: f64 = (energies[i].re - energies[j].re).abs();
                *rate *= gap / ave_gap;
            } else {
                *rate = INFINITE_DECOHERENCE;
            }
        });
}

/// Dephasing-informed correction for a batch of trajectories. The same average gaps
/// are used for all trajectories.
pub fn dephasing_informed_correction_batch(
    rates: &mut [Array2<f64>],
    hvibs: &[Array2<c64>],
    ave_gaps: ArrayView2<f64>,
) -> Result<(), BatchSizeError> {
    BatchSizeError::check(
        "dephasing_informed_correction_batch",
        "decoherence_rates",
        rates.len(),
        "hvib",
        hvibs.len(),
    )?;

    rates
        .par_iter_mut()
        .zip(hvibs.par_iter())
        .for_each(|(rate, hvib)| dephasing_informed_correction(rate, hvib.view(), ave_gaps));
    Ok(())
}
