use crate::c64;
use ndarray::prelude::*;

/// Absolute energy gaps |E_i - E_j| between the states. The energies are taken
/// from the real part of the diagonal of the vibronic Hamiltonian.
pub fn energy_gaps(hvib: ArrayView2<c64>) -> Array2<f64> {
    let energies: Array1<f64> = hvib.diag().mapv(|val| val.re);
    let nstates: usize = energies.len();
    Array2::from_shape_fn((nstates, nstates), |(i, j)| {
        (energies[i] - energies[j]).abs()
    })
}

/// Running average of the absolute energy gaps <|E_i - E_j|>.
///
/// Every Hamiltonian that is passed to [AverageGaps::update] counts as one sample,
/// regardless of the trajectory or the time step it belongs to. Before the first
/// sample all averages are zero, which makes the dephasing-informed correction
/// fall back to infinite decoherence times.
#[derive(Debug, Clone)]
pub struct AverageGaps {
    sum: Array2<f64>,
    samples: usize,
}

impl AverageGaps {
    pub fn new(nstates: usize) -> Self {
        Self {
            sum: Array2::zeros((nstates, nstates)),
            samples: 0,
        }
    }

    pub fn nstates(&self) -> usize {
        self.sum.nrows()
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Adds the gaps of one Hamiltonian to the statistic.
    pub fn update(&mut self, hvib: ArrayView2<c64>) {
        assert_eq!(
            hvib.dim(),
            self.sum.dim(),
            "Hamiltonian with {:?} elements does not fit the average gaps of {} states",
            hvib.dim(),
            self.nstates()
        );
        self.sum += &energy_gaps(hvib);
        self.samples += 1;
    }

    /// Adds the gaps of all trajectories of a batch.
    pub fn update_batch(&mut self, hvibs: &[Array2<c64>]) {
        for hvib in hvibs.iter() {
            self.update(hvib.view());
        }
    }

    /// The averaged gaps. All elements are zero as long as no sample was added.
    pub fn averages(&self) -> Array2<f64> {
        if self.samples == 0 {
            Array2::zeros(self.sum.raw_dim())
        } else {
            &self.sum / self.samples as f64
        }
    }

    pub fn reset(&mut self) {
        self.sum.fill(0.0);
        self.samples = 0;
    }
}
