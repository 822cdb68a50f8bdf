use dish_decoherence::logging::*;
use dish_decoherence::{
    c64, coherence_intervals_batch, dephasing_informed_correction_batch, edc_rates_batch,
    AverageGaps, BatchSizeError, DecoherenceConfiguration,
};
use log::{debug, log_enabled, Level};
use ndarray::prelude::*;

/// Snapshots of a set of trajectories at one time step
#[derive(Debug, Clone)]
pub struct TrajectoryBatch {
    pub hvib: Vec<Array2<c64>>,
    pub kinetic_energies: Vec<f64>,
    pub coefficients: Vec<Array1<c64>>,
    // time-averaged energy gaps, if they were tracked by the caller
    pub average_gaps: Option<Array2<f64>>,
}

/// Decoherence rates and coherence intervals of every trajectory, in atomic units
#[derive(Debug, Clone)]
pub struct DecoherenceResults {
    pub rates: Vec<Array2<f64>>,
    pub coherence_intervals: Vec<Array1<f64>>,
}

impl TrajectoryBatch {
    pub fn ntraj(&self) -> usize {
        self.hvib.len()
    }

    pub fn nstates(&self) -> usize {
        self.hvib.first().map_or(0, |hvib| hvib.ncols())
    }

    /// The time-averaged gaps that enter the dephasing-informed correction. If none were
    /// provided, the gaps are averaged over the trajectories of this batch.
    pub fn average_gaps(&self) -> Array2<f64> {
        match self.average_gaps.as_ref() {
            Some(gaps) => gaps.clone(),
            None => {
                let mut average = AverageGaps::new(self.nstates());
                average.update_batch(&self.hvib);
                average.averages()
            }
        }
    }

    /// Computes the decoherence rates, optionally applies the dephasing-informed correction
    /// and derives the coherence intervals of all trajectories.
    pub fn evaluate(
        &self,
        config: &DecoherenceConfiguration,
    ) -> Result<DecoherenceResults, BatchSizeError> {
        print_decoherence_init(
            self.ntraj(),
            self.nstates(),
            config.c_param,
            config.eps_param,
            config.use_dephasing_correction,
        );

        let mut rates: Vec<Array2<f64>> = edc_rates_batch(
            &self.hvib,
            &self.kinetic_energies,
            config.c_param,
            config.eps_param,
        )?;

        if config.use_dephasing_correction {
            let average_gaps: Array2<f64> = self.average_gaps();
            debug!("average energy gaps (Hartree):\n{:.6}", average_gaps);
            dephasing_informed_correction_batch(&mut rates, &self.hvib, average_gaps.view())?;
        }

        if log_enabled!(Level::Debug) {
            for (traj, rate) in rates.iter().enumerate() {
                print_rates(traj + 1, rate.view());
            }
        }

        let coherence_intervals: Vec<Array1<f64>> =
            coherence_intervals_batch(&self.coefficients, &rates)?;
        print_coherence_intervals(&coherence_intervals);

        Ok(DecoherenceResults {
            rates,
            coherence_intervals,
        })
    }
}
