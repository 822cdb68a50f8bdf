use crate::constants::{FS_TO_AU, HARTREE_TO_EV};
use crate::defaults::INFINITE_DECOHERENCE;
use itertools::Itertools;
use log::{debug, info};
use ndarray::prelude::*;

pub fn print_decoherence_init(
    ntraj: usize,
    nstates: usize,
    c_param: f64,
    eps_param: f64,
    correction: bool,
) {
    info!("{:^80}", "");
    info!("{: ^80}", "Decoherence Rates");
    info!("{:-^80}", "");
    info!("{: <35} {}", "number of trajectories:", ntraj);
    info!("{: <35} {}", "number of states:", nstates);
    info!(
        "{: <35} {:.6} Hartree ({:.4} eV)",
        "decoherence constant C:",
        c_param,
        c_param * HARTREE_TO_EV
    );
    info!(
        "{: <35} {:.6} Hartree ({:.4} eV)",
        "decoherence constant epsilon:",
        eps_param,
        eps_param * HARTREE_TO_EV
    );
    info!("{: <35} {}", "dephasing-informed correction:", correction);
    info!("{:^80}", "");
}

/// Writes the rate matrix of one trajectory in atomic units.
pub fn print_rates(traj: usize, rates: ArrayView2<f64>) {
    debug!("");
    debug!("decoherence rates of trajectory {} (a.u.)", traj);
    debug!("{:-^80}", "");
    for row in rates.outer_iter() {
        debug!("{}", row.iter().map(|val| format!("{:>14.6e}", val)).join(" "));
    }
}

/// Table of the coherence intervals of all trajectories in fs.
pub fn print_coherence_intervals(intervals: &[Array1<f64>]) {
    info!("{: <45} ", "Coherence intervals in fs");
    info!("{:-^80} ", "");
    info!("{: <6} {: >7} {: >18}", "Traj.", "State", "tau");
    info!("{:-^80} ", "");
    for (traj, tau) in intervals.iter().enumerate() {
        for (state, val) in tau.iter().enumerate() {
            if *val >= INFINITE_DECOHERENCE {
                info!("{: >6} {: >7} {: >18}", traj + 1, state, "inf");
            } else {
                info!("{: >6} {: >7} {: >18.6}", traj + 1, state, val / FS_TO_AU);
            }
        }
    }
    info!("{:-^80} ", "");
}
