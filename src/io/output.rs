use crate::batch::DecoherenceResults;
use anyhow::{Context, Result};
use ndarray::prelude::*;
use ndarray::stack;
use ndarray_npy::NpzWriter;
use std::fs::File;
use std::path::Path;

/// Writes the rates (ntraj, nstates, nstates) and the coherence intervals (ntraj, nstates)
/// to a .npz archive.
pub fn write_results(filename: &Path, results: &DecoherenceResults) -> Result<()> {
    let rate_views: Vec<ArrayView2<f64>> = results.rates.iter().map(|r| r.view()).collect();
    let tau_views: Vec<ArrayView1<f64>> = results
        .coherence_intervals
        .iter()
        .map(|t| t.view())
        .collect();
    let rates: Array3<f64> = if rate_views.is_empty() {
        Array3::zeros((0, 0, 0))
    } else {
        stack(Axis(0), &rate_views).context("The rate matrices differ in size")?
    };
    let intervals: Array2<f64> = if tau_views.is_empty() {
        Array2::zeros((0, 0))
    } else {
        stack(Axis(0), &tau_views).context("The coherence intervals differ in size")?
    };

    let file = File::create(filename)
        .with_context(|| format!("Unable to create output file {}", filename.display()))?;
    let mut npz = NpzWriter::new(file);
    npz.add_array("rates", &rates)?;
    npz.add_array("coherence_intervals", &intervals)?;
    npz.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray_npy::NpzReader;
    use std::env;
    use std::fs;

    #[test]
    fn results_are_stacked_by_trajectory() {
        let path = env::temp_dir().join(format!("dish_results_{}.npz", std::process::id()));
        let results = DecoherenceResults {
            rates: vec![array![[0.0, 0.25], [0.25, 0.0]], array![[0.0, 0.15], [0.15, 0.0]]],
            coherence_intervals: vec![array![1.0e25, 4.0], array![10.0, 20.0]],
        };
        write_results(&path, &results).unwrap();

        let mut npz = NpzReader::new(File::open(&path).unwrap()).unwrap();
        let names: Vec<String> = npz.names().unwrap();
        let rates_name = names.iter().find(|n| n.starts_with("rates")).unwrap().clone();
        let tau_name = names
            .iter()
            .find(|n| n.starts_with("coherence_intervals"))
            .unwrap()
            .clone();
        let rates: Array3<f64> = npz.by_name(&rates_name).unwrap();
        let tau: Array2<f64> = npz.by_name(&tau_name).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(rates.dim(), (2, 2, 2));
        assert_eq!(rates[[1, 0, 1]], 0.15);
        assert_eq!(tau, array![[1.0e25, 4.0], [10.0, 20.0]]);
    }
}
