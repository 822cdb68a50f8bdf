use crate::batch::TrajectoryBatch;
use anyhow::{bail, Context, Result};
use dish_decoherence::c64;
use ndarray::prelude::*;
use ndarray::{Data, DataOwned, Zip};
use ndarray_npy::{NpzReader, ReadableElement};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Reads the trajectory snapshots from a .npz archive. The archive has to contain the
/// arrays `hvib_real` (ntraj, nstates, nstates), `kinetic_energy` (ntraj) and
/// `coefficients_real` (ntraj, nstates). The imaginary parts `hvib_imag`,
/// `coefficients_imag` and the time-averaged gaps `average_gaps` (nstates, nstates)
/// are optional.
pub fn read_snapshots(filename: &Path) -> Result<TrajectoryBatch> {
    let file = File::open(filename)
        .with_context(|| format!("Unable to open snapshot file {}", filename.display()))?;
    let mut npz = NpzReader::new(file)
        .with_context(|| format!("{} is not a valid npz archive", filename.display()))?;
    snapshots_from_npz(&mut npz)
}

fn snapshots_from_npz<R: Read + Seek>(npz: &mut NpzReader<R>) -> Result<TrajectoryBatch> {
    let names: Vec<String> = npz.names().context("Unable to list the npz archive")?;

    let hvib_real: Array3<f64> = read_required(npz, &names, "hvib_real")?;
    let hvib_imag: Array3<f64> = read_optional(npz, &names, "hvib_imag")?
        .unwrap_or_else(|| Array3::zeros(hvib_real.raw_dim()));
    let coeff_real: Array2<f64> = read_required(npz, &names, "coefficients_real")?;
    let coeff_imag: Array2<f64> = read_optional(npz, &names, "coefficients_imag")?
        .unwrap_or_else(|| Array2::zeros(coeff_real.raw_dim()));
    let kinetic_energy: Array1<f64> = read_required(npz, &names, "kinetic_energy")?;
    let average_gaps: Option<Array2<f64>> = read_optional(npz, &names, "average_gaps")?;

    let (ntraj, nstates, ncols) = hvib_real.dim();
    if nstates != ncols {
        bail!("hvib has to be square, got {} x {}", nstates, ncols);
    }
    if hvib_imag.dim() != hvib_real.dim() {
        bail!(
            "hvib_real {:?} and hvib_imag {:?} differ in shape",
            hvib_real.dim(),
            hvib_imag.dim()
        );
    }
    if coeff_real.dim() != (ntraj, nstates) || coeff_imag.dim() != (ntraj, nstates) {
        bail!(
            "coefficients have to be of shape ({}, {}), got {:?} and {:?}",
            ntraj,
            nstates,
            coeff_real.dim(),
            coeff_imag.dim()
        );
    }
    if let Some(gaps) = average_gaps.as_ref() {
        if gaps.dim() != (nstates, nstates) {
            bail!(
                "average_gaps have to be of shape ({}, {}), got {:?}",
                nstates,
                nstates,
                gaps.dim()
            );
        }
    }
    // the rates are only defined for a positive kinetic energy
    if let Some((traj, ekin)) = kinetic_energy
        .iter()
        .enumerate()
        .find(|(_, ekin)| !(**ekin > 0.0))
    {
        bail!(
            "The kinetic energy of trajectory {} is {}, it has to be positive",
            traj + 1,
            ekin
        );
    }

    let hvib: Array3<c64> = to_complex(&hvib_real, &hvib_imag);
    let coefficients: Array2<c64> = to_complex(&coeff_real, &coeff_imag);

    Ok(TrajectoryBatch {
        hvib: hvib.outer_iter().map(|h| h.to_owned()).collect(),
        kinetic_energies: kinetic_energy.to_vec(),
        coefficients: coefficients.outer_iter().map(|c| c.to_owned()).collect(),
        average_gaps,
    })
}

fn to_complex<S, D>(real: &ArrayBase<S, D>, imag: &ArrayBase<S, D>) -> Array<c64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Zip::from(real)
        .and(imag)
        .map_collect(|re, im| c64::new(*re, *im))
}

/// The entry of an array in the archive, with or without the `.npy` extension.
fn entry_name<'a>(names: &'a [String], name: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|entry| *entry == name || entry.strip_suffix(".npy") == Some(name))
        .map(|entry| entry.as_str())
}

fn read_optional<R, S, D>(
    npz: &mut NpzReader<R>,
    names: &[String],
    name: &str,
) -> Result<Option<ArrayBase<S, D>>>
where
    R: Read + Seek,
    S: DataOwned,
    S::Elem: ReadableElement,
    D: Dimension,
{
    match entry_name(names, name) {
        Some(entry) => {
            let array: ArrayBase<S, D> = npz
                .by_name(entry)
                .with_context(|| format!("Unable to read the array {}", name))?;
            Ok(Some(array))
        }
        None => Ok(None),
    }
}

fn read_required<R, S, D>(
    npz: &mut NpzReader<R>,
    names: &[String],
    name: &str,
) -> Result<ArrayBase<S, D>>
where
    R: Read + Seek,
    S: DataOwned,
    S::Elem: ReadableElement,
    D: Dimension,
{
    read_optional(npz, names, name)?
        .with_context(|| format!("The array {} is missing in the snapshot file", name))
}
