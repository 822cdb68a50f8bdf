//! Decoherence rates and coherence intervals for trajectory surface hopping.
//!
//! All routines work on caller owned `ndarray` buffers. Hamiltonians are complex
//! matrices whose real diagonal holds the state energies, rates are real matrices
//! and the state amplitudes are complex vectors. The `*_batch` variants apply the
//! single-trajectory routines to a set of trajectories in parallel.

pub mod constants;
pub mod decoherence;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod settings;

pub use decoherence::*;
pub use error::BatchSizeError;
pub use settings::DecoherenceConfiguration;

/// Complex double precision number
#[allow(non_camel_case_types)]
pub type c64 = num_complex::Complex<f64>;
