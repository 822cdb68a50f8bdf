// Energy-based decoherence, see eqn. (17) in JCP 126, 134114 (2007).
// constant C in hartree
pub const DECOHERENCE_CONSTANT: f64 = 1.0;
// constant epsilon in hartree
pub const DECOHERENCE_EPSILON: f64 = 0.1;
// If set to true, the rates are rescaled with the ratio of the instantaneous
// and the time-averaged energy gaps, JCP 150, 194104 (2019).
pub const USE_DEPHASING_CORRECTION: bool = false;
// Rate (and coherence interval) that is used as "infinite". It is chosen several
// orders of magnitude larger than any time step so that no decoherence event is
// triggered by it.
pub const INFINITE_DECOHERENCE: f64 = 1.0e25;
