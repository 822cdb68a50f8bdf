use crate::defaults::*;
use serde::{Deserialize, Serialize};

fn default_c_param() -> f64 {
    DECOHERENCE_CONSTANT
}
fn default_eps_param() -> f64 {
    DECOHERENCE_EPSILON
}
fn default_use_dephasing_correction() -> bool {
    USE_DEPHASING_CORRECTION
}

/// Struct that holds the parameters of the decoherence rates and of the
/// dephasing-informed correction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DecoherenceConfiguration {
    #[serde(default = "default_c_param")]
    pub c_param: f64,
    #[serde(default = "default_eps_param")]
    pub eps_param: f64,
    #[serde(default = "default_use_dephasing_correction")]
    pub use_dephasing_correction: bool,
}

impl Default for DecoherenceConfiguration {
    fn default() -> Self {
        Self {
            c_param: DECOHERENCE_CONSTANT,
            eps_param: DECOHERENCE_EPSILON,
            use_dephasing_correction: USE_DEPHASING_CORRECTION,
        }
    }
}
