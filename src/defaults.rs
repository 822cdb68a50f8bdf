// config file
pub const CONFIG_FILE_NAME: &str = "dish.toml";
// file to which the rates and coherence intervals are written
pub const OUTPUT_FILE_NAME: &str = "decoherence.npz";
// print level
pub const VERBOSE: i8 = 0;
// number of threads used by rayon
pub const NUMBER_OF_CORES: usize = 1;
