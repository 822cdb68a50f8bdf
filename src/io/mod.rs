mod imprint;
mod input;
mod output;
pub(crate) mod settings;

pub use imprint::{write_footer, write_header};
pub use input::read_snapshots;
pub use output::write_results;
pub use settings::Configuration;
