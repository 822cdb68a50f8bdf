pub use correction::*;
pub use gaps::*;
pub use intervals::*;
pub use rates::*;

pub mod correction;
pub mod gaps;
pub mod intervals;
pub mod rates;
