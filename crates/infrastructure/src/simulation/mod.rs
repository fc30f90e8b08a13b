pub mod delay;
pub mod oracle;

pub use delay::{ConfiguredDelay, NoDelay};
pub use oracle::RandomChangeOracle;
