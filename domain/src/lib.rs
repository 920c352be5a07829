pub mod ports;
pub mod verification;
