use application_ports::verification::VerificationPort;
use std::sync::Arc;

pub trait Locator {
    fn get_verification_port(&self) -> Arc<dyn VerificationPort + Send + Sync>;
}
