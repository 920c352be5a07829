use application::verification::VerificationService;
use application_ports::verification::VerificationPort;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    verification_adapter: Arc<VerificationService>,
}

impl ApplicationPortLocator {
    pub fn new(verification_adapter: Arc<VerificationService>) -> Self {
        Self {
            verification_adapter,
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_verification_port(&self) -> Arc<dyn VerificationPort + Send + Sync> {
        self.verification_adapter.clone()
    }
}
