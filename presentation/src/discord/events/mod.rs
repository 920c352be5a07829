pub mod message;
pub mod voice_state;

#[cfg(test)]
pub(crate) mod tests {
    use crate::application_ports::Locator;
    use crate::discord::Data;
    use application_ports::verification::{
        CommandMessageDto, CommandOutcome, VerificationError, VerificationPort, VoiceStateDto,
        VoiceStateOutcome,
    };
    use async_trait::async_trait;
    use poise::serenity_prelude::GuildId;
    use std::sync::{Arc, Mutex};

    pub const GUILD_ID: u64 = 1;

    /// Records every call instead of running the verification flow.
    #[derive(Default)]
    pub struct RecordingPort {
        pub commands: Mutex<Vec<CommandMessageDto>>,
        pub voice_states: Mutex<Vec<VoiceStateDto>>,
    }

    #[async_trait]
    impl VerificationPort for RecordingPort {
        async fn handle_command(
            &self,
            command: CommandMessageDto,
        ) -> Result<CommandOutcome, VerificationError> {
            self.commands.lock().unwrap().push(command);
            Ok(CommandOutcome::NotACommand)
        }

        async fn handle_voice_state(
            &self,
            voice_state: VoiceStateDto,
        ) -> Result<VoiceStateOutcome, VerificationError> {
            self.voice_states.lock().unwrap().push(voice_state);
            Ok(VoiceStateOutcome::Ignored)
        }
    }

    pub struct RecordingLocator(pub Arc<RecordingPort>);

    impl Locator for RecordingLocator {
        fn get_verification_port(&self) -> Arc<dyn VerificationPort + Send + Sync> {
            self.0.clone()
        }
    }

    pub fn data() -> (Data<RecordingLocator>, Arc<RecordingPort>) {
        let port = Arc::new(RecordingPort::default());
        let data = Data {
            locator: RecordingLocator(port.clone()),
            guild: GuildId::new(GUILD_ID),
        };
        (data, port)
    }
}
