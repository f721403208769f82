pub mod allowlist;
pub mod settings;

pub use allowlist::AddToAllowlistUseCase;
pub use settings::{
    GetSetupStatusUseCase, SaveCredentialsUseCase, SetupStatus, TestConnectionUseCase,
};
