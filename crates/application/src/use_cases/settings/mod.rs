mod get_setup_status;
mod save_credentials;
mod test_connection;

pub use get_setup_status::{GetSetupStatusUseCase, SetupStatus};
pub use save_credentials::SaveCredentialsUseCase;
pub use test_connection::TestConnectionUseCase;
