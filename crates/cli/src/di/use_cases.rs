use super::Adapters;
use nextdns_allow_application::use_cases::{
    AddToAllowlistUseCase, GetSetupStatusUseCase, SaveCredentialsUseCase, TestConnectionUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub add_to_allowlist: Arc<AddToAllowlistUseCase>,
    pub save_credentials: Arc<SaveCredentialsUseCase>,
    pub test_connection: Arc<TestConnectionUseCase>,
    pub get_setup_status: Arc<GetSetupStatusUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        Self {
            add_to_allowlist: Arc::new(AddToAllowlistUseCase::new(
                adapters.api.clone(),
                adapters.credentials.clone(),
                adapters.rate_limiter.clone(),
            )),
            save_credentials: Arc::new(SaveCredentialsUseCase::new(adapters.credentials.clone())),
            test_connection: Arc::new(TestConnectionUseCase::new(adapters.api.clone())),
            get_setup_status: Arc::new(GetSetupStatusUseCase::new(adapters.credentials.clone())),
        }
    }
}
