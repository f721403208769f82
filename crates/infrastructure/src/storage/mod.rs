mod toml_credential_store;

pub use toml_credential_store::TomlCredentialStore;
