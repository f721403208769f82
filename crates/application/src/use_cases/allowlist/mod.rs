mod add_to_allowlist;

pub use add_to_allowlist::AddToAllowlistUseCase;
