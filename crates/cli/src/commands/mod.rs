pub mod add;
pub mod configure;
pub mod dispatch;
pub mod status;
