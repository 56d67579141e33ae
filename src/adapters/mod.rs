// Adapters layer: concrete validators and schedule sources.

pub mod file;
pub mod local;
pub mod remote;

pub use local::LocalValidator;
pub use remote::RemoteValidator;
