pub mod module;
pub mod resource;

pub use module::Model as Module;
pub use resource::{Model as Resource, ResourceKind};

/// Identifier shared by modules and resources.
pub type ItemId = uuid::Uuid;
