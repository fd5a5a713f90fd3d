pub mod method;
pub mod resource;

pub use method::{Method, MEDIA_WILDCARD};
pub use resource::{Resource, TemplateVar};
