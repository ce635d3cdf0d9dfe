//! CLI command implementations.

pub(crate) mod check_schema;
pub(crate) mod render;
pub(crate) mod validate;

pub(crate) use render::RenderArgs;
pub(crate) use validate::ValidateArgs;
