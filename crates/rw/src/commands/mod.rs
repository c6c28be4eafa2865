//! CLI command implementations.

pub(crate) mod list;
pub(crate) mod render;

pub(crate) use list::CommandsArgs;
pub(crate) use render::RenderArgs;
