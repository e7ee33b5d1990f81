//! Generated TSX/TS file assemblers.

mod context_builder_tsx;
mod context_tsx;
mod support;

pub use context_builder_tsx::ContextBuilderTsx;
pub use context_tsx::ContextTsx;
pub use support::{builder_utils_file, custom_router_file, BUILDER_UTILS_FILE_NAME};
