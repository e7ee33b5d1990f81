//! JSON source document parsing and validation for the ctxgen React
//! context generator.
//!
//! The source document lists the types to generate context and
//! context-builder files for, plus generation options:
//!
//! ```json
//! {
//!     "types": [
//!         {
//!             "name": "userProfile",
//!             "props": [
//!                 { "name": "displayName", "type": "string", "defaultValue": "anon" }
//!             ]
//!         }
//!     ],
//!     "options": { "majorVersion": { "react-router-dom": 6 } }
//! }
//! ```

mod error;
mod manifest;
mod parse;
mod validate;

pub use error::{Error, Result};
pub use manifest::{
    ContextBuilderSection, ContextSection, Manifest, Options, PropertyDescriptor, TypeDescriptor,
};
