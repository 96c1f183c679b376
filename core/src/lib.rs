//! # HappyForm core
//!
//! Presentation-independent pieces of HappyForm, shared by the native host
//! and the browser UI:
//!
//! - **field**: descriptors returned by the generation service
//! - **response**: the `generate_form` wire contract
//! - **render**: descriptor list to control list, two-column layout rules
//! - **html**: static HTML output for rendered forms
//! - **session**: busy flag, notices and request supersession

pub mod error;
pub mod field;
pub mod html;
pub mod render;
pub mod response;
pub mod session;

pub use error::{GenerationError, GenerationResult};
pub use field::{FieldDescriptor, FieldEntry, FieldKind, FormFieldList};
pub use render::{render, render_form, ColumnSpan, ControlShape, RenderedControl, RenderedForm};
pub use response::{generate_form_url, parse_generation_response, GenerateFormRequest};
pub use session::{Applied, FormSession, Notice, Phase, Ticket};
