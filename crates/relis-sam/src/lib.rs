//! Statistical analysis model (SAM) assembly.
//!
//! This crate turns a project's classification schema into the metamodel the
//! code-generation templates consume:
//!
//! - **classify**: raw field attributes to `Nominal` / `Continuous` / `Unknown`
//! - **multiplicity**: single or multiple valued fields
//! - **select**: statistical functions applicable to a data type
//! - **filter**: removal of internal bookkeeping fields
//! - **augment**: injection of project-wide static fields
//! - **normalize**: one raw field to one classification field
//! - **assemble**: the whole pipeline
//!
//! # Example
//!
//! ```ignore
//! use relis_sam::assemble;
//!
//! let assembly = assemble(schema, &config);
//! let context = relis_model::RenderContext::new(&assembly.sam, &config);
//! ```

pub mod assemble;
pub mod augment;
pub mod classify;
pub mod filter;
pub mod multiplicity;
pub mod normalize;
pub mod select;

pub use assemble::{Assembly, RejectedField, assemble};
pub use augment::augment_static;
pub use classify::{Classification, classify, classify_attributes};
pub use filter::filter_metadata;
pub use multiplicity::is_multiple;
pub use normalize::{NormalizedField, normalize_field};
pub use select::select_functions;
