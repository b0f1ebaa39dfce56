//! Terminal exports of the convoy pipeline.
//!
//! Both writers take an [`IntegerTable`](convoy_model::IntegerTable) without
//! a score column and keep the header order of the source file.

mod common;
mod data;
mod error;
mod markup;

pub use common::{EXPORT_ROOT, EXPORT_ROW, is_valid_element_name};
pub use data::{DataOptions, render_data, write_data_export};
pub use error::{OutputError, Result};
pub use markup::{MarkupOptions, render_markup, write_markup_export};
