//! Core algorithms – size resolution, font selection and address layout.
//!
//! Nothing in this module depends on the PDF backend; everything here is
//! plain data and arithmetic.

pub mod font;
pub mod layout;
pub mod size;
