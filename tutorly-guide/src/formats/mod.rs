//! Format implementations
//!
//! Each module renders a [`StudyGuideDocument`](crate::model::StudyGuideDocument)
//! into one output representation.

pub mod docdef;
pub mod latex;
pub mod pdf;

pub use docdef::DocDefFormat;
pub use latex::LatexFormat;
#[cfg(feature = "native-export")]
pub use pdf::ChromeLayoutEngine;
pub use pdf::PdfFormat;
