pub mod comparison;

pub use comparison::{comparison_figure, save_comparison_figure, save_spectrum, spectrum_frame};
