// Interactive surface
pub mod prompts;
pub mod report;

pub use prompts::{read_cutoff, read_export, PromptError};
pub use report::{print_matching, print_report};
