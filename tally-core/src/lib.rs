pub mod aggregate;
pub mod annotate;
pub mod config;
pub mod duration;
pub mod outline;
pub mod parse_line;
pub mod tracker;

pub use annotate::Annotation;
pub use config::Config;
pub use duration::TimeDuration;
pub use outline::{LineDescriptor, TaskTree};
pub use parse_line::MarkRange;
pub use tracker::{AnnotationResult, annotate_lines, annotate_ranges};
