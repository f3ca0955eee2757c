pub mod app;

pub use app::collector::{collect, collect_included_files, Collector};
pub use app::error::CollectError;
pub use app::models::{CollectOptions, Collection};
pub use app::scanner::should_include;
