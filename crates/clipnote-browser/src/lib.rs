mod chrome_finder;
mod error;
mod launcher;
mod page_snapshot;
mod profile;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use launcher::ChromeLauncher;
pub use page_snapshot::{DEFAULT_SETTLE, PageSnapshotter};
pub use profile::ProfileManager;
