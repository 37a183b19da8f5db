pub mod ports;

pub use ports::{CatalogSink, DirectoryLister, FolderEntry, PageFetcher};
