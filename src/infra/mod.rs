pub mod fs_lister;
pub mod http_client;
pub mod json_sink;

pub use fs_lister::FsDirectoryLister;
pub use http_client::ReqwestFetcher;
pub use json_sink::JsonFileSink;
