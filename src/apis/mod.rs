pub mod steam_store;
pub mod steam_workshop;

pub use steam_store::StoreClient;
pub use steam_workshop::WorkshopClient;
