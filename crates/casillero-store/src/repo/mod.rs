pub mod addresses;
pub mod clients;
pub mod quotes;
pub mod trackings;

pub use addresses::AddressesRepo;
pub use clients::{ClientsRepo, Registration};
pub use quotes::QuotesRepo;
pub use trackings::TrackingsRepo;
