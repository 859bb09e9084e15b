pub mod doubtfire_client;

pub use doubtfire_client::DoubtfireClient;
