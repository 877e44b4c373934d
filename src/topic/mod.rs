pub mod publisher;
pub mod signing;
pub mod sns_client;

pub use publisher::{PublishError, PublishReceipt, Publisher};
pub use sns_client::SnsClient;
