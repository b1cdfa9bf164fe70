mod error;
mod ocrolus_client;

pub use error::OcrolusError;
pub use ocrolus_client::OcrolusClient;
