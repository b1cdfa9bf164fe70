mod ocrolus_api;

pub use ocrolus_api::OcrolusApi;
