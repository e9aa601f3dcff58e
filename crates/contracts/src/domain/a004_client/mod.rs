pub mod aggregate;

pub use aggregate::{normalize_phone, Client, ClientDto, ClientId, ClientRef, PHONE_PREFIX};
