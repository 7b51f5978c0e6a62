pub mod request;
pub mod server;

pub use request::OcrRequest;
pub use server::{router, start_server};
