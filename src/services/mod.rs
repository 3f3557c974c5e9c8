pub mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod main;
pub mod personalities;
pub mod submissions;
pub mod youth_spotlight;
