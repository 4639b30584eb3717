//! Response envelope types shared by the client and tool crates.

pub mod object;
pub mod response;

pub use object::ApiObject;
pub use response::Response;
