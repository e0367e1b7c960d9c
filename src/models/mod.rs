//! Data models shared between the console and the authd API

pub mod session;
pub mod user;

pub use session::{DeviceData, Session};
pub use user::{NewUser, User};
