// Landing page sections, in page order

mod capabilities;
mod contact;
mod footer;
mod header;
mod heps;
mod hero;
mod platforms;

pub use capabilities::Capabilities;
pub use contact::Contact;
pub use footer::{Footer, copyright};
pub use header::Header;
pub use heps::Heps;
pub use hero::Hero;
pub use platforms::Platforms;
