pub mod board;
pub mod config;
pub mod feed;
pub mod id;
pub mod item;
pub mod project;
pub mod session;
pub mod status;
pub mod team;
pub mod workspace;

pub use board::*;
pub use config::*;
pub use feed::*;
pub use id::*;
pub use item::*;
pub use project::*;
pub use session::*;
pub use status::*;
pub use team::*;
pub use workspace::*;
