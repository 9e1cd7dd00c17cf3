pub mod board_ops;
pub mod check;
pub mod feed_ops;
pub mod session_ops;
pub mod stats;
pub mod team_ops;
pub mod workspace_ops;

pub use board_ops::StoreError;
