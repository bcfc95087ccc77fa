pub mod blocking;
pub mod dispatch;
pub mod reactive;
pub mod screening;
pub mod state;
