// Adapters layer: concrete apis and views the controllers can be wired to.

pub mod accounts;
pub mod console;
pub mod http;

pub use accounts::InMemoryAccounts;
pub use console::ConsoleView;
pub use http::HttpLoginApi;
