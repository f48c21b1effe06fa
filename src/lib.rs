pub mod api;
pub mod dashboard;
pub mod models;
pub mod poller;
pub mod server;
pub mod state;
pub mod utils;

pub use dashboard::page::DashboardPage;
pub use poller::{PollError, PollerHandle, StatsPoller};
pub use server::Server;
