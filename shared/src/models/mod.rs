//! Domain models for ZenTrip Atlas

mod analytics;
mod climate;
mod country;
mod place;
mod ranking;
mod subscriber;
mod synthesis;

pub use analytics::*;
pub use climate::*;
pub use country::*;
pub use place::*;
pub use ranking::*;
pub use subscriber::*;
pub use synthesis::*;
