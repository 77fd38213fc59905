//! Business logic services for ZenTrip Atlas

pub mod analytics;
pub mod climate;
pub mod country;
pub mod place;
pub mod recommendation;
pub mod seed;
pub mod subscriber;

pub use analytics::{AnalyticsService, RateLimiter, RecordEventInput};
pub use climate::ClimateService;
pub use country::CountryService;
pub use place::PlaceService;
pub use recommendation::{MonthDestination, RecommendationService};
pub use seed::{SeedService, SeedSummary};
pub use subscriber::SubscriberService;
