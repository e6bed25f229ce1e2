mod landing;
pub use landing::{LandingView, Subscription};

mod auth_page;
pub use auth_page::AuthPageView;

mod destination;
pub use destination::DestinationView;
