// innkeep-api: Async Rust client for the innkeep hotel management REST API
//
// One parameterized client serves both the admin and the guest surface.
// Resource helpers hang off `ApiClient` as lightweight borrowed handles
// (`client.rooms()`, `client.payments()`, ...).

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod frontdesk;
pub mod guests;
pub mod payments;
pub mod reservations;
pub mod rooms;
pub mod session;
pub mod statistics;
pub mod surface;
pub mod transport;
pub mod users;

pub use auth::{LoginRequest, Role, SessionInfo};
pub use client::{ApiClient, ClientConfig, RequestOptions};
pub use envelope::Envelope;
pub use error::Error;
pub use frontdesk::FrontDesk;
pub use guests::Guests;
pub use payments::{Payments, simulated_provider_id};
pub use reservations::Reservations;
pub use rooms::Rooms;
pub use session::{MemoryStore, Navigator, NoNavigation, SessionStore, StorageKeys};
pub use statistics::Statistics;
pub use surface::Surface;
pub use transport::{TlsMode, TransportConfig};
pub use users::Users;
