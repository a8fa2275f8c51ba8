pub mod error;
pub mod gate;
pub mod loader;
pub mod model;
pub mod rank;
pub mod search;
pub mod standings;
pub mod theme;
pub mod time_format;
pub mod updates;

pub use error::LoadError;
pub use gate::{AccessGate, GateError};
pub use loader::{HttpResponse, LoadStatus, SnapshotLoader, SnapshotTransport};
pub use model::*;
pub use rank::RankMap;
pub use search::{MemberSearch, search_members};
pub use standings::MemberCard;
pub use theme::{BRAND_GOLD, BRAND_PURPLE, BrandColor, ColorTheme, Podium, Swatch, resolve_theme};
pub use updates::{UpdateCard, update_cards};
