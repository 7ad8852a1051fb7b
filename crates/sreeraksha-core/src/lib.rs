pub mod analytics;
pub mod clock;
pub mod dashboard;
pub mod distress;
pub mod error;
pub mod feeds;
pub mod health;
pub mod map;
pub mod registry;
pub mod simulate;
pub mod types;

pub use analytics::*;
pub use clock::*;
pub use dashboard::*;
pub use distress::*;
pub use error::*;
pub use feeds::*;
pub use health::*;
pub use map::*;
pub use registry::*;
pub use simulate::*;
pub use types::*;
