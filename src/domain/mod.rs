// ============================================================================
// Domain Models Module
// Contains the decoded records, exchange code tables and reader configuration
// ============================================================================

pub mod bulletin;
pub mod codes;
pub mod company;
pub mod config;

pub use bulletin::{DailyBulletin, Quote};
pub use codes::{ContractCorrection, DailyBulletinType, MarketType, QuoteSize};
pub use company::{CompanyDetail, RequestError, SecurityCode};
pub use config::{FieldFailurePolicy, ReaderConfig};
