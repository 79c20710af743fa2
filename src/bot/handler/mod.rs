// Exported functions
pub use self::payout::{build_payout_reply, payout};

// Exported structs and types
pub use self::payout::{PayoutEmbed, PayoutReply};

// Submodules
mod constants;
mod payout;
mod utils;
