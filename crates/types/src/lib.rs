pub mod bid;
pub mod card;
pub mod error;
pub mod hand;
pub mod io;
pub mod rank;
pub mod suit;
pub mod suit_counts;

pub use bid::Bid;
pub use card::{Card, CardToken};
pub use error::{InvalidHandError, ParseBidError};
pub use hand::Hand;
pub use rank::Rank;
pub use suit::Suit;
pub use suit_counts::SuitCounts;
