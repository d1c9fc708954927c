//! Await a single fallible operation and get an [`Outcome`] back instead of
//! propagating its failure.
//!
//! ```no_run
//! # async fn demo() {
//! let (error, data) = settled::settle(async { Err::<u32, _>("no data") })
//!     .await
//!     .into_tuple();
//!
//! if let Some(error) = error {
//!     eprintln!("error: {error}");
//! } else {
//!     println!("data: {data:?}");
//! }
//! # }
//! ```

mod config;
pub use config::Config;

mod error;
pub use error::{Error, Origin};

mod outcome;
pub use outcome::Outcome;

mod rejection;
pub use rejection::{Raised, Rejection, Thrown, ThrownDebug};

mod settle;
pub use settle::{settle, settle_value, settle_with, SettleExt};

mod util;

pub mod test;
