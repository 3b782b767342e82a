//! Testing utilities and harness for Panview

pub mod robot;
pub mod ticker;

pub use robot::*;
pub use ticker::ManualTicker;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::ticker::ManualTicker;
}
