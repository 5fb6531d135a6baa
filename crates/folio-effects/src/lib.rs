//! Page behaviors for the folio portfolio.
//!
//! Every behavior is modelled as a function from the triggering event and
//! the element state to a style value. Hosts apply the returned values once
//! per frame instead of mutating element styles from scattered handlers.
//! The few behaviors that need memory across events (menu, counters,
//! visibility watches, the Konami detector) are small owned state machines.

pub mod a11y;
pub mod counter;
pub mod konami;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod style;
pub mod tilt;
pub mod typewriter;

pub use style::{ElementStyle, Transform};
