pub use self::{complexity::*, cost::*, keypad::*, path::*, util::*};

mod complexity;
mod cost;
mod keypad;
mod path;
mod util;
