pub mod echo;
pub mod user;

pub use echo::*;
pub use user::*;
