mod login;
pub use login::*;

mod session;
pub use session::*;

mod types;
pub use types::*;
