pub mod initialize;
pub mod set_paused;
pub mod create_switch;
pub mod deposit;
pub mod check_in;
pub mod update_beneficiary;
pub mod cancel;
pub mod claim;
pub mod utils;

pub use initialize::*;
pub use set_paused::*;
pub use create_switch::*;
pub use deposit::*;
pub use check_in::*;
pub use update_beneficiary::*;
pub use cancel::*;
pub use claim::*;
pub use utils::*;
