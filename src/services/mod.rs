// Service exports
pub mod export;
pub mod roster;

pub use export::{partner_rows, save_pairing, write_pairing, ExportError};
pub use roster::{load_roster, parse_roster, RosterError};
