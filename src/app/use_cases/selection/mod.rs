//! Use-Case-Funktionen für die Auswahl.
//!
//! - `pick`: Auswahl per Marker-ID (Karten-Klick nach Hit-Test)
//! - `list`: Auswahl per Listeneintrag (auch ohne Koordinate)
//! - `helpers`: Uebergang der Zustandsmaschine und Nachfuehren nach Rebuild

mod helpers;
mod list;
mod pick;

pub use helpers::repoint_after_rebuild;
pub use list::{select_faculty, select_room};
pub use pick::select_marker;
