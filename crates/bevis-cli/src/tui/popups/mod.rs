//! Popup dialogs
//!
//! Two independent overlays: the Kontroll explainer and the European
//! student-card placeholder. Neither touches the sequencer.

pub mod common;
pub mod eu_card;
pub mod kontroll_info;

pub use eu_card::EuCardPopup;
pub use kontroll_info::KontrollInfoPopup;

#[derive(Default)]
pub struct Popups {
    pub kontroll_info: KontrollInfoPopup,
    pub eu_card: EuCardPopup,
}

impl Popups {
    pub fn any_visible(&self) -> bool {
        self.kontroll_info.visible || self.eu_card.visible
    }

    pub fn close_all(&mut self) {
        self.kontroll_info.close();
        self.eu_card.close();
    }
}
