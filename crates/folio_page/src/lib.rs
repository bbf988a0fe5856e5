pub mod contact;
pub mod navigation;
pub mod reveal;
pub mod scroll;

pub use contact::{
    ContactForm, EmailRelay, FormStatus, RelayError, RelayReceipt, StatusKind, TemplateParams,
};
pub use navigation::NavState;
pub use reveal::RevealObserver;
pub use scroll::SmoothScroll;
