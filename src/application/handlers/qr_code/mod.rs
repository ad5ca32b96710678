//! QR code management handlers.

mod manage;

pub use manage::{CreateQrCodeCommand, QrCodeHandler, UpdateQrCodeStatusCommand};
