//! QR code module - Physical entry points into a company's chatbot.

mod code;
mod qr_code;

pub use code::{generate_code, is_valid_code, CODE_ALPHABET, CODE_LENGTH};
pub use qr_code::{Channel, QrCode, QrCodeStatus, Scan};
