pub mod contact;
mod resend;
mod service;
mod smtp;

pub use resend::ResendTransport;
pub use service::*;
pub use smtp::SmtpTransport;
