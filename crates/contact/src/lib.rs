mod envelope;
mod mailer;
mod submission;
mod validate;

pub mod endpoint;
pub mod form;

pub use envelope::*;
pub use mailer::*;
pub use submission::*;
pub use validate::*;
