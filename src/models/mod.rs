pub mod alert;
pub mod daily_digest;
pub mod emergency_contact;
pub mod enums;
pub mod message;
pub mod pet;
pub mod pet_video;
pub mod quick_action;
pub mod user;

pub use alert::Alert;
pub use daily_digest::DailyDigest;
pub use emergency_contact::EmergencyContact;
pub use enums::{ActionStatus, ActionType, ContactType, Platform, Severity};
pub use message::{MessageBody, StructuredMessage};
pub use pet::Pet;
pub use pet_video::PetVideo;
pub use quick_action::QuickAction;
pub use user::User;
