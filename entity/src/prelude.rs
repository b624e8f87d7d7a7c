pub use super::imageboard::Entity as Imageboard;
pub use super::member::Entity as Member;
