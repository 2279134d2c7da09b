pub use super::blog::Entity as Blog;
pub use super::blog_category::Entity as BlogCategory;
pub use super::blog_viewing::Entity as BlogViewing;
pub use super::blogsite_user::Entity as BlogsiteUser;
pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::district::Entity as District;
pub use super::message::Entity as Message;
pub use super::region::Entity as Region;
pub use super::site::Entity as Site;
