//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate, so
//! signatures don't have to spell out `entity::<table>::Model`.

/// Account record. `password` holds the encoded hash, never the raw password.
pub type UserModel = entity::blogsite_user::Model;

pub type RegionModel = entity::region::Model;

/// District of a region; `region_id` always references an existing region.
pub type DistrictModel = entity::district::Model;

/// Category tag with a unique slug derived from its name.
pub type CategoryModel = entity::category::Model;

/// Organizational metadata. `social` is a JSON object of network name to URL.
pub type SiteModel = entity::site::Model;

/// Blog post.
///
/// # Fields (from `entity::blog::Model`)
/// - `id` - Primary key
/// - `title` - Human-readable title
/// - `slug` - Unique URL identifier derived from the title
/// - `description` - Body text
/// - `status` - Lifecycle status (active, canceled, draft)
/// - `author_id` - Optional foreign key to the author
/// - `view_count` - Number of recorded viewings
/// - `created_at` - Creation timestamp
/// - `updated_at` - Timestamp of the last update
pub type BlogModel = entity::blog::Model;

pub type BlogViewingModel = entity::blog_viewing::Model;

pub type CommentModel = entity::comment::Model;

/// Contact message; `status` is `true` once resolved.
pub type MessageModel = entity::message::Model;
