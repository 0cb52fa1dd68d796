pub mod error;
pub mod profile;
pub mod repository;

pub use error::{ProfileError, ProfileResult};
pub use profile::{APPLIANCES, DietaryPreference, SkillLevel, UserProfile, parse_list};
pub use repository::{
    FileProfileRepository, InMemoryProfileRepository, PROFILE_KEY, ProfileRepository,
    load_or_default,
};
