pub mod activities_repo;
pub mod activity_directory;

pub use activity_directory::{ActivityDirectory, DirectoryError, DirectoryResult};
