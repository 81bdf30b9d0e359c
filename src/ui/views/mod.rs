pub mod certificates;
pub mod dashboard;
pub mod landing;
pub mod leaderboard;
pub mod quiz;
pub mod tutor;
