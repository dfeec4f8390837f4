pub mod accuracy_stats;
pub mod feedback_stats;
pub mod loading;
pub mod nav;
pub mod opponent_stats;
